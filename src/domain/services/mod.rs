//! Domain services
//!
//! File-name classification and pairing policy.

mod classifier;
mod pairing;

pub use classifier::{
    ClassifierError, DEFAULT_JOURNAL_MARKER, DEFAULT_MFT_MARKER, MarkerClassifier,
};
pub use pairing::{PairingStrategy, chronological};
