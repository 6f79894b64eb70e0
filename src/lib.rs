//! usn-rewind
//!
//! Batch driver for rewinding NTFS metadata from exported $MFT and
//! $UsnJrnl:$J files: discovers the exports under a directory, pairs them
//! and invokes a reconstruction engine once per pair.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

pub use application::dto::{FailurePolicy, Markers, RunConfig};
pub use application::{DiscoverExportsUseCase, RewindBatchUseCase, RunRewindUseCase, plan};
pub use domain::entities::{
    CandidateFile, DiscoveredExports, ExportKind, Pair, PairOutcome, PairStatus, RunEvent,
    RunReport,
};
pub use domain::repositories::{EngineError, ReconstructionEngine, RunObserver};
pub use domain::services::{MarkerClassifier, PairingStrategy};
pub use error::{DiscoveryError, PairError, RewindError};
