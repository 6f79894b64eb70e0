//! Domain entities
//!
//! Core objects of a rewind run: classified export files, pairs,
//! progress events and the per-pair report.

mod candidate_file;
mod pair;
mod run_event;
mod run_report;

pub use candidate_file::{CandidateFile, DiscoveredExports, ExportKind};
pub use pair::{PAIR_DIR_PREFIX, Pair};
pub use run_event::RunEvent;
pub use run_report::{PairOutcome, PairStatus, RunReport};
