//! Progress events emitted while a run is processed
//!
//! `Display` renders each event as the operator log line.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// A notification sent to the run observer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunEvent {
    /// Discovery is about to walk `input_root`
    SearchStarted { input_root: PathBuf },
    /// Discovery finished
    CandidatesFound { mft: usize, journal: usize },
    /// Pairing finished
    PairsFormed { count: usize },
    /// The batch loop is starting
    BatchStarted { total: usize },
    /// A pair's output location exists and the engine is about to run
    PairStarted {
        index: usize,
        total: usize,
        mft: PathBuf,
        journal: PathBuf,
        output: PathBuf,
    },
    /// The engine returned for a pair
    PairSucceeded { index: usize },
    /// A pair failed
    PairFailed { index: usize, reason: String },
    /// The batch ended, normally or by abort
    BatchCompleted {
        succeeded: usize,
        failed: usize,
        not_attempted: usize,
        elapsed: Duration,
    },
}

impl RunEvent {
    /// True for events that report a failure
    pub fn is_error(&self) -> bool {
        matches!(self, RunEvent::PairFailed { .. })
    }
}

impl fmt::Display for RunEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunEvent::SearchStarted { .. } => f.write_str("Searching for MFT and USNJRNL files..."),
            RunEvent::CandidatesFound { mft, journal } => write!(
                f,
                "Found {} MFT files and {} USNJRNL files.",
                mft, journal
            ),
            RunEvent::PairsFormed { count } => {
                write!(f, "Paired {} MFT and USNJRNL files.", count)
            }
            RunEvent::BatchStarted { .. } => f.write_str("Starting USNJRNL rewind process..."),
            RunEvent::PairStarted {
                index,
                mft,
                journal,
                output,
                ..
            } => write!(
                f,
                "Processing pair {}:\n  MFT: {}\n  USNJRNL: {}\n  Output: {}",
                index,
                mft.display(),
                journal.display(),
                output.display()
            ),
            RunEvent::PairSucceeded { index } => write!(f, "Pair {} completed.", index),
            RunEvent::PairFailed { index, reason } => {
                write!(f, "Error during processing pair {}: {}", index, reason)
            }
            RunEvent::BatchCompleted {
                succeeded,
                failed,
                not_attempted,
                elapsed,
            } => {
                if *failed == 0 && *not_attempted == 0 {
                    writeln!(f, "USNJRNL rewind completed successfully.")?;
                } else if *not_attempted > 0 {
                    writeln!(
                        f,
                        "USNJRNL rewind aborted: {} succeeded, {} failed, {} not attempted.",
                        succeeded, failed, not_attempted
                    )?;
                } else {
                    writeln!(
                        f,
                        "USNJRNL rewind finished with errors: {} succeeded, {} failed.",
                        succeeded, failed
                    )?;
                }
                write!(f, "Process completed in {:.2} seconds.", elapsed.as_secs_f64())
            }
        }
    }
}
