//! Run report entity
//!
//! Per-pair outcomes of one batch run.

use super::pair::Pair;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Status of a single pair after a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum PairStatus {
    /// The engine returned without error
    Succeeded,
    /// Output creation or the engine failed
    Failed(String),
    /// Never reached because an earlier pair aborted the batch
    NotAttempted,
}

impl PairStatus {
    /// Returns true for `Failed`
    pub fn is_failed(&self) -> bool {
        matches!(self, PairStatus::Failed(_))
    }
}

impl fmt::Display for PairStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairStatus::Succeeded => f.write_str("succeeded"),
            PairStatus::Failed(reason) => write!(f, "failed: {}", reason),
            PairStatus::NotAttempted => f.write_str("not attempted"),
        }
    }
}

/// Outcome of one pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairOutcome {
    pub pair: Pair,
    pub output: PathBuf,
    pub status: PairStatus,
}

impl PairOutcome {
    pub fn new(pair: Pair, output: PathBuf, status: PairStatus) -> Self {
        Self {
            pair,
            output,
            status,
        }
    }
}

/// Result of a complete batch run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Root directory holding every `Pair_{n}` location
    output_root: PathBuf,
    /// One outcome per pair, in processing order
    outcomes: Vec<PairOutcome>,
    /// Wall-clock duration of the whole batch
    elapsed: Duration,
}

impl RunReport {
    /// Creates an empty report
    pub fn new(output_root: PathBuf) -> Self {
        Self {
            output_root,
            outcomes: Vec::new(),
            elapsed: Duration::ZERO,
        }
    }

    /// Appends the outcome of the next pair
    pub fn push(&mut self, outcome: PairOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    pub fn outcomes(&self) -> &[PairOutcome] {
        &self.outcomes
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of pairs that succeeded
    pub fn succeeded(&self) -> usize {
        self.count(|s| matches!(s, PairStatus::Succeeded))
    }

    /// Number of pairs that failed
    pub fn failed(&self) -> usize {
        self.count(PairStatus::is_failed)
    }

    /// Number of pairs skipped after a fail-fast abort
    pub fn not_attempted(&self) -> usize {
        self.count(|s| matches!(s, PairStatus::NotAttempted))
    }

    /// True when every pair succeeded (vacuously true for an empty batch)
    pub fn is_success(&self) -> bool {
        self.outcomes
            .iter()
            .all(|o| matches!(o.status, PairStatus::Succeeded))
    }

    /// First failing pair, if any
    pub fn first_failure(&self) -> Option<&PairOutcome> {
        self.outcomes.iter().find(|o| o.status.is_failed())
    }

    /// Returns a summary string
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "{} pairs: {} succeeded, {} failed",
            self.outcomes.len(),
            self.succeeded(),
            self.failed()
        );
        let skipped = self.not_attempted();
        if skipped > 0 {
            summary.push_str(&format!(", {} not attempted", skipped));
        }
        summary.push_str(&format!(" in {:.2}s", self.elapsed.as_secs_f64()));
        summary
    }

    fn count(&self, predicate: impl Fn(&PairStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| predicate(&o.status)).count()
    }
}
