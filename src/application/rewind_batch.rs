//! Rewind batch use case
//!
//! Drives the reconstruction engine over an ordered list of pairs,
//! giving each pair its own `Pair_{n}` output location.

use crate::application::dto::FailurePolicy;
use crate::domain::entities::{Pair, PairOutcome, PairStatus, RunEvent, RunReport};
use crate::domain::repositories::{ReconstructionEngine, RunObserver};
use crate::error::{PairError, RewindError};
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Rewind batch use case
///
/// Pairs are processed strictly in order on the calling thread. No pair
/// starts before the previous engine call has returned.
pub struct RewindBatchUseCase<E: ReconstructionEngine> {
    engine: E,
    failure_policy: FailurePolicy,
}

impl<E: ReconstructionEngine> RewindBatchUseCase<E> {
    /// Creates a new batch use case
    pub fn new(engine: E, failure_policy: FailurePolicy) -> Self {
        Self {
            engine,
            failure_policy,
        }
    }

    /// Executes the batch
    ///
    /// `output_root` is created if absent. Under `FailFast` the first
    /// failing pair ends the loop and the remaining pairs are reported as
    /// `NotAttempted`. The elapsed time covers the whole batch either way.
    pub fn execute(
        &self,
        pairs: &[Pair],
        output_root: &Path,
        observer: &dyn RunObserver,
    ) -> Result<RunReport, RewindError> {
        let start_time = Instant::now();
        let total = pairs.len();

        fs::create_dir_all(output_root).map_err(|source| RewindError::OutputRoot {
            path: output_root.to_path_buf(),
            source,
        })?;

        observer.notify(&RunEvent::BatchStarted { total });

        let mut report = RunReport::new(output_root.to_path_buf());
        let mut aborted = false;

        for pair in pairs {
            let output = pair.output_location(output_root);

            if aborted {
                report.push(PairOutcome::new(pair.clone(), output, PairStatus::NotAttempted));
                continue;
            }

            let status = match self.process(pair, &output, total, observer) {
                Ok(()) => {
                    observer.notify(&RunEvent::PairSucceeded {
                        index: pair.index(),
                    });
                    PairStatus::Succeeded
                }
                Err(e) => {
                    let reason = e.to_string();
                    observer.notify(&RunEvent::PairFailed {
                        index: pair.index(),
                        reason: reason.clone(),
                    });
                    if self.failure_policy == FailurePolicy::FailFast {
                        aborted = true;
                    }
                    PairStatus::Failed(reason)
                }
            };

            report.push(PairOutcome::new(pair.clone(), output, status));
        }

        report.set_elapsed(start_time.elapsed());

        observer.notify(&RunEvent::BatchCompleted {
            succeeded: report.succeeded(),
            failed: report.failed(),
            not_attempted: report.not_attempted(),
            elapsed: report.elapsed(),
        });

        Ok(report)
    }

    /// Creates the output location, announces the pair, runs the engine
    fn process(
        &self,
        pair: &Pair,
        output: &Path,
        total: usize,
        observer: &dyn RunObserver,
    ) -> Result<(), PairError> {
        fs::create_dir_all(output).map_err(|source| PairError::CreateOutput {
            path: output.to_path_buf(),
            source,
        })?;

        observer.notify(&RunEvent::PairStarted {
            index: pair.index(),
            total,
            mft: pair.mft().to_path_buf(),
            journal: pair.journal().to_path_buf(),
            output: output.to_path_buf(),
        });

        self.engine.rewind(output, pair.mft(), pair.journal())?;
        Ok(())
    }
}
