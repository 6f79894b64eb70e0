//! Run rewind use case
//!
//! The full pipeline behind one "Run": validate the configuration,
//! discover exports, pair them and drive the batch.

use crate::application::discover_exports::DiscoverExportsUseCase;
use crate::application::dto::RunConfig;
use crate::application::rewind_batch::RewindBatchUseCase;
use crate::domain::entities::{Pair, RunEvent, RunReport};
use crate::domain::repositories::{ReconstructionEngine, RunObserver};
use crate::error::{Result, RewindError};
use std::fs;

/// Run rewind use case
pub struct RunRewindUseCase<E: ReconstructionEngine> {
    engine: E,
}

impl<E: ReconstructionEngine> RunRewindUseCase<E> {
    /// Creates a new run use case around `engine`
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Executes a full run
    ///
    /// Configuration and discovery problems are returned as errors before
    /// any `Pair_{n}` directory exists. Pair failures never surface as
    /// `Err`; they are recorded in the report according to the
    /// configured failure policy.
    pub fn execute(&self, config: &RunConfig, observer: &dyn RunObserver) -> Result<RunReport> {
        validate_input(config)?;

        fs::create_dir_all(&config.output_root).map_err(|source| RewindError::OutputRoot {
            path: config.output_root.clone(),
            source,
        })?;

        let pairs = discover_and_pair(config, observer)?;

        RewindBatchUseCase::new(&self.engine, config.failure_policy).execute(
            &pairs,
            &config.output_root,
            observer,
        )
    }
}

/// Discovers and pairs without touching the output root
///
/// Used for dry runs.
pub fn plan(config: &RunConfig, observer: &dyn RunObserver) -> Result<Vec<Pair>> {
    validate_input(config)?;
    discover_and_pair(config, observer)
}

fn validate_input(config: &RunConfig) -> Result<()> {
    if !config.input_root.is_dir() {
        return Err(RewindError::InvalidInput(config.input_root.clone()));
    }
    Ok(())
}

fn discover_and_pair(config: &RunConfig, observer: &dyn RunObserver) -> Result<Vec<Pair>> {
    let classifier = config.markers.classifier()?;

    observer.notify(&RunEvent::SearchStarted {
        input_root: config.input_root.clone(),
    });
    let exports = DiscoverExportsUseCase::new(classifier).execute(&config.input_root)?;

    let (mft, journal) = (exports.mft().len(), exports.journal().len());
    if exports.is_incomplete() {
        return Err(RewindError::NoCandidates { mft, journal });
    }
    observer.notify(&RunEvent::CandidatesFound { mft, journal });

    let (mft_files, journal_files) = exports.into_parts();
    let pairs = config.pairing.pair(mft_files, journal_files);

    if pairs.is_empty() {
        return Err(RewindError::NoPairs {
            pairing: config.pairing,
            mft,
            journal,
        });
    }
    if pairs.len() < mft.max(journal) {
        tracing::warn!(
            "{} pairing left {} MFT and {} USNJRNL exports unpaired",
            config.pairing,
            mft - pairs.len(),
            journal - pairs.len()
        );
    }
    observer.notify(&RunEvent::PairsFormed { count: pairs.len() });

    Ok(pairs)
}
