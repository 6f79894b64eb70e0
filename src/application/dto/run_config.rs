//! Run configuration DTO

use crate::domain::services::{
    ClassifierError, DEFAULT_JOURNAL_MARKER, DEFAULT_MFT_MARKER, MarkerClassifier,
    PairingStrategy,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// What the batch loop does when a pair fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Stop at the first failing pair; later pairs are never attempted
    #[default]
    FailFast,
    /// Attempt every pair and record each outcome.
    /// Recommended for unattended batches.
    ContinueOnError,
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::FailFast => f.write_str("fail-fast"),
            FailurePolicy::ContinueOnError => f.write_str("continue-on-error"),
        }
    }
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fail-fast" | "failfast" => Ok(FailurePolicy::FailFast),
            "continue-on-error" | "continue" => Ok(FailurePolicy::ContinueOnError),
            other => Err(format!(
                "unknown failure policy '{}' (expected fail-fast or continue-on-error)",
                other
            )),
        }
    }
}

/// File-name markers used to classify exports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markers {
    pub mft: Vec<String>,
    pub journal: Vec<String>,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            mft: vec![DEFAULT_MFT_MARKER.to_string()],
            journal: vec![DEFAULT_JOURNAL_MARKER.to_string()],
        }
    }
}

impl Markers {
    /// Builds the classifier for these markers
    pub fn classifier(&self) -> Result<MarkerClassifier, ClassifierError> {
        MarkerClassifier::new(self.mft.as_slice(), self.journal.as_slice())
    }
}

/// Everything one run needs, fixed before the run starts
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Directory tree holding the exports
    pub input_root: PathBuf,
    /// Directory receiving one `Pair_{n}` folder per pair
    pub output_root: PathBuf,
    pub markers: Markers,
    pub pairing: PairingStrategy,
    pub failure_policy: FailurePolicy,
}

impl RunConfig {
    /// Creates a config with default markers, positional pairing and fail-fast
    pub fn new(input_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            input_root: input_root.into(),
            output_root: output_root.into(),
            markers: Markers::default(),
            pairing: PairingStrategy::default(),
            failure_policy: FailurePolicy::default(),
        }
    }

    /// Sets the pairing strategy
    pub fn with_pairing(mut self, pairing: PairingStrategy) -> Self {
        self.pairing = pairing;
        self
    }

    /// Sets the failure policy
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Replaces the markers
    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }
}
