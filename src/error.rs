//! Error types for a rewind run
//!
//! Configuration and discovery errors stop a run before any pair is
//! processed. Per-pair failures are recorded in the `RunReport` instead.

use crate::domain::repositories::EngineError;
use crate::domain::services::{ClassifierError, PairingStrategy};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while walking the input tree
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Failed to traverse {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read modification time of {}: {source}", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure of a single pair
#[derive(Error, Debug)]
pub enum PairError {
    #[error("Failed to create output directory {}: {source}", .path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Errors that stop a run before or outside the batch loop
#[derive(Error, Debug)]
pub enum RewindError {
    #[error("Invalid input directory path: {}", .0.display())]
    InvalidInput(PathBuf),

    #[error("Failed to create output directory {}: {source}", .path.display())]
    OutputRoot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid marker configuration: {0}")]
    Markers(#[from] ClassifierError),

    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error("No matching MFT or USNJRNL files found ({mft} MFT, {journal} USNJRNL)")]
    NoCandidates { mft: usize, journal: usize },

    #[error("{pairing} pairing matched none of {mft} MFT and {journal} USNJRNL files")]
    NoPairs {
        pairing: PairingStrategy,
        mft: usize,
        journal: usize,
    },
}

/// Result type alias for run operations
pub type Result<T> = std::result::Result<T, RewindError>;

impl RewindError {
    /// Detected before any work begins
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            RewindError::InvalidInput(_) | RewindError::OutputRoot { .. } | RewindError::Markers(_)
        )
    }

    /// Detected by discovery or pairing, before the batch loop
    pub fn is_discovery(&self) -> bool {
        matches!(
            self,
            RewindError::Discovery(_)
                | RewindError::NoCandidates { .. }
                | RewindError::NoPairs { .. }
        )
    }
}
