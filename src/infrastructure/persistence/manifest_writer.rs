//! Run manifest writer
//!
//! Records what a run did in `<output_root>/rewind_manifest.json`,
//! optionally with SHA-256 digests of every export that was paired.

use crate::application::dto::RunConfig;
use crate::domain::entities::{PairStatus, RunReport};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Manifest file name inside the output root
pub const MANIFEST_FILE: &str = "rewind_manifest.json";

/// Errors that can occur when writing the manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to hash {}: {source}", .path.display())]
    Hash {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

#[derive(Debug, Serialize)]
pub struct RunManifest {
    pub tool: String,
    pub version: String,
    pub started_at: DateTime<Utc>,
    pub input_root: PathBuf,
    pub output_root: PathBuf,
    pub pairing: String,
    pub failure_policy: String,
    pub elapsed_seconds: f64,
    pub succeeded: usize,
    pub failed: usize,
    pub not_attempted: usize,
    pub pairs: Vec<ManifestPair>,
}

#[derive(Debug, Serialize)]
pub struct ManifestPair {
    pub index: usize,
    pub mft: PathBuf,
    pub journal: PathBuf,
    pub output: PathBuf,
    pub status: PairStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mft_sha256: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journal_sha256: Option<String>,
}

/// Writes run manifests
#[derive(Debug, Default, Clone, Copy)]
pub struct RunManifestWriter {
    hash_inputs: bool,
}

impl RunManifestWriter {
    pub fn new(hash_inputs: bool) -> Self {
        Self { hash_inputs }
    }

    /// Builds the manifest for a finished run
    pub fn build(
        &self,
        config: &RunConfig,
        report: &RunReport,
        started_at: DateTime<Utc>,
    ) -> Result<RunManifest, ManifestError> {
        let mut pairs = Vec::with_capacity(report.outcomes().len());

        for outcome in report.outcomes() {
            let (mft_sha256, journal_sha256) = if self.hash_inputs {
                (
                    Some(sha256_file(outcome.pair.mft())?),
                    Some(sha256_file(outcome.pair.journal())?),
                )
            } else {
                (None, None)
            };

            pairs.push(ManifestPair {
                index: outcome.pair.index(),
                mft: outcome.pair.mft().to_path_buf(),
                journal: outcome.pair.journal().to_path_buf(),
                output: outcome.output.clone(),
                status: outcome.status.clone(),
                mft_sha256,
                journal_sha256,
            });
        }

        Ok(RunManifest {
            tool: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at,
            input_root: config.input_root.clone(),
            output_root: report.output_root().to_path_buf(),
            pairing: config.pairing.to_string(),
            failure_policy: config.failure_policy.to_string(),
            elapsed_seconds: report.elapsed().as_secs_f64(),
            succeeded: report.succeeded(),
            failed: report.failed(),
            not_attempted: report.not_attempted(),
            pairs,
        })
    }

    /// Builds and writes the manifest, returning its path
    pub fn write(
        &self,
        config: &RunConfig,
        report: &RunReport,
        started_at: DateTime<Utc>,
    ) -> Result<PathBuf, ManifestError> {
        let manifest = self.build(config, report, started_at)?;
        let path = report.output_root().join(MANIFEST_FILE);
        let json = serde_json::to_string_pretty(&manifest)?;
        fs::write(&path, json)?;

        tracing::info!("Wrote run manifest to {}", path.display());
        Ok(path)
    }
}

/// Hex SHA-256 digest of a file's contents
pub fn sha256_file(path: &Path) -> Result<String, ManifestError> {
    let hash_err = |source| ManifestError::Hash {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(hash_err)?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher).map_err(hash_err)?;
    Ok(hex::encode(hasher.finalize()))
}
