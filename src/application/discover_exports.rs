//! Discover exports use case
//!
//! Walks an input tree and partitions regular files into MFT and journal
//! candidates.

use crate::domain::entities::{CandidateFile, DiscoveredExports};
use crate::domain::services::MarkerClassifier;
use crate::error::DiscoveryError;
use std::path::Path;
use walkdir::WalkDir;

/// Discover exports use case
///
/// Read-only. Symlinks are not followed and only regular files are
/// classified. Entries are visited in file-name order within each
/// directory so traversal order does not vary across platforms.
pub struct DiscoverExportsUseCase {
    classifier: MarkerClassifier,
}

impl DiscoverExportsUseCase {
    /// Creates a new discovery use case
    pub fn new(classifier: MarkerClassifier) -> Self {
        Self { classifier }
    }

    /// Executes discovery under `root`
    ///
    /// The first traversal or metadata error aborts the walk and no
    /// partial result is returned.
    pub fn execute(&self, root: &Path) -> Result<DiscoveredExports, DiscoveryError> {
        tracing::debug!("Walking {}", root.display());

        let mut exports = DiscoveredExports::new();
        let walker = WalkDir::new(root).follow_links(false).sort_by_file_name();

        for entry in walker {
            let entry = entry.map_err(|source| DiscoveryError::Walk {
                path: source
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf()),
                source,
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            let Some(kind) = self.classifier.classify(&name) else {
                continue;
            };
            let match_key = self.classifier.match_key(&name, kind);

            let modified = entry
                .metadata()
                .map_err(|e| DiscoveryError::Metadata {
                    path: entry.path().to_path_buf(),
                    source: e.into(),
                })?
                .modified()
                .map_err(|source| DiscoveryError::Metadata {
                    path: entry.path().to_path_buf(),
                    source,
                })?;

            tracing::trace!("{} candidate: {}", kind, entry.path().display());
            exports.push(CandidateFile::new(
                entry.into_path(),
                kind,
                modified,
                match_key,
            ));
        }

        tracing::debug!(
            "Discovered {} MFT and {} journal candidates",
            exports.mft().len(),
            exports.journal().len()
        );

        Ok(exports)
    }
}
