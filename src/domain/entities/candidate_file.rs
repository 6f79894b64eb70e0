//! Candidate export entity
//!
//! A file found during discovery whose name marks it as an $MFT or
//! $UsnJrnl:$J export.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Which kind of export a candidate file is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportKind {
    /// Master File Table export
    Mft,
    /// USN change journal ($J) export
    Journal,
}

impl ExportKind {
    /// Returns the label used in operator-facing messages
    pub fn label(&self) -> &'static str {
        match self {
            ExportKind::Mft => "MFT",
            ExportKind::Journal => "USNJRNL",
        }
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A classified export file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// Path of the file, joined onto the discovery root
    path: PathBuf,
    /// Classification derived from the file name
    kind: ExportKind,
    /// Last-modified time captured at discovery
    modified: SystemTime,
    /// File name with the marker token removed
    match_key: String,
}

impl CandidateFile {
    /// Creates a new candidate file
    pub fn new(path: PathBuf, kind: ExportKind, modified: SystemTime, match_key: String) -> Self {
        Self {
            path,
            kind,
            modified,
            match_key,
        }
    }

    /// Returns the path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the export kind
    pub fn kind(&self) -> ExportKind {
        self.kind
    }

    /// Returns the last-modified time
    pub fn modified(&self) -> SystemTime {
        self.modified
    }

    /// Returns the marker-stripped file name used by base-name pairing
    pub fn match_key(&self) -> &str {
        &self.match_key
    }

    /// Consumes the candidate, returning its path
    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

/// Output of discovery: both candidate sets in traversal order
#[derive(Debug, Clone, Default)]
pub struct DiscoveredExports {
    mft: Vec<CandidateFile>,
    journal: Vec<CandidateFile>,
}

impl DiscoveredExports {
    /// Creates an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a candidate to the list matching its kind
    pub fn push(&mut self, candidate: CandidateFile) {
        match candidate.kind() {
            ExportKind::Mft => self.mft.push(candidate),
            ExportKind::Journal => self.journal.push(candidate),
        }
    }

    /// Returns the MFT candidates
    pub fn mft(&self) -> &[CandidateFile] {
        &self.mft
    }

    /// Returns the journal candidates
    pub fn journal(&self) -> &[CandidateFile] {
        &self.journal
    }

    /// True when either side has no candidates
    pub fn is_incomplete(&self) -> bool {
        self.mft.is_empty() || self.journal.is_empty()
    }

    /// Splits into (mft, journal)
    pub fn into_parts(self) -> (Vec<CandidateFile>, Vec<CandidateFile>) {
        (self.mft, self.journal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, kind: ExportKind) -> CandidateFile {
        CandidateFile::new(PathBuf::from(name), kind, SystemTime::UNIX_EPOCH, name.to_string())
    }

    #[test]
    fn test_push_routes_by_kind() {
        let mut exports = DiscoveredExports::new();
        exports.push(candidate("a$MFT_Output", ExportKind::Mft));
        exports.push(candidate("a$J_Output", ExportKind::Journal));
        exports.push(candidate("b$MFT_Output", ExportKind::Mft));

        assert_eq!(exports.mft().len(), 2);
        assert_eq!(exports.journal().len(), 1);
        assert!(!exports.is_incomplete());
    }

    #[test]
    fn test_incomplete_when_one_side_empty() {
        let mut exports = DiscoveredExports::new();
        exports.push(candidate("a$MFT_Output", ExportKind::Mft));
        assert!(exports.is_incomplete());
    }
}
