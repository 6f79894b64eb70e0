//! Export classifier
//!
//! Classifies file names as MFT or journal exports by marker substring.
//! All markers are searched in a single Aho-Corasick pass.

use crate::domain::entities::ExportKind;
use aho_corasick::AhoCorasick;
use thiserror::Error;

/// Marker written into MFT export file names by the extraction tooling
pub const DEFAULT_MFT_MARKER: &str = "$MFT_Output";

/// Marker written into $UsnJrnl:$J export file names
pub const DEFAULT_JOURNAL_MARKER: &str = "$J_Output";

/// Errors building a classifier
#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("No {0} markers configured")]
    NoMarkers(ExportKind),

    #[error("Empty {0} marker")]
    EmptyMarker(ExportKind),

    #[error("Failed to build marker automaton: {0}")]
    Build(#[from] aho_corasick::BuildError),
}

/// Substring classifier over file names
///
/// A name containing any MFT marker is an MFT export, even when it also
/// contains a journal marker.
#[derive(Debug, Clone)]
pub struct MarkerClassifier {
    automaton: AhoCorasick,
    kinds: Vec<ExportKind>,
}

impl MarkerClassifier {
    /// Builds a classifier from marker lists
    pub fn new<S: AsRef<str>>(
        mft_markers: &[S],
        journal_markers: &[S],
    ) -> Result<Self, ClassifierError> {
        let mut patterns = Vec::with_capacity(mft_markers.len() + journal_markers.len());
        let mut kinds = Vec::with_capacity(patterns.capacity());

        for (kind, markers) in [
            (ExportKind::Mft, mft_markers),
            (ExportKind::Journal, journal_markers),
        ] {
            if markers.is_empty() {
                return Err(ClassifierError::NoMarkers(kind));
            }
            for marker in markers {
                let marker = marker.as_ref();
                if marker.is_empty() {
                    return Err(ClassifierError::EmptyMarker(kind));
                }
                patterns.push(marker.to_string());
                kinds.push(kind);
            }
        }

        let automaton = AhoCorasick::new(&patterns)?;
        Ok(Self { automaton, kinds })
    }

    /// Classifier for the `$MFT_Output` / `$J_Output` naming convention
    pub fn default_markers() -> Result<Self, ClassifierError> {
        Self::new(&[DEFAULT_MFT_MARKER], &[DEFAULT_JOURNAL_MARKER])
    }

    /// Classifies a file name, `None` when no marker occurs
    pub fn classify(&self, file_name: &str) -> Option<ExportKind> {
        let mut found = None;
        for m in self.automaton.find_overlapping_iter(file_name) {
            match self.kinds[m.pattern().as_usize()] {
                ExportKind::Mft => return Some(ExportKind::Mft),
                ExportKind::Journal => found = Some(ExportKind::Journal),
            }
        }
        found
    }

    /// File name with the first marker of `kind` removed
    ///
    /// `A$MFT_Output.csv` and `A$J_Output.csv` both yield `A.csv`.
    pub fn match_key(&self, file_name: &str, kind: ExportKind) -> String {
        let hit = self
            .automaton
            .find_overlapping_iter(file_name)
            .find(|m| self.kinds[m.pattern().as_usize()] == kind);

        match hit {
            Some(m) => format!("{}{}", &file_name[..m.start()], &file_name[m.end()..]),
            None => file_name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> MarkerClassifier {
        MarkerClassifier::default_markers().unwrap()
    }

    #[test]
    fn test_classify_by_marker() {
        let c = classifier();
        assert_eq!(c.classify("C$MFT_Output.csv"), Some(ExportKind::Mft));
        assert_eq!(c.classify("C$J_Output.csv"), Some(ExportKind::Journal));
        assert_eq!(c.classify("C_MFT.csv"), None);
    }

    #[test]
    fn test_mft_marker_wins_tie() {
        let c = classifier();
        assert_eq!(c.classify("x$J_Output$MFT_Output.csv"), Some(ExportKind::Mft));
        assert_eq!(c.classify("x$MFT_Output$J_Output.csv"), Some(ExportKind::Mft));
    }

    #[test]
    fn test_markers_are_case_sensitive() {
        assert_eq!(classifier().classify("c$mft_output.csv"), None);
    }

    #[test]
    fn test_match_key_strips_marker() {
        let c = classifier();
        assert_eq!(c.match_key("A$MFT_Output.csv", ExportKind::Mft), "A.csv");
        assert_eq!(c.match_key("A$J_Output.csv", ExportKind::Journal), "A.csv");
    }

    #[test]
    fn test_rejects_empty_marker_lists() {
        let none: [&str; 0] = [];
        assert!(matches!(
            MarkerClassifier::new(&none, &["$J"]),
            Err(ClassifierError::NoMarkers(ExportKind::Mft))
        ));
        assert!(matches!(
            MarkerClassifier::new(&["$MFT"], &[""]),
            Err(ClassifierError::EmptyMarker(ExportKind::Journal))
        ));
    }
}
