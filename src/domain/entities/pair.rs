//! Pair entity
//!
//! One (MFT export, journal export) input set and the output location
//! derived from its 1-based index.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Prefix of every per-pair output directory
pub const PAIR_DIR_PREFIX: &str = "Pair_";

/// A matched MFT/journal export pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pair {
    index: usize,
    mft: PathBuf,
    journal: PathBuf,
}

impl Pair {
    /// Creates a pair with the given 1-based index
    pub fn new(index: usize, mft: PathBuf, journal: PathBuf) -> Self {
        Self {
            index,
            mft,
            journal,
        }
    }

    /// Returns the 1-based sequence index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the MFT export path
    pub fn mft(&self) -> &Path {
        &self.mft
    }

    /// Returns the journal export path
    pub fn journal(&self) -> &Path {
        &self.journal
    }

    /// Directory name for this pair, e.g. `Pair_3` (no zero padding)
    pub fn dir_name(&self) -> String {
        format!("{}{}", PAIR_DIR_PREFIX, self.index)
    }

    /// Output location of this pair under `output_root`
    pub fn output_location(&self, output_root: &Path) -> PathBuf {
        output_root.join(self.dir_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_location_is_unpadded() {
        let pair = Pair::new(12, PathBuf::from("m"), PathBuf::from("j"));
        assert_eq!(pair.dir_name(), "Pair_12");
        assert_eq!(
            pair.output_location(Path::new("/out")),
            PathBuf::from("/out/Pair_12")
        );
    }
}
