//! Pairing strategies
//!
//! Matches MFT exports with journal exports. Neither strategy inspects
//! file contents, so a pair is a best-effort guess that both exports
//! came from the same volume snapshot.

use crate::domain::entities::{CandidateFile, Pair};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// How MFT and journal candidates are matched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PairingStrategy {
    /// Sort both lists by modification time and zip by position.
    /// Excess files on the longer side are dropped.
    #[default]
    Positional,
    /// Pair files whose names are equal once the marker is removed,
    /// e.g. `A$MFT_Output.csv` with `A$J_Output.csv`.
    BaseName,
}

impl PairingStrategy {
    /// Pairs the candidates, assigning 1-based indices in output order
    pub fn pair(&self, mft: Vec<CandidateFile>, journal: Vec<CandidateFile>) -> Vec<Pair> {
        match self {
            PairingStrategy::Positional => pair_positional(mft, journal),
            PairingStrategy::BaseName => pair_by_base_name(mft, journal),
        }
    }
}

impl fmt::Display for PairingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairingStrategy::Positional => f.write_str("positional"),
            PairingStrategy::BaseName => f.write_str("base-name"),
        }
    }
}

impl FromStr for PairingStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "positional" | "mtime" => Ok(PairingStrategy::Positional),
            "base-name" | "basename" | "name" => Ok(PairingStrategy::BaseName),
            other => Err(format!(
                "unknown pairing strategy '{}' (expected positional or base-name)",
                other
            )),
        }
    }
}

/// Ascending modification time, ties broken by path
pub fn chronological(a: &CandidateFile, b: &CandidateFile) -> Ordering {
    a.modified()
        .cmp(&b.modified())
        .then_with(|| a.path().cmp(b.path()))
}

fn pair_positional(mut mft: Vec<CandidateFile>, mut journal: Vec<CandidateFile>) -> Vec<Pair> {
    mft.sort_by(chronological);
    journal.sort_by(chronological);

    mft.into_iter()
        .zip(journal)
        .enumerate()
        .map(|(i, (m, j))| Pair::new(i + 1, m.into_path(), j.into_path()))
        .collect()
}

fn pair_by_base_name(mut mft: Vec<CandidateFile>, mut journal: Vec<CandidateFile>) -> Vec<Pair> {
    mft.sort_by(chronological);
    journal.sort_by(chronological);

    let mut used = vec![false; journal.len()];
    let mut pairs = Vec::new();

    for m in mft {
        let hit = (0..journal.len()).find(|&i| !used[i] && journal[i].match_key() == m.match_key());
        if let Some(i) = hit {
            used[i] = true;
            pairs.push(Pair::new(
                pairs.len() + 1,
                m.into_path(),
                journal[i].path().to_path_buf(),
            ));
        } else {
            tracing::debug!("No journal export matches {}", m.path().display());
        }
    }

    pairs
}
