//! Shared helpers for integration tests

#![allow(dead_code)]

use parking_lot::Mutex;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use usn_rewind::{EngineError, ReconstructionEngine};

/// File the recording engine drops into every output location it is given
pub const REWOUND_MARKER: &str = "rewound.txt";

/// One recorded engine invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub output: PathBuf,
    pub mft: PathBuf,
    pub journal: PathBuf,
    pub output_existed: bool,
}

/// Engine stub recording every call, failing on selected call numbers
#[derive(Debug, Default)]
pub struct RecordingEngine {
    calls: Mutex<Vec<Call>>,
    fail_on: HashSet<usize>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails the given 1-based call numbers
    pub fn failing_on(calls: &[usize]) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_on: calls.iter().copied().collect(),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }
}

impl ReconstructionEngine for RecordingEngine {
    fn rewind(&self, output_dir: &Path, mft: &Path, journal: &Path) -> Result<(), EngineError> {
        let mut calls = self.calls.lock();
        let output_existed = output_dir.is_dir();
        calls.push(Call {
            output: output_dir.to_path_buf(),
            mft: mft.to_path_buf(),
            journal: journal.to_path_buf(),
            output_existed,
        });

        if self.fail_on.contains(&calls.len()) {
            return Err(EngineError::Other(format!(
                "corrupt journal {}",
                journal.display()
            )));
        }

        fs::write(output_dir.join(REWOUND_MARKER), mft.to_string_lossy().as_bytes())?;
        Ok(())
    }
}

/// Timestamp `secs` seconds after an arbitrary fixed base
pub fn t(secs: u64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(1_600_000_000 + secs)
}

/// Creates `dir/name` (parents included) with modification time `modified`
pub fn touch(dir: &Path, name: &str, modified: SystemTime) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, name.as_bytes()).unwrap();
    fs::File::options()
        .write(true)
        .open(&path)
        .unwrap()
        .set_modified(modified)
        .unwrap();
    path
}

/// Sorted names of the entries directly under `dir`
pub fn dir_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
