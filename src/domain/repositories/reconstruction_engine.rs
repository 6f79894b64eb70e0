//! Reconstruction engine trait
//!
//! Defines the interface of the external routine that replays a journal
//! export against an MFT export and writes the rewound state.

use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors raised by a reconstruction engine
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Rewind exited with {}: {message}", exit_label(.code))]
    Failed { code: Option<i32>, message: String },

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("Rewind error: {0}")]
    Other(String),
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

/// Trait for the rewind routine invoked once per pair
///
/// Implementations own everything they write inside `output_dir`.
/// The batch driver never calls two rewinds concurrently.
///
/// # Example
///
/// ```ignore
/// let engine = CommandEngine::default();
/// engine.rewind(Path::new("out/Pair_1"), Path::new("a$MFT_Output.csv"), Path::new("a$J_Output.csv"))?;
/// ```
pub trait ReconstructionEngine: Send + Sync {
    /// Rewinds one MFT/journal pair into `output_dir`
    fn rewind(&self, output_dir: &Path, mft: &Path, journal: &Path) -> Result<(), EngineError>;
}

impl<E: ReconstructionEngine + ?Sized> ReconstructionEngine for &E {
    fn rewind(&self, output_dir: &Path, mft: &Path, journal: &Path) -> Result<(), EngineError> {
        (**self).rewind(output_dir, mft, journal)
    }
}

impl<E: ReconstructionEngine + ?Sized> ReconstructionEngine for Box<E> {
    fn rewind(&self, output_dir: &Path, mft: &Path, journal: &Path) -> Result<(), EngineError> {
        (**self).rewind(output_dir, mft, journal)
    }
}
