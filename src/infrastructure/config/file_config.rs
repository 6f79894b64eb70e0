//! TOML configuration file
//!
//! ```toml
//! [markers]
//! mft = ["$MFT_Output"]
//! journal = ["$J_Output"]
//!
//! [engine]
//! program = "usnjrnl_rewind"
//! args = ["-m", "{mft}", "-u", "{journal}", "{output}"]
//!
//! [run]
//! pairing = "positional"
//! failure_policy = "fail-fast"
//! ```
//!
//! Every key is optional. Missing keys fall back to the built-in defaults.

use crate::application::dto::{FailurePolicy, Markers};
use crate::domain::services::PairingStrategy;
use crate::infrastructure::engines::{CommandEngine, DEFAULT_ARGS, DEFAULT_PROGRAM};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkerSection {
    pub mft: Option<Vec<String>>,
    pub journal: Option<Vec<String>>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineSection {
    pub program: Option<String>,
    pub args: Option<Vec<String>>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunSection {
    pub pairing: Option<PairingStrategy>,
    pub failure_policy: Option<FailurePolicy>,
}

/// Parsed configuration file
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub markers: MarkerSection,
    pub engine: EngineSection,
    pub run: RunSection,
}

impl FileConfig {
    /// Loads and parses a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses configuration text
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Markers with defaults filled in per kind
    pub fn markers(&self) -> Markers {
        let defaults = Markers::default();
        Markers {
            mft: self.markers.mft.clone().unwrap_or(defaults.mft),
            journal: self.markers.journal.clone().unwrap_or(defaults.journal),
        }
    }

    /// Builds the command engine, `program` taking precedence over the file
    pub fn command_engine(&self, program: Option<&str>) -> CommandEngine {
        let program = program
            .or(self.engine.program.as_deref())
            .unwrap_or(DEFAULT_PROGRAM);
        let args = self
            .engine
            .args
            .clone()
            .unwrap_or_else(|| DEFAULT_ARGS.iter().map(|a| a.to_string()).collect());

        CommandEngine::new(program, args)
    }
}
