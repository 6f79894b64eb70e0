//! Configuration file loading

mod file_config;

pub use file_config::{ConfigError, EngineSection, FileConfig, MarkerSection, RunSection};
