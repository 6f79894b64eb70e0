//! Data Transfer Objects

mod run_config;

pub use run_config::{FailurePolicy, Markers, RunConfig};
