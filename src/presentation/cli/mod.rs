//! CLI module

mod commands;
mod progress;

pub use commands::{Cli, Commands, SelectionArgs, resolve_failure_policy};
pub use progress::ProgressReporter;
