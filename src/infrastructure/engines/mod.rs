//! Reconstruction engine implementations

mod command_engine;

pub use command_engine::{CommandEngine, DEFAULT_ARGS, DEFAULT_PROGRAM, ENGINE_LOG_FILE};
