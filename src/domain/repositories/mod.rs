//! Repository traits (interfaces)
//!
//! These traits define the contracts for the collaborators a run
//! depends on: the rewind engine and the progress sink.

mod reconstruction_engine;
mod run_observer;

pub use reconstruction_engine::{EngineError, ReconstructionEngine};
pub use run_observer::RunObserver;
