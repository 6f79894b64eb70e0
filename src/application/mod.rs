//! Application layer
//!
//! Use cases that orchestrate discovery, pairing and the batch loop.

mod discover_exports;
pub mod dto;
mod rewind_batch;
mod run_rewind;

pub use discover_exports::DiscoverExportsUseCase;
pub use rewind_batch::RewindBatchUseCase;
pub use run_rewind::{RunRewindUseCase, plan};
