//! Infrastructure layer
//!
//! Concrete implementations of the domain traits and everything that
//! talks to the outside world: the external rewind program, observers,
//! the run manifest and the configuration file.

pub mod config;
pub mod engines;
pub mod observers;
pub mod persistence;
