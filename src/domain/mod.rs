//! Domain layer - Core orchestration logic
//!
//! This module contains the domain entities, the traits for the
//! collaborators a run depends on, and the classification and pairing
//! services. It performs no I/O.

pub mod entities;
pub mod repositories;
pub mod services;
