//! Run observer trait
//!
//! The logging sink of a run. Events arrive synchronously on the
//! processing thread, in processing order.

use crate::domain::entities::RunEvent;

/// Receives progress events from discovery, pairing and the batch loop
pub trait RunObserver {
    fn notify(&self, event: &RunEvent);
}

impl<F: Fn(&RunEvent)> RunObserver for F {
    fn notify(&self, event: &RunEvent) {
        self(event)
    }
}
