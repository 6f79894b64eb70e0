//! Run observer implementations

mod memory_log;
mod tracing_observer;

pub use memory_log::MemoryLog;
pub use tracing_observer::TracingObserver;

use crate::domain::entities::RunEvent;
use crate::domain::repositories::RunObserver;

/// Forwards each event to several observers, in registration order
#[derive(Default)]
pub struct Fanout<'a> {
    observers: Vec<&'a dyn RunObserver>,
}

impl<'a> Fanout<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an observer
    pub fn with(mut self, observer: &'a dyn RunObserver) -> Self {
        self.observers.push(observer);
        self
    }
}

impl RunObserver for Fanout<'_> {
    fn notify(&self, event: &RunEvent) {
        for observer in &self.observers {
            observer.notify(event);
        }
    }
}
