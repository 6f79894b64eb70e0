//! In-memory operator log

use crate::domain::entities::RunEvent;
use crate::domain::repositories::RunObserver;
use parking_lot::Mutex;

/// Append-only log panel holding one rendered entry per event
#[derive(Debug, Default)]
pub struct MemoryLog {
    entries: Mutex<Vec<String>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a free-form message
    pub fn log_message(&self, message: impl Into<String>) {
        self.entries.lock().push(message.into());
    }

    /// Returns a copy of the entries
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }

    /// Returns the log as newline-terminated text
    pub fn text(&self) -> String {
        let entries = self.entries.lock();
        let mut text = String::new();
        for entry in entries.iter() {
            text.push_str(entry);
            text.push('\n');
        }
        text
    }
}

impl RunObserver for MemoryLog {
    fn notify(&self, event: &RunEvent) {
        self.log_message(event.to_string());
    }
}
