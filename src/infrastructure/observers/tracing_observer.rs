//! Observer forwarding run events to `tracing`

use crate::domain::entities::RunEvent;
use crate::domain::repositories::RunObserver;

/// Emits every event as a log record
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl RunObserver for TracingObserver {
    fn notify(&self, event: &RunEvent) {
        match event {
            RunEvent::PairFailed { index, reason } => {
                tracing::error!(pair = index, "{}", reason)
            }
            RunEvent::PairStarted { index, total, .. } => {
                tracing::info!(pair = index, total = total, "{}", event)
            }
            RunEvent::PairSucceeded { .. } => tracing::debug!("{}", event),
            _ => tracing::info!("{}", event),
        }
    }
}
