//! Progress reporting for CLI

use crate::domain::entities::RunEvent;
use crate::domain::repositories::RunObserver;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use parking_lot::Mutex;

/// Operator log on the terminal with a progress bar over pairs
#[derive(Default)]
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    /// Creates a new progress reporter
    pub fn new() -> Self {
        Self::default()
    }

    fn start_bar(&self, total: usize) {
        let bar = ProgressBar::new(total as u64);
        let template = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} pairs")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        bar.set_style(template);
        *self.bar.lock() = Some(bar);
    }

    fn println(&self, line: String) {
        match self.bar.lock().as_ref() {
            Some(bar) => bar.println(line),
            None => println!("{}", line),
        }
    }

    fn advance(&self) {
        if let Some(bar) = self.bar.lock().as_ref() {
            bar.inc(1);
        }
    }

    fn finish(&self) {
        if let Some(bar) = self.bar.lock().take() {
            bar.finish_and_clear();
        }
    }
}

impl RunObserver for ProgressReporter {
    fn notify(&self, event: &RunEvent) {
        match event {
            RunEvent::BatchStarted { total } => {
                self.println(style(event).cyan().to_string());
                self.start_bar(*total);
            }
            RunEvent::PairSucceeded { .. } => self.advance(),
            RunEvent::PairFailed { .. } => {
                self.println(line_for(event));
                self.advance();
            }
            RunEvent::BatchCompleted { failed, .. } => {
                self.finish();
                let line = if *failed == 0 {
                    style(event).green().bold()
                } else {
                    style(event).yellow().bold()
                };
                println!("{}", line);
            }
            _ => self.println(line_for(event)),
        }
    }
}

/// Operator line for an event, red for failures
fn line_for(event: &RunEvent) -> String {
    if event.is_error() {
        style(event).red().to_string()
    } else {
        event.to_string()
    }
}
