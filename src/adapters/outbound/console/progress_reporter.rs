use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::cell::RefCell;
use std::io::IsTerminal;
use std::time::Duration;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with a report on stdout.
/// A spinner is shown while a blocking operation is in flight.
pub struct StderrProgressReporter {
    spinner: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    const TICK_MILLIS: u64 = 100;

    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
        }
    }

    fn colors_enabled() -> bool {
        std::io::stderr().is_terminal()
    }

    fn clear_spinner(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        self.clear_spinner();
        eprintln!("{}", message);
    }

    fn begin_wait(&self, message: &str) {
        self.clear_spinner();

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(Self::TICK_MILLIS));

        *self.spinner.borrow_mut() = Some(spinner);
    }

    fn report_error(&self, message: &str) {
        self.clear_spinner();
        if Self::colors_enabled() {
            eprintln!("{}", message.yellow());
        } else {
            eprintln!("{}", message);
        }
    }

    fn report_completion(&self, message: &str) {
        self.clear_spinner();
        eprintln!();
        if Self::colors_enabled() {
            eprintln!("{}", message.green());
        } else {
            eprintln!("{}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_creation() {
        let reporter = StderrProgressReporter::new();
        // Can't easily test stderr output, but verify it doesn't panic
        reporter.report("Test message");
        reporter.report_error("Test warning");
        reporter.report_completion("Test completion");
    }

    #[test]
    fn test_spinner_cleared_by_next_message() {
        let reporter = StderrProgressReporter::default();
        reporter.begin_wait("Waiting...");
        assert!(reporter.spinner.borrow().is_some());

        reporter.report("Done");
        assert!(reporter.spinner.borrow().is_none());
    }

    #[test]
    fn test_begin_wait_replaces_previous_spinner() {
        let reporter = StderrProgressReporter::new();
        reporter.begin_wait("first");
        reporter.begin_wait("second");
        assert!(reporter.spinner.borrow().is_some());
        reporter.report_error("failed");
        assert!(reporter.spinner.borrow().is_none());
    }
}
