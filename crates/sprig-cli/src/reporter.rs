//! Console step reporter: renders core workflow events.
//!
//! Implements the core `Reporter` port over the [`OutputManager`]: a
//! spinner while a step runs (TTY only), a ✓ line when it completes,
//! warnings always. This is the presentation adapter the core knows
//! nothing about.

use std::sync::Mutex;
use std::time::Duration;

use indicatif::ProgressBar;

use sprig_core::application::ports::{Reporter, Step};

use crate::cli::OutputFormat;
use crate::output::OutputManager;

pub struct ConsoleReporter {
    output: OutputManager,
    spinner: Mutex<Option<ProgressBar>>,
}

impl ConsoleReporter {
    pub fn new(output: OutputManager) -> Self {
        Self {
            output,
            spinner: Mutex::new(None),
        }
    }

    fn clear_spinner(&self) {
        if let Ok(mut guard) = self.spinner.lock() {
            if let Some(spinner) = guard.take() {
                spinner.finish_and_clear();
            }
        }
    }
}

impl Reporter for ConsoleReporter {
    fn step_started(&self, step: Step) {
        if self.output.is_quiet() {
            return;
        }
        if self.output.format() == OutputFormat::Human {
            let spinner = ProgressBar::new_spinner();
            spinner.set_message(format!("{}...", step.label()));
            spinner.enable_steady_tick(Duration::from_millis(120));
            if let Ok(mut guard) = self.spinner.lock() {
                *guard = Some(spinner);
            }
        } else {
            let _ = self.output.print(&format!("{}...", step.label()));
        }
    }

    fn step_completed(&self, step: Step) {
        self.clear_spinner();
        let _ = self.output.success(step.label());
    }

    fn detail(&self, message: &str) {
        if let Ok(guard) = self.spinner.lock() {
            if let Some(spinner) = guard.as_ref() {
                spinner.println(message);
                return;
            }
        }
        let _ = self.output.print(message);
    }

    fn warning(&self, message: &str) {
        self.clear_spinner();
        let _ = self.output.warning(message);
    }
}
