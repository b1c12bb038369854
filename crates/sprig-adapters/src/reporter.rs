//! `Reporter` implementations for non-interactive use and tests.

use std::sync::{Arc, Mutex};

use sprig_core::application::ports::{Reporter, Step};

/// Reporter that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl NullReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for NullReporter {
    fn step_started(&self, _step: Step) {}
    fn step_completed(&self, _step: Step) {}
    fn detail(&self, _message: &str) {}
    fn warning(&self, _message: &str) {}
}

/// One recorded reporter event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReporterEvent {
    Started(Step),
    Completed(Step),
    Detail(String),
    Warning(String),
}

/// Reporter that records events for assertions. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    events: Arc<Mutex<Vec<ReporterEvent>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, in order.
    pub fn events(&self) -> Vec<ReporterEvent> {
        self.events.lock().expect("reporter lock poisoned").clone()
    }

    /// Only the warning messages.
    pub fn warnings(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ReporterEvent::Warning(message) => Some(message),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn step_started(&self, step: Step) {
        self.push(ReporterEvent::Started(step));
    }

    fn step_completed(&self, step: Step) {
        self.push(ReporterEvent::Completed(step));
    }

    fn detail(&self, message: &str) {
        self.push(ReporterEvent::Detail(message.to_string()));
    }

    fn warning(&self, message: &str) {
        self.push(ReporterEvent::Warning(message.to_string()));
    }
}

impl RecordingReporter {
    fn push(&self, event: ReporterEvent) {
        self.events
            .lock()
            .expect("reporter lock poisoned")
            .push(event);
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
