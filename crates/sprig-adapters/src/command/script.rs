//! Scripted command runner for testing.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use sprig_core::{
    application::ports::{CommandRunner, CommandResult, CommandSpec},
    error::SprigResult,
};

/// Test double that records every invocation and replays canned results.
///
/// Queued results are returned in FIFO order; once the queue is empty every
/// further invocation succeeds with a zero exit code. Clones share state so
/// a test can keep a handle while the runner is boxed into a service.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRunner {
    inner: Arc<Mutex<ScriptedRunnerInner>>,
}

#[derive(Debug, Default)]
struct ScriptedRunnerInner {
    results: VecDeque<SprigResult<CommandResult>>,
    invocations: Vec<CommandSpec>,
}

impl ScriptedRunner {
    /// Create a runner where every invocation succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the outcome for the next unanswered invocation.
    pub fn push_result(&self, result: SprigResult<CommandResult>) {
        self.inner
            .lock()
            .expect("scripted runner lock poisoned")
            .results
            .push_back(result);
    }

    /// Every command spec this runner has executed, in order.
    pub fn invocations(&self) -> Vec<CommandSpec> {
        self.inner
            .lock()
            .expect("scripted runner lock poisoned")
            .invocations
            .clone()
    }

    fn ok_result() -> CommandResult {
        CommandResult {
            exit_code: 0,
            stdout: String::new(),
            stderr: String::new(),
            timed_out: false,
        }
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, spec: &CommandSpec) -> SprigResult<CommandResult> {
        let mut inner = self.inner.lock().expect("scripted runner lock poisoned");
        inner.invocations.push(spec.clone());
        inner
            .results
            .pop_front()
            .unwrap_or_else(|| Ok(Self::ok_result()))
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
