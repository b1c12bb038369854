//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `sprig-adapters` implement
//! these; the CLI implements [`Reporter`] to render step progress.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by
//!   infrastructure
//!   - `CommandRunner`: child-process execution
//!   - `Filesystem`: file operations
//!   - `Reporter`: step progress and warnings

use std::path::{Path, PathBuf};
use std::time::Duration;

#[cfg(test)]
use mockall::automock;

use crate::error::SprigResult;

/// Exit code reported when a child process is killed by the bounded wait.
pub const TIMEOUT_EXIT_CODE: i32 = -1;

/// A fully-described external-tool invocation.
///
/// Built by the orchestrator; the runner executes it verbatim. The argument
/// vectors for the scaffolding tools are hard external contracts, so the
/// spec carries them unmodified from construction to execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
    cwd: PathBuf,
    scripted_input: Option<String>,
    timeout: Duration,
}

impl CommandSpec {
    /// Describe an invocation of `program` in the working directory `cwd`.
    pub fn new(program: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.into(),
            scripted_input: None,
            timeout: Duration::from_secs(60),
        }
    }

    /// Append arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Script a single canned response to the child's stdin. The input is
    /// written immediately after spawn and the stream is then closed.
    pub fn scripted_input(mut self, input: impl Into<String>) -> Self {
        self.scripted_input = Some(input.into());
        self
    }

    /// Bound the wait for this invocation.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arg_list(&self) -> &[String] {
        &self.args
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn input(&self) -> Option<&str> {
        self.scripted_input.as_deref()
    }

    pub fn timeout_duration(&self) -> Duration {
        self.timeout
    }

    /// Human-readable command line for diagnostics, e.g. `npx sv create app`.
    pub fn display(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Outcome of a completed (or killed) external-tool invocation.
///
/// The orchestrator inspects only `exit_code` and `timed_out` to decide
/// success; both streams are preserved for diagnostic reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub timed_out: bool,
}

impl CommandResult {
    /// A zero exit status within the bounded wait.
    pub fn success(&self) -> bool {
        self.exit_code == 0 && !self.timed_out
    }

    /// Result of a killed invocation.
    pub fn timed_out() -> Self {
        Self {
            exit_code: TIMEOUT_EXIT_CODE,
            stdout: String::new(),
            stderr: String::new(),
            timed_out: true,
        }
    }
}

/// Port for child-process execution.
///
/// Implemented by:
/// - `sprig_adapters::command::ProcessRunner` (production)
/// - `sprig_adapters::command::ScriptedRunner` (testing)
///
/// `Err` means the process could not be started at all; a tool-reported
/// failure is an `Ok` result with a non-zero exit code.
#[cfg_attr(test, automock)]
pub trait CommandRunner: Send + Sync {
    fn run(&self, spec: &CommandSpec) -> SprigResult<CommandResult>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `sprig_adapters::filesystem::LocalFilesystem` (production)
/// - `sprig_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SprigResult<()>;

    /// Replace a file's content wholesale. Never leaves a partial write.
    fn write_file(&self, path: &Path, content: &str) -> SprigResult<()>;

    /// Read a file's full text.
    fn read_to_string(&self, path: &Path) -> SprigResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// A workflow step, announced through [`Reporter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    ScaffoldProject,
    AddPrettier,
    AddSassEmbedded,
    WriteResetStylesheet,
    PatchEntryHtml,
    ValidateProject,
    WriteComponentFiles,
}

impl Step {
    /// Short label for progress rendering.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ScaffoldProject => "Creating SvelteKit project",
            Self::AddPrettier => "Adding prettier",
            Self::AddSassEmbedded => "Installing sass-embedded",
            Self::WriteResetStylesheet => "Creating reset.css",
            Self::PatchEntryHtml => "Linking reset.css in app.html",
            Self::ValidateProject => "Checking project",
            Self::WriteComponentFiles => "Writing component files",
        }
    }
}

/// Port for step-by-step progress reporting.
///
/// The core never prints; it announces structured events through this
/// trait and the presentation layer decides how to render them. Adapters
/// provide `NullReporter` and `RecordingReporter` for tests.
#[cfg_attr(test, automock)]
pub trait Reporter: Send + Sync {
    /// A step is about to run.
    fn step_started(&self, step: Step);

    /// The step finished successfully.
    fn step_completed(&self, step: Step);

    /// Supplementary information, e.g. a created file path.
    fn detail(&self, message: &str);

    /// A non-fatal condition the user should know about.
    fn warning(&self, message: &str);
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_program_and_args() {
        let spec = CommandSpec::new("npx", "/tmp").args(["sv", "create", "demo"]);
        assert_eq!(spec.display(), "npx sv create demo");
    }

    #[test]
    fn default_timeout_is_bounded() {
        let spec = CommandSpec::new("yarn", "/tmp");
        assert!(spec.timeout_duration() > Duration::ZERO);
    }

    #[test]
    fn success_requires_zero_exit_and_no_timeout() {
        let ok = CommandResult {
            exit_code: 0,
            stdout: String::new(),
            stderr: String::new(),
            timed_out: false,
        };
        assert!(ok.success());
        assert!(!CommandResult::timed_out().success());
        let failed = CommandResult { exit_code: 1, ..ok };
        assert!(!failed.success());
    }

    #[test]
    fn timed_out_result_uses_sentinel_exit_code() {
        assert_eq!(CommandResult::timed_out().exit_code, TIMEOUT_EXIT_CODE);
    }
}
