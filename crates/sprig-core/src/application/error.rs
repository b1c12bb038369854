//! Application layer errors.
//!
//! These errors represent workflow failures: an external tool that could
//! not be started, failed, or hung, a filesystem write that did not land,
//! or a target directory that is not a SvelteKit project. Precondition
//! violations on user input are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while driving a workflow.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The external tool could not be started at all (missing executable,
    /// bad working directory). An environment problem, not a tool-reported
    /// failure; kept distinct from [`Self::ToolFailed`] on purpose.
    #[error("failed to launch '{command}': {reason}")]
    Launch { command: String, reason: String },

    /// The external tool ran and reported a non-zero exit status.
    #[error("'{command}' exited with status {exit_code}")]
    ToolFailed {
        command: String,
        exit_code: i32,
        stderr: String,
    },

    /// The external tool exceeded its bounded wait and was killed.
    #[error("'{command}' timed out after {seconds} seconds")]
    Timeout { command: String, seconds: u64 },

    /// A filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// Component generation was requested outside a SvelteKit project.
    #[error("not a SvelteKit project: {path}")]
    NotAProject { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Launch { command, reason } => vec![
                format!("Could not start: {}", command),
                format!("Cause: {}", reason),
                "Ensure the tool is installed and on your PATH".into(),
                "npx ships with Node.js; yarn via: npm install -g yarn".into(),
            ],
            Self::ToolFailed { command, stderr, .. } => {
                let mut suggestions = vec![format!("Command failed: {}", command)];
                let stderr = stderr.trim();
                if !stderr.is_empty() {
                    suggestions.push(format!("Tool output: {}", stderr));
                }
                suggestions.push("The partially created project is left on disk".into());
                suggestions
            }
            Self::Timeout { command, seconds } => vec![
                format!("'{}' did not finish within {} seconds", command, seconds),
                "Check your network connection and try again".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::NotAProject { path } => vec![
                format!("'{}' is not a SvelteKit project", path.display()),
                "Make sure you're in a directory that contains:".into(),
                "  • package.json with an '@sveltejs/kit' dependency".into(),
                "  • a src/ directory".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Launch { .. } | Self::ToolFailed { .. } | Self::Timeout { .. } => {
                ErrorCategory::Environment
            }
            Self::Filesystem { .. } => ErrorCategory::Internal,
            Self::NotAProject { .. } => ErrorCategory::Validation,
        }
    }
}
