//! Domain error types.
//!
//! All errors are:
//! - Cloneable (cheap to pass around and compare in tests)
//! - Categorizable (for CLI display and exit codes)
//! - Actionable (provide suggestions)

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Precondition violations on user-supplied values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("project name cannot be empty")]
    EmptyProjectName,

    #[error("parent directory does not exist: {path}")]
    ParentDirectoryMissing { path: PathBuf },

    #[error("component path cannot be empty")]
    EmptyComponentPath,

    #[error("invalid component path '{path}': {reason}")]
    InvalidComponentPath { path: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyProjectName => vec![
                "Enter a non-empty project name".into(),
                "Examples: my-app, landing-page, portfolio".into(),
            ],
            Self::ParentDirectoryMissing { path } => vec![
                format!("'{}' does not exist or is not a directory", path.display()),
                format!("Create it first: mkdir -p {}", path.display()),
                "Or choose an existing directory".into(),
            ],
            Self::EmptyComponentPath => vec![
                "Provide a component path relative to src/lib/components".into(),
                "Examples: button, widgets/cardItem".into(),
            ],
            Self::InvalidComponentPath { reason, .. } => vec![
                format!("Component path is invalid: {}", reason),
                "Use forward-slash separated segments, e.g. widgets/cardItem".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}
