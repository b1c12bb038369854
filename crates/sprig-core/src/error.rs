//! Unified error handling for Sprig Core.
//!
//! This module provides a unified error type that wraps domain and
//! application errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Sprig Core operations.
///
/// This enum wraps all possible errors that can occur when using sprig-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SprigError {
    /// Errors from the domain layer (precondition violations).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (workflow failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl SprigError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display and exit-code mapping.
///
/// - `Validation`: the input or target state failed a precondition.
/// - `Environment`: an external tool could not be started, failed, or hung.
/// - `Internal`: an I/O or system failure inside Sprig itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Environment,
    Internal,
}

/// Convenient result type alias.
pub type SprigResult<T> = Result<T, SprigError>;
