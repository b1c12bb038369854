//! Application layer for Sprig.
//!
//! This layer contains:
//! - **Services**: Workflow orchestration (BootstrapService, ComponentService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! domain rules itself. Validation of user-supplied values lives in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{BootstrapService, ComponentPaths, ComponentService};

// Re-export port traits (for adapter implementation)
pub use ports::{CommandRunner, CommandResult, CommandSpec, Filesystem, Reporter, Step};

pub use error::ApplicationError;
