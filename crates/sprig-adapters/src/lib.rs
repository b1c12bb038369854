//! Infrastructure adapters for Sprig.
//!
//! This crate implements the ports defined in `sprig_core::application::ports`.
//! It contains all external dependencies and I/O operations: child-process
//! execution, the local filesystem, and test doubles for both, plus the
//! reporter implementations used in tests.

pub mod command;
pub mod filesystem;
pub mod reporter;

// Re-export commonly used adapters
pub use command::{ProcessRunner, ScriptedRunner};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use reporter::{NullReporter, RecordingReporter, ReporterEvent};
