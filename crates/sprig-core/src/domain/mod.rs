//! Core domain layer for Sprig.
//!
//! This module contains pure logic with no I/O: validated input specs,
//! the `package.json` manifest model, and the generated-file templates.
//! All filesystem and process concerns are handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or process calls
//! - **Immutable entities**: Specs are validated at construction and
//!   never mutated afterwards

pub mod component;
pub mod error;
pub mod manifest;
pub mod project;
pub mod templates;

// Re-exports for convenience
pub use component::ComponentSpec;
pub use error::DomainError;
pub use manifest::{Manifest, SVELTEKIT_PACKAGE};
pub use project::ProjectSpec;
