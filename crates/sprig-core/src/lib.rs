//! Sprig Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Sprig
//! SvelteKit project launcher, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            sprig-cli (CLI)              │
//! │    (Prompts, status rendering)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (BootstrapService, ComponentService)   │
//! │        Orchestrates Workflows           │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (CommandRunner, Filesystem, Reporter)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     sprig-adapters (Infrastructure)     │
//! │  (ProcessRunner, LocalFilesystem, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ProjectSpec, ComponentSpec, Manifest) │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use sprig_core::{
//!     application::BootstrapService,
//!     domain::ProjectSpec,
//! };
//!
//! // 1. Describe the project
//! let spec = ProjectSpec::new("my-app", "/home/me/dev", true).unwrap();
//!
//! // 2. Use the application service (with injected adapters)
//! let service = BootstrapService::new(runner, filesystem, reporter);
//! let project_path = service.create_project(&spec).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BootstrapService, ComponentService,
        ports::{CommandRunner, CommandResult, CommandSpec, Filesystem, Reporter, Step},
        services::{ComponentPaths, PatchOutcome, is_valid_project, patch_anchor},
    };
    pub use crate::domain::{ComponentSpec, Manifest, ProjectSpec, templates};
    pub use crate::error::{SprigError, SprigResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
