//! Application services - orchestrate workflows.
//!
//! Services coordinate the domain layer and ports to accomplish the two
//! workflows: "create a project" and "create a component".

pub mod bootstrap;
pub mod component;
pub mod patch;
pub mod validate;

pub use bootstrap::BootstrapService;
pub use component::{ComponentPaths, ComponentService};
pub use patch::{PatchOutcome, patch_anchor};
pub use validate::is_valid_project;
