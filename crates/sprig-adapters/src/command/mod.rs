//! `CommandRunner` implementations.

pub mod process;
pub mod script;

pub use process::ProcessRunner;
pub use script::ScriptedRunner;
