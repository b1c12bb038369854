//! Project specification.

use std::path::{Path, PathBuf};

use crate::domain::DomainError;

/// A validated description of the project to create.
///
/// Constructed once per run from the interaction boundary's answers and
/// immutable thereafter. The project name is guaranteed non-empty after
/// trimming; existence of the parent directory is checked later by the
/// orchestrator, which owns filesystem access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    name: String,
    parent_dir: PathBuf,
    reset_styles: bool,
}

impl ProjectSpec {
    /// Build a spec, trimming the name and rejecting empty ones.
    pub fn new(
        name: impl AsRef<str>,
        parent_dir: impl Into<PathBuf>,
        reset_styles: bool,
    ) -> Result<Self, DomainError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(DomainError::EmptyProjectName);
        }
        Ok(Self {
            name: name.to_string(),
            parent_dir: parent_dir.into(),
            reset_styles,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent_dir(&self) -> &Path {
        &self.parent_dir
    }

    /// Whether the optional reset stylesheet should be installed.
    pub fn reset_styles(&self) -> bool {
        self.reset_styles
    }

    /// The directory the scaffolding tool will create.
    ///
    /// Only meaningful once the scaffold step has reported success; the
    /// orchestrator returns it to callers exclusively in that case.
    pub fn project_path(&self) -> PathBuf {
        self.parent_dir.join(&self.name)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
