//! `package.json` manifest model, used for project validation.

use std::collections::BTreeMap;

use serde::Deserialize;

/// The dependency key that marks a directory as a SvelteKit project.
pub const SVELTEKIT_PACKAGE: &str = "@sveltejs/kit";

/// The two dependency sections of a `package.json`.
///
/// Every other key in the document is ignored; validation only cares about
/// the union of `dependencies` and `devDependencies`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    dependencies: BTreeMap<String, String>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: BTreeMap<String, String>,
}

impl Manifest {
    /// Parse a manifest from raw JSON text.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// True if `package` appears in either dependency section.
    pub fn has_dependency(&self, package: &str) -> bool {
        self.dependencies.contains_key(package) || self.dev_dependencies.contains_key(package)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
