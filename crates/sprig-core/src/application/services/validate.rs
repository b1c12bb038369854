//! Project validation gate for component generation.

use std::path::Path;

use tracing::debug;

use crate::application::ports::Filesystem;
use crate::domain::{Manifest, SVELTEKIT_PACKAGE};

/// True iff `dir` holds a SvelteKit project: a `package.json` directly
/// under it whose `dependencies`/`devDependencies` union contains
/// `@sveltejs/kit`, and a `src/` subdirectory.
///
/// Never errors: any missing file, parse failure, or missing subdirectory
/// yields `false`. This predicate gates component generation so components
/// are never scaffolded into an unrelated directory tree.
pub fn is_valid_project(fs: &dyn Filesystem, dir: &Path) -> bool {
    let manifest_path = dir.join("package.json");
    let raw = match fs.read_to_string(&manifest_path) {
        Ok(raw) => raw,
        Err(_) => {
            debug!(path = %manifest_path.display(), "no readable package.json");
            return false;
        }
    };

    let manifest = match Manifest::from_json(&raw) {
        Ok(manifest) => manifest,
        Err(e) => {
            debug!(path = %manifest_path.display(), error = %e, "package.json did not parse");
            return false;
        }
    };

    manifest.has_dependency(SVELTEKIT_PACKAGE) && fs.is_dir(&dir.join("src"))
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use std::path::PathBuf;

    const KIT_MANIFEST: &str = r#"{ "devDependencies": { "@sveltejs/kit": "^2.0.0" } }"#;

    fn fs_with(manifest: Option<&'static str>, has_src: bool) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        match manifest {
            Some(raw) => {
                fs.expect_read_to_string()
                    .returning(move |_| Ok(raw.to_string()));
            }
            None => {
                fs.expect_read_to_string().returning(|path| {
                    Err(crate::application::ApplicationError::Filesystem {
                        path: path.to_path_buf(),
                        reason: "not found".into(),
                    }
                    .into())
                });
            }
        }
        fs.expect_is_dir().return_const(has_src);
        fs
    }

    #[test]
    fn accepts_kit_project_with_src() {
        let fs = fs_with(Some(KIT_MANIFEST), true);
        assert!(is_valid_project(&fs, &PathBuf::from("/proj")));
    }

    #[test]
    fn rejects_missing_manifest() {
        let fs = fs_with(None, true);
        assert!(!is_valid_project(&fs, &PathBuf::from("/proj")));
    }

    #[test]
    fn rejects_manifest_without_kit() {
        let fs = fs_with(Some(r#"{ "dependencies": { "react": "^18" } }"#), true);
        assert!(!is_valid_project(&fs, &PathBuf::from("/proj")));
    }

    #[test]
    fn rejects_unparseable_manifest() {
        let fs = fs_with(Some("{ this is not json"), true);
        assert!(!is_valid_project(&fs, &PathBuf::from("/proj")));
    }

    #[test]
    fn rejects_missing_src_directory() {
        let fs = fs_with(Some(KIT_MANIFEST), false);
        assert!(!is_valid_project(&fs, &PathBuf::from("/proj")));
    }
}
