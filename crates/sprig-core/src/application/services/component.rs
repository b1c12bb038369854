//! Component Service - the create-component workflow.
//!
//! Validates that the working directory is a SvelteKit project, then
//! writes the component pair (source + style module) under the project's
//! components root. No rollback: files written before a failure stay.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, Reporter, Step},
        services::validate::is_valid_project,
    },
    domain::{ComponentSpec, templates},
    error::SprigResult,
};

/// Paths produced by a successful component-creation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentPaths {
    pub directory: PathBuf,
    pub source: PathBuf,
    pub style_module: PathBuf,
}

/// Component generation service.
pub struct ComponentService {
    filesystem: Box<dyn Filesystem>,
    reporter: Box<dyn Reporter>,
}

impl ComponentService {
    /// Create a new component service with the given adapters.
    pub fn new(filesystem: Box<dyn Filesystem>, reporter: Box<dyn Reporter>) -> Self {
        Self {
            filesystem,
            reporter,
        }
    }

    /// Create a component pair inside `project_dir`.
    ///
    /// `project_dir` must pass [`is_valid_project`], otherwise nothing is
    /// written and `NotAProject` is returned.
    #[instrument(skip_all, fields(component = %spec.path()))]
    pub fn create_component(
        &self,
        project_dir: &Path,
        spec: &ComponentSpec,
    ) -> SprigResult<ComponentPaths> {
        self.reporter.step_started(Step::ValidateProject);
        if !is_valid_project(self.filesystem.as_ref(), project_dir) {
            return Err(ApplicationError::NotAProject {
                path: project_dir.to_path_buf(),
            }
            .into());
        }
        self.reporter.step_completed(Step::ValidateProject);

        let identifier = spec.identifier();
        let directory = project_dir
            .join("src")
            .join("lib")
            .join("components")
            .join(spec.relative_dir());

        self.reporter.step_started(Step::WriteComponentFiles);
        self.filesystem.create_dir_all(&directory)?;

        let source = directory.join(format!("{identifier}.svelte"));
        self.filesystem
            .write_file(&source, &templates::component_source(&identifier))?;
        self.reporter.detail(&format!("created {}", source.display()));

        let style_module = directory.join(format!("{identifier}.module.scss"));
        self.filesystem
            .write_file(&style_module, &templates::style_module_source())?;
        self.reporter
            .detail(&format!("created {}", style_module.display()));

        self.reporter.step_completed(Step::WriteComponentFiles);
        info!(component = %identifier, "component created");

        Ok(ComponentPaths {
            directory,
            source,
            style_module,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockFilesystem, MockReporter};
    use crate::error::SprigError;

    const KIT_MANIFEST: &str = r#"{ "devDependencies": { "@sveltejs/kit": "^2.0.0" } }"#;

    fn quiet_reporter() -> MockReporter {
        let mut reporter = MockReporter::new();
        reporter.expect_step_started().return_const(());
        reporter.expect_step_completed().return_const(());
        reporter.expect_detail().return_const(());
        reporter.expect_warning().return_const(());
        reporter
    }

    fn valid_project_fs() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string()
            .withf(|path: &Path| path.ends_with("package.json"))
            .returning(|_| Ok(KIT_MANIFEST.to_string()));
        fs.expect_is_dir().return_const(true);
        fs
    }

    #[test]
    fn nested_path_produces_capitalized_pair() {
        let mut fs = valid_project_fs();
        fs.expect_create_dir_all()
            .withf(|path: &Path| path == Path::new("/proj/src/lib/components/widgets/cardItem"))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|path: &Path, content: &str| {
                path == Path::new("/proj/src/lib/components/widgets/cardItem/CardItem.svelte")
                    && content.contains("{styles.container}")
                    && content.contains("<h1>CardItem</h1>")
            })
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_write_file()
            .withf(|path: &Path, content: &str| {
                path == Path::new(
                    "/proj/src/lib/components/widgets/cardItem/CardItem.module.scss",
                ) && content.contains(".container")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let service = ComponentService::new(Box::new(fs), Box::new(quiet_reporter()));
        let spec = ComponentSpec::new("widgets/cardItem").unwrap();
        let paths = service
            .create_component(Path::new("/proj"), &spec)
            .unwrap();
        assert_eq!(
            paths.source,
            PathBuf::from("/proj/src/lib/components/widgets/cardItem/CardItem.svelte")
        );
        assert_eq!(
            paths.style_module,
            PathBuf::from("/proj/src/lib/components/widgets/cardItem/CardItem.module.scss")
        );
    }

    #[test]
    fn invalid_project_writes_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string()
            .returning(|_| Ok(r#"{ "dependencies": { "react": "^18" } }"#.to_string()));
        fs.expect_is_dir().return_const(true);
        fs.expect_create_dir_all().times(0);
        fs.expect_write_file().times(0);

        let service = ComponentService::new(Box::new(fs), Box::new(quiet_reporter()));
        let spec = ComponentSpec::new("button").unwrap();
        let err = service
            .create_component(Path::new("/somewhere"), &spec)
            .unwrap_err();
        assert!(matches!(
            err,
            SprigError::Application(ApplicationError::NotAProject { .. })
        ));
    }

    #[test]
    fn write_failure_is_terminal() {
        let mut fs = valid_project_fs();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().times(1).returning(|path, _| {
            Err(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into())
        });

        let service = ComponentService::new(Box::new(fs), Box::new(quiet_reporter()));
        let spec = ComponentSpec::new("button").unwrap();
        let err = service
            .create_component(Path::new("/proj"), &spec)
            .unwrap_err();
        assert!(matches!(
            err,
            SprigError::Application(ApplicationError::Filesystem { .. })
        ));
    }
}
