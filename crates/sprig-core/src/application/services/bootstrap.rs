//! Bootstrap Service - the create-project workflow.
//!
//! Drives the end-to-end pipeline:
//! 1. Scaffold the project with the SvelteKit CLI
//! 2. Add prettier (no install)
//! 3. Add the sass-embedded dev dependency
//! 4. Optionally write the reset stylesheet and link it in app.html
//!
//! Steps run strictly in order; the first failure ends the workflow and
//! nothing is rolled back: scaffolding is expensive and partial results
//! are useful for manual recovery.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRunner, CommandResult, CommandSpec, Filesystem, Reporter, Step},
        services::patch::{PatchOutcome, patch_anchor},
    },
    domain::{DomainError, ProjectSpec, templates},
    error::SprigResult,
};

/// Bounded wait for the scaffold step, which downloads packages.
pub const SCAFFOLD_TIMEOUT: Duration = Duration::from_secs(120);

/// Bounded wait for the faster follow-up steps.
pub const STEP_TIMEOUT: Duration = Duration::from_secs(60);

/// Canned confirmation for the npx package-installation prompt.
const SCAFFOLD_CONFIRMATION: &str = "y\n";

/// Anchor after which the reset stylesheet link is inserted.
pub const VIEWPORT_META: &str =
    r#"<meta name="viewport" content="width=device-width, initial-scale=1" />"#;

/// Stylesheet link inserted into app.html, tab-indented on its own line.
pub const RESET_LINK: &str = "\n\t<link rel=\"stylesheet\" href=\"/src/lib/styles/reset.css\" />";

/// Main project-creation service.
///
/// Orchestrates the external scaffolding tools and the optional reset
/// stylesheet installation through the injected ports.
pub struct BootstrapService {
    runner: Box<dyn CommandRunner>,
    filesystem: Box<dyn Filesystem>,
    reporter: Box<dyn Reporter>,
}

impl BootstrapService {
    /// Create a new bootstrap service with the given adapters.
    pub fn new(
        runner: Box<dyn CommandRunner>,
        filesystem: Box<dyn Filesystem>,
        reporter: Box<dyn Reporter>,
    ) -> Self {
        Self {
            runner,
            filesystem,
            reporter,
        }
    }

    /// Create a new SvelteKit project.
    ///
    /// On success returns the project's path (`parent_dir/name`). On any
    /// failure the error is returned unchanged, no later step runs, and no
    /// path is produced; whatever was already created stays on disk.
    #[instrument(skip_all, fields(project = %spec.name()))]
    pub fn create_project(&self, spec: &ProjectSpec) -> SprigResult<PathBuf> {
        if !self.filesystem.is_dir(spec.parent_dir()) {
            return Err(DomainError::ParentDirectoryMissing {
                path: spec.parent_dir().to_path_buf(),
            }
            .into());
        }

        self.scaffold(spec)?;
        let project_path = spec.project_path();
        info!(path = %project_path.display(), "SvelteKit project created");

        self.add_prettier(&project_path)?;
        self.add_sass_embedded(&project_path)?;

        if spec.reset_styles() {
            self.write_reset_stylesheet(&project_path)?;
            self.patch_entry_html(&project_path)?;
        }

        info!("create-project workflow completed");
        Ok(project_path)
    }

    // ── Workflow steps ────────────────────────────────────────────────────────

    /// Step 1: `npx sv create` in the parent directory, confirming the npx
    /// package-installation prompt with a single scripted "y".
    fn scaffold(&self, spec: &ProjectSpec) -> SprigResult<()> {
        self.reporter.step_started(Step::ScaffoldProject);

        let command = CommandSpec::new("npx", spec.parent_dir())
            .args([
                "sv",
                "create",
                spec.name(),
                "--template",
                "minimal",
                "--types",
                "ts",
                "--install",
                "yarn",
                "--no-add-ons",
            ])
            .scripted_input(SCAFFOLD_CONFIRMATION)
            .timeout(SCAFFOLD_TIMEOUT);
        self.run_tool(command)?;

        self.reporter.step_completed(Step::ScaffoldProject);
        Ok(())
    }

    /// Step 2: `npx sv add prettier --no-install` inside the project.
    fn add_prettier(&self, project_path: &Path) -> SprigResult<()> {
        self.reporter.step_started(Step::AddPrettier);

        let command = CommandSpec::new("npx", project_path)
            .args(["sv", "add", "prettier", "--no-install"])
            .timeout(STEP_TIMEOUT);
        self.run_tool(command)?;

        self.reporter.step_completed(Step::AddPrettier);
        Ok(())
    }

    /// Step 3: `yarn add -D sass-embedded` inside the project.
    fn add_sass_embedded(&self, project_path: &Path) -> SprigResult<()> {
        self.reporter.step_started(Step::AddSassEmbedded);

        let command = CommandSpec::new("yarn", project_path)
            .args(["add", "-D", "sass-embedded"])
            .timeout(STEP_TIMEOUT);
        self.run_tool(command)?;

        self.reporter.step_completed(Step::AddSassEmbedded);
        Ok(())
    }

    /// Step 4a: write the reset stylesheet under src/lib/styles.
    fn write_reset_stylesheet(&self, project_path: &Path) -> SprigResult<()> {
        self.reporter.step_started(Step::WriteResetStylesheet);

        let styles_dir = project_path.join("src").join("lib").join("styles");
        self.filesystem.create_dir_all(&styles_dir)?;
        self.filesystem
            .write_file(&styles_dir.join("reset.css"), templates::RESET_STYLESHEET)?;

        self.reporter.step_completed(Step::WriteResetStylesheet);
        Ok(())
    }

    /// Step 4b: link the reset stylesheet after the viewport meta tag.
    ///
    /// A missing anchor is a warning, not a failure: the stylesheet exists
    /// and only the automatic link could not be placed.
    fn patch_entry_html(&self, project_path: &Path) -> SprigResult<()> {
        self.reporter.step_started(Step::PatchEntryHtml);

        let entry = project_path.join("src").join("app.html");
        match patch_anchor(self.filesystem.as_ref(), &entry, VIEWPORT_META, RESET_LINK)? {
            PatchOutcome::Inserted => {}
            PatchOutcome::AlreadyPresent => {
                self.reporter.detail("app.html already links reset.css");
            }
            PatchOutcome::AnchorMissing => {
                warn!(path = %entry.display(), "viewport meta tag not found");
                self.reporter.warning(&format!(
                    "viewport meta tag not found in {}; link reset.css manually",
                    entry.display()
                ));
            }
        }

        self.reporter.step_completed(Step::PatchEntryHtml);
        Ok(())
    }

    /// Run one external tool and classify its outcome.
    ///
    /// Launch failures arrive as `Err` from the runner and pass through
    /// unchanged; completed invocations are turned into `Timeout` or
    /// `ToolFailed` errors unless they succeeded.
    fn run_tool(&self, command: CommandSpec) -> SprigResult<CommandResult> {
        let result = self.runner.run(&command)?;

        if result.timed_out {
            return Err(ApplicationError::Timeout {
                command: command.display(),
                seconds: command.timeout_duration().as_secs(),
            }
            .into());
        }
        if !result.success() {
            return Err(ApplicationError::ToolFailed {
                command: command.display(),
                exit_code: result.exit_code,
                stderr: result.stderr.clone(),
            }
            .into());
        }
        Ok(result)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
