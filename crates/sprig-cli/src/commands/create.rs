//! Implementation of the `sprig create` command.
//!
//! Responsibility: collect answers from the prompts, build a
//! `ProjectSpec`, call the core bootstrap service, and display results.
//! No workflow logic lives here.

use std::path::PathBuf;

use tracing::{info, instrument};

use sprig_adapters::{LocalFilesystem, ProcessRunner};
use sprig_core::{application::BootstrapService, domain::ProjectSpec, error::SprigError};

use crate::{
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    prompts,
    reporter::ConsoleReporter,
};

/// Execute the `sprig create` command.
///
/// Dispatch sequence:
/// 1. Prompt for project name, reset-stylesheet choice, parent directory
/// 2. Build a validated `ProjectSpec`
/// 3. Run the bootstrap workflow with production adapters
/// 4. Print the summary and next steps
#[instrument(skip_all)]
pub fn execute(config: AppConfig, output: OutputManager) -> CliResult<()> {
    output.header("\u{1f331} New SvelteKit project")?;
    output.print("")?;

    let name = prompts::project_name()?;
    let reset_styles = prompts::include_reset_styles(config.defaults.reset_styles)?;
    let parent_dir = prompts::parent_directory(&config.defaults.parent_dir)?;

    let spec = ProjectSpec::new(&name, PathBuf::from(parent_dir), reset_styles)
        .map_err(SprigError::from)?;

    output.print("")?;
    info!(project = %spec.name(), path = %spec.parent_dir().display(), "bootstrap started");

    let service = BootstrapService::new(
        Box::new(ProcessRunner::new()),
        Box::new(LocalFilesystem::new()),
        Box::new(ConsoleReporter::new(output.clone())),
    );
    let project_path = service.create_project(&spec)?;

    info!(path = %project_path.display(), "bootstrap completed");

    output.print("")?;
    output.success(&format!(
        "Project '{}' created at {}",
        spec.name(),
        project_path.display()
    ))?;

    if !output.is_quiet() {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", spec.name()))?;
        output.print("  yarn dev")?;
    }

    Ok(())
}
