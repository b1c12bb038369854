//! Implementation of the `sprig component` command.

use tracing::{info, instrument};

use sprig_adapters::LocalFilesystem;
use sprig_core::{application::ComponentService, domain::ComponentSpec, error::SprigError};

use crate::{
    cli::ComponentArgs,
    error::CliResult,
    output::OutputManager,
    prompts,
    reporter::ConsoleReporter,
};

/// Execute the `sprig component` command against the current working
/// directory, prompting for the path when it was not given.
#[instrument(skip_all)]
pub fn execute(args: ComponentArgs, output: OutputManager) -> CliResult<()> {
    let path = match args.path {
        Some(path) => path,
        None => prompts::component_path()?,
    };
    let spec = ComponentSpec::new(path).map_err(SprigError::from)?;

    let project_dir = std::env::current_dir()?;
    output.header(&format!("Creating component: {}", spec.path()))?;

    let service = ComponentService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(ConsoleReporter::new(output.clone())),
    );
    let paths = service.create_component(&project_dir, &spec)?;

    info!(component = %spec.identifier(), "component created");
    output.success(&format!(
        "Component '{}' created in {}",
        spec.identifier(),
        paths.directory.display()
    ))?;

    Ok(())
}
