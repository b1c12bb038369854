//! Interactive prompts: the interaction boundary.
//!
//! Collects validated values for the workflows and nothing else; every
//! answer is re-validated by the domain layer. With the default
//! `interactive` feature the prompts are dialoguer-based; without it a
//! plain-stdin fallback keeps the binary usable.

use crate::error::{CliError, CliResult};

#[cfg(feature = "interactive")]
mod inner {
    use dialoguer::{Confirm, Input, theme::ColorfulTheme};

    use super::*;

    fn cancelled(_: dialoguer::Error) -> CliError {
        CliError::Cancelled
    }

    /// Ask for the project name.
    pub fn project_name() -> CliResult<String> {
        Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Project name")
            .validate_with(|input: &String| -> Result<(), &str> {
                if input.trim().is_empty() {
                    Err("project name cannot be empty")
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .map_err(cancelled)
    }

    /// Ask whether to install the reset stylesheet.
    pub fn include_reset_styles(default: bool) -> CliResult<bool> {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Include reset.css?")
            .default(default)
            .interact()
            .map_err(cancelled)
    }

    /// Ask for the parent directory the project is created in.
    pub fn parent_directory(default: &str) -> CliResult<String> {
        Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Project directory")
            .default(default.to_string())
            .interact_text()
            .map_err(cancelled)
    }

    /// Ask for the component path.
    pub fn component_path() -> CliResult<String> {
        Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Component path (e.g. widgets/cardItem)")
            .interact_text()
            .map_err(cancelled)
    }
}

#[cfg(not(feature = "interactive"))]
mod inner {
    use std::io::Write;

    use super::*;

    fn read_answer(prompt: &str) -> CliResult<String> {
        print!("{prompt}: ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        let bytes = std::io::stdin().read_line(&mut line)?;
        if bytes == 0 {
            // EOF: stdin closed before an answer arrived.
            return Err(CliError::Cancelled);
        }
        Ok(line.trim().to_string())
    }

    pub fn project_name() -> CliResult<String> {
        read_answer("Project name")
    }

    pub fn include_reset_styles(default: bool) -> CliResult<bool> {
        let hint = if default { "Y/n" } else { "y/N" };
        let answer = read_answer(&format!("Include reset.css? [{hint}]"))?;
        Ok(match answer.to_ascii_lowercase().as_str() {
            "" => default,
            "y" | "yes" => true,
            _ => false,
        })
    }

    pub fn parent_directory(default: &str) -> CliResult<String> {
        let answer = read_answer(&format!("Project directory [{default}]"))?;
        Ok(if answer.is_empty() {
            default.to_string()
        } else {
            answer
        })
    }

    pub fn component_path() -> CliResult<String> {
        read_answer("Component path (e.g. widgets/cardItem)")
    }
}

pub use inner::{component_path, include_reset_styles, parent_directory, project_name};
