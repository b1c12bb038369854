//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names,
//! aliases, help text, and value enums. No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "sprig",
    bin_name = "sprig",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f331} Opinionated SvelteKit project launcher",
    long_about = "Sprig creates SvelteKit projects with opinionated defaults \
                  (prettier, sass-embedded, an optional reset stylesheet) and \
                  generates component file pairs inside existing projects.",
    after_help = "EXAMPLES:\n\
        \x20 sprig create\n\
        \x20 sprig component widgets/cardItem\n\
        \x20 sprig completions zsh > ~/.zfunc/_sprig",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new SvelteKit project with opinionated defaults.
    ///
    /// Prompts for the project name, whether to include the reset
    /// stylesheet, and the parent directory, then drives the SvelteKit
    /// scaffolding tools.
    #[command(
        visible_alias = "c",
        about = "Create a new SvelteKit project",
        after_help = "Runs, in order:\n\
            \x20 npx sv create <name> --template minimal --types ts --install yarn --no-add-ons\n\
            \x20 npx sv add prettier --no-install\n\
            \x20 yarn add -D sass-embedded"
    )]
    Create,

    /// Create a component pair inside an existing project.
    #[command(
        about = "Create a component (.svelte + .module.scss pair)",
        after_help = "EXAMPLES:\n\
            \x20 sprig component button\n\
            \x20 sprig component widgets/cardItem   # creates CardItem.svelte + CardItem.module.scss"
    )]
    Component(ComponentArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 sprig completions bash > ~/.local/share/bash-completion/completions/sprig\n\
            \x20 sprig completions zsh  > ~/.zfunc/_sprig\n\
            \x20 sprig completions fish > ~/.config/fish/completions/sprig.fish"
    )]
    Completions(CompletionsArgs),
}

// ── component ─────────────────────────────────────────────────────────────────

/// Arguments for `sprig component`.
#[derive(Debug, Args)]
pub struct ComponentArgs {
    /// Component path relative to src/lib/components. The final segment is
    /// capitalized to name the generated files. Prompted for when omitted.
    #[arg(value_name = "PATH", help = "Component path, e.g. widgets/cardItem")]
    pub path: Option<String>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `sprig completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
