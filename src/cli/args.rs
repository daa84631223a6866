//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

const ABOUT: &str = "Start a new project from an interactive wizard";

/// Initiator - start a new project from an interactive wizard.
#[derive(Debug, Parser)]
#[command(name = "initiator")]
#[command(author, version, about = ABOUT, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to an option catalog (YAML). Defaults to the built-in catalog
    #[arg(short, long, global = true, env = "INITIATOR_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Choose a language, framework, libraries and name (default if no command specified)
    New(NewArgs),

    /// List the languages, frameworks and libraries on offer
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `new` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct NewArgs {
    /// Language to use (skips or preselects the language stage)
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Framework to use
    #[arg(short, long)]
    pub framework: Option<String>,

    /// Project name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Skip the wizard; --lang and --name are required
    #[arg(long)]
    pub no_tui: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Only list frameworks for this language
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
