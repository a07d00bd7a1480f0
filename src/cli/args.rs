//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::lint::OutputFormat;

/// gtnlint - Lint Galaxy Training Network tutorials and bibliographies.
#[derive(Debug, Parser)]
#[command(name = "gtnlint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .gtnlint.yml)
    #[arg(short, long, global = true, env = "GTNLINT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides discovery from the current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Lint Markdown and BibTeX files
    Lint(LintArgs),

    /// List the available rules
    Rules(RulesArgs),
}

/// Arguments for the `lint` command.
#[derive(Debug, Clone, clap::Args)]
pub struct LintArgs {
    /// Files or directories to lint
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Output format (defaults to the config file's, then rdjsonl)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Apply suggested fixes in place
    #[arg(long)]
    pub fix: bool,

    /// Fail on warnings too
    #[arg(long)]
    pub strict: bool,

    /// Rule ids or codes to disable (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub disable: Vec<String>,
}

/// Arguments for the `rules` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RulesArgs {
    /// Include each rule's description
    #[arg(short, long)]
    pub long: bool,
}
