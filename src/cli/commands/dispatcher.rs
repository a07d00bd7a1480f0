//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::LintConfig;
use crate::error::Result;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `out` - Report output (diagnostics, listings)
    /// * `err` - Per-file errors and status messages
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, out: &mut dyn Write, err: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    config: LintConfig,
    use_color: bool,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root and configuration.
    pub fn new(project_root: PathBuf, config: LintConfig) -> Self {
        Self {
            project_root,
            config,
            use_color: false,
        }
    }

    /// Enable or disable colored human output.
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(
        &self,
        cli: &Cli,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<CommandResult> {
        match &cli.command {
            Commands::Lint(args) => {
                let cmd = super::lint::LintCommand::new(
                    &self.project_root,
                    self.config.clone(),
                    args.clone(),
                )
                .with_color(self.use_color);
                cmd.execute(out, err)
            }
            Commands::Rules(args) => {
                let cmd = super::rules::RulesCommand::new(self.config.clone(), args.clone());
                cmd.execute(out, err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatches_rules_command() {
        let temp = TempDir::new().unwrap();
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf(), LintConfig::default());
        let cli = Cli::parse_from(["gtnlint", "rules"]);

        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = dispatcher.dispatch(&cli, &mut out, &mut err).unwrap();

        assert!(result.success);
        assert!(String::from_utf8(out).unwrap().contains("no-toc"));
        assert_eq!(dispatcher.project_root(), temp.path());
    }

    #[test]
    fn dispatches_lint_command() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("t.md");
        std::fs::write(&file, "fine\n").unwrap();
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf(), LintConfig::default());
        let cli = Cli::parse_from(["gtnlint", "lint", file.to_str().unwrap()]);

        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = dispatcher.dispatch(&cli, &mut out, &mut err).unwrap();

        assert_eq!(result.exit_code, 0);
        assert!(out.is_empty());
    }
}
