//! Lint command implementation.
//!
//! The `gtnlint lint` command checks tutorials and bibliographies with the
//! lint rule system and reports diagnostics on stdout.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::cli::args::LintArgs;
use crate::config::LintConfig;
use crate::error::Result;
use crate::lint::{
    lint_file, Diagnostic, FileKind, FixEngine, HumanFormatter, LintFormatter, OutputFormat,
    RdjsonFormatter, RootedProbe, RuleRegistry, Severity,
};

use super::dispatcher::{Command, CommandResult};

/// Exit code when any file could not be read or parsed.
pub const EXIT_FATAL: i32 = 2;

/// Exit code when findings fail the run.
pub const EXIT_FINDINGS: i32 = 1;

/// The lint command implementation.
pub struct LintCommand {
    project_root: PathBuf,
    config: LintConfig,
    args: LintArgs,
    use_color: bool,
}

impl LintCommand {
    /// Create a new lint command.
    pub fn new(project_root: &Path, config: LintConfig, args: LintArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
            args,
            use_color: false,
        }
    }

    /// Enable or disable colored human output.
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// Get the command arguments.
    pub fn args(&self) -> &LintArgs {
        &self.args
    }

    /// Output format: command line, then config file, then default.
    pub fn format(&self) -> OutputFormat {
        self.args
            .format
            .or(self.config.format)
            .unwrap_or_default()
    }

    /// Built-in rules minus those disabled by config or command line.
    fn registry(&self) -> RuleRegistry {
        let mut registry = RuleRegistry::with_builtins();
        let disabled: Vec<&String> = self
            .config
            .disable
            .iter()
            .chain(self.args.disable.iter())
            .collect();
        for unknown in registry.disable(&disabled) {
            warn!("Unknown rule in disable list: {}", unknown);
        }
        registry
    }

    fn probe(&self) -> RootedProbe {
        match &self.config.snippet_root {
            Some(root) => RootedProbe::new(self.project_root.join(root)),
            None => RootedProbe::new(&self.project_root),
        }
    }

    /// Expand directories into the lintable files below them, sorted.
    fn collect_files(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();
        for path in &self.args.paths {
            if path.is_dir() {
                collect_dir(path, &mut files);
            } else {
                files.push(path.clone());
            }
        }
        files
    }

    /// Lint one file, applying fixes first when requested.
    fn lint_one(
        &self,
        path: &Path,
        registry: &RuleRegistry,
        probe: &RootedProbe,
        err: &mut dyn Write,
    ) -> Result<Vec<Diagnostic>> {
        let diagnostics = lint_file(path, registry, probe)?;
        if !self.args.fix || diagnostics.iter().all(|d| d.suggestion.is_none()) {
            return Ok(diagnostics);
        }

        let result = FixEngine::new().fix_file(path, &diagnostics)?;
        if result.applied == 0 {
            return Ok(diagnostics);
        }
        writeln!(
            err,
            "Fixed {} issue(s) in {} ({} skipped)",
            result.applied,
            path.display(),
            result.skipped
        )?;

        lint_file(path, registry, probe)
    }

    fn write_report(&self, diagnostics: &[Diagnostic], out: &mut dyn Write) -> Result<()> {
        match self.format() {
            OutputFormat::Rdjsonl => RdjsonFormatter::new().format(diagnostics, out)?,
            OutputFormat::Human => {
                HumanFormatter::new(self.use_color).format(diagnostics, out)?;
            }
        }
        Ok(())
    }
}

fn collect_dir(dir: &Path, files: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Cannot read directory {}: {}", dir.display(), e);
            return;
        }
    };

    let mut paths: Vec<PathBuf> = entries.filter_map(|e| e.ok().map(|e| e.path())).collect();
    paths.sort();

    for path in paths {
        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with('.') || n == "_site");
        if hidden {
            continue;
        }
        if path.is_dir() {
            collect_dir(&path, files);
        } else if FileKind::from_path(&path) != FileKind::Unsupported {
            files.push(path);
        }
    }
}

impl Command for LintCommand {
    fn execute(&self, out: &mut dyn Write, err: &mut dyn Write) -> Result<CommandResult> {
        let registry = self.registry();
        let probe = self.probe();
        let files = self.collect_files();
        debug!(
            "Linting {} file(s) with {} rule(s), snippets under {}",
            files.len(),
            registry.len(),
            probe.root().display()
        );

        let mut diagnostics = Vec::new();
        let mut fatal = false;
        for path in &files {
            match self.lint_one(path, &registry, &probe, err) {
                Ok(found) => diagnostics.extend(found),
                Err(e) => {
                    warn!("Skipping {}: {}", path.display(), e);
                    writeln!(err, "error: {}", e)?;
                    fatal = true;
                }
            }
        }

        self.write_report(&diagnostics, out)?;

        let has_errors = diagnostics.iter().any(|d| d.severity == Severity::Error);
        let should_fail = has_errors || (self.args.strict && !diagnostics.is_empty());

        if fatal {
            Ok(CommandResult::failure(EXIT_FATAL))
        } else if should_fail {
            Ok(CommandResult::failure(EXIT_FINDINGS))
        } else {
            Ok(CommandResult::success())
        }
    }
}
