//! Per-file lint driver.
//!
//! Classifies a file, splits it into lines, parses bibliographies, and runs
//! the applicable rules from a [`RuleRegistry`] in order.

use std::path::Path;

use tracing::debug;

use super::bibliography::{parse_bibliography, BibEntry};
use super::diagnostic::Diagnostic;
use super::registry::RuleRegistry;
use super::rule::{FileKind, FileProbe, LintContext};
use crate::error::{GtnLintError, Result};

/// Split text into lines without terminators (`\n` or `\r\n`).
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_owned).collect()
}

/// Run every rule applicable to `kind` over already prepared input.
pub fn run_rules(
    registry: &RuleRegistry,
    kind: FileKind,
    ctx: &LintContext<'_>,
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for rule in registry.for_kind(kind) {
        let found = rule.check(ctx);
        if !found.is_empty() {
            debug!("{}: {} finding(s) from {}", ctx.path, found.len(), rule.id());
        }
        diagnostics.extend(found);
    }
    diagnostics
}

/// Lint in-memory source as if it were the file at `path`.
///
/// The file kind comes from the extension of `path`; unsupported kinds
/// produce no diagnostics. A bibliography that fails to parse is an error
/// and produces no diagnostics at all.
pub fn lint_source(
    path: &Path,
    source: &str,
    registry: &RuleRegistry,
    probe: &dyn FileProbe,
) -> Result<Vec<Diagnostic>> {
    let kind = FileKind::from_path(path);
    if kind == FileKind::Unsupported {
        debug!("Skipping unsupported file {}", path.display());
        return Ok(Vec::new());
    }

    let lines = split_lines(source);
    let bibliography: Vec<BibEntry> = match kind {
        FileKind::Bibliography => {
            parse_bibliography(source).map_err(|message| GtnLintError::BibliographyParse {
                path: path.to_path_buf(),
                message,
            })?
        }
        _ => Vec::new(),
    };

    let shown = path.display().to_string();
    let ctx = LintContext {
        path: &shown,
        lines: &lines,
        bibliography: &bibliography,
        probe,
    };

    let diagnostics = run_rules(registry, kind, &ctx);
    debug!(
        "Linted {} ({} lines): {} diagnostic(s)",
        shown,
        lines.len(),
        diagnostics.len()
    );
    Ok(diagnostics)
}

/// Read and lint the file at `path`.
///
/// Unsupported files are not read.
pub fn lint_file(
    path: &Path,
    registry: &RuleRegistry,
    probe: &dyn FileProbe,
) -> Result<Vec<Diagnostic>> {
    if FileKind::from_path(path) == FileKind::Unsupported {
        debug!("Skipping unsupported file {}", path.display());
        return Ok(Vec::new());
    }

    let source = std::fs::read_to_string(path).map_err(|source| GtnLintError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    lint_source(path, &source, registry, probe)
}
