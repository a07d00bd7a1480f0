//! Lint rule definitions.
//!
//! This module provides the core traits and types for defining lint rules:
//!
//! - [`LintRule`] - The trait that all lint rules must implement
//! - [`RuleId`] - Unique identifier for a lint rule
//! - [`Severity`] - Severity level for diagnostics (Warning, Error)
//! - [`FileKind`] - Which rule set applies to a file
//! - [`LintContext`] - Everything a rule may look at for one file

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::bibliography::BibEntry;
use super::diagnostic::{Code, Diagnostic};
use super::span::Span;

/// Unique identifier for a lint rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity level for lint diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Advisory finding.
    Warning,
    /// Must-fix finding.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Kind of input file, decided once from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Markdown tutorial or slide page.
    Markup,
    /// BibTeX bibliography.
    Bibliography,
    /// Anything else; produces no diagnostics.
    Unsupported,
}

impl FileKind {
    /// Classify a path by extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("md") | Some("markdown") => FileKind::Markup,
            Some("bib") => FileKind::Bibliography,
            _ => FileKind::Unsupported,
        }
    }
}

/// Filesystem existence check used by rules that reference other files.
pub trait FileProbe: Send + Sync {
    /// Whether `relative` names an existing file.
    fn exists(&self, relative: &str) -> bool;
}

/// Resolves relative paths against a fixed root directory.
#[derive(Debug, Clone)]
pub struct RootedProbe {
    root: PathBuf,
}

impl RootedProbe {
    /// Create a probe rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root paths are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FileProbe for RootedProbe {
    fn exists(&self, relative: &str) -> bool {
        self.root.join(relative).exists()
    }
}

/// Input of one lint pass over one file.
pub struct LintContext<'a> {
    /// File identifier reported in diagnostics.
    pub path: &'a str,
    /// Lines of the file, without terminators.
    pub lines: &'a [String],
    /// Parsed entries; empty unless the file is a bibliography.
    pub bibliography: &'a [BibEntry],
    /// Existence check for referenced files.
    pub probe: &'a dyn FileProbe,
}

/// A lint rule that scans one file.
///
/// Rules are independent: each sees the original lines only, never another
/// rule's output, and never fails. A pattern that does not match simply
/// produces nothing.
pub trait LintRule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Human-readable name of the rule.
    fn name(&self) -> &str;

    /// Description of what this rule checks.
    fn description(&self) -> &str;

    /// Stable code attached to every diagnostic of this rule.
    fn code(&self) -> Code;

    /// Default severity for this rule.
    fn default_severity(&self) -> Severity;

    /// Kind of file this rule applies to.
    fn file_kind(&self) -> FileKind {
        FileKind::Markup
    }

    /// Check the file and return any diagnostics.
    fn check(&self, ctx: &LintContext<'_>) -> Vec<Diagnostic>;

    /// Whether this rule supports auto-fix.
    fn supports_fix(&self) -> bool {
        false
    }

    /// Build a diagnostic at this rule's severity, carrying its code.
    fn diagnostic(
        &self,
        ctx: &LintContext<'_>,
        span: &Span<'_>,
        message: impl Into<String>,
    ) -> Diagnostic
    where
        Self: Sized,
    {
        Diagnostic::new(ctx.path, span, self.default_severity(), message).with_code(self.code())
    }
}
