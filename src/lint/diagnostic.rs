//! Lint diagnostic messages.
//!
//! This module provides the [`Diagnostic`] type for representing findings,
//! together with the constructors that turn a matched [`Span`] into a
//! reportable range and an optional suggestion over exactly that range.

use super::rule::Severity;
use super::span::{Range, Span};

/// Base URL of the error code documentation page.
pub const CODE_URL: &str = "https://github.com/galaxyproject/training-material/wiki/Error-Codes";

/// Stable identifier of a rule, used for documentation links and suppression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    /// Create a code from its literal value (e.g. `GTN:004`).
    pub const fn new(value: &'static str) -> Self {
        Self(value)
    }

    /// The code as written (e.g. `GTN:004`).
    pub fn value(&self) -> &'static str {
        self.0
    }

    /// Anchor on the documentation page (`GTN:004` -> `gtn004`).
    pub fn anchor(&self) -> String {
        self.0.replace(':', "").to_lowercase()
    }

    /// Documentation link for this code.
    pub fn url(&self) -> String {
        format!("{}#{}", CODE_URL, self.anchor())
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A proposed literal replacement for a diagnostic's range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Replacement text.
    pub text: String,
    /// Range replaced; always equal to the diagnostic's range.
    pub range: Range,
}

/// A finding produced by a lint rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// File identifier, passed through unchanged.
    pub path: String,
    /// Location of the finding.
    pub range: Range,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Rule code; `None` for uncoded diagnostics.
    pub code: Option<Code>,
    /// Human-readable message.
    pub message: String,
    /// Optional autofix.
    pub suggestion: Option<Suggestion>,
}

impl Diagnostic {
    /// Create an advisory diagnostic over `span`.
    pub fn new(
        path: impl Into<String>,
        span: &Span<'_>,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            range: span.range(),
            severity,
            code: None,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Create a warning over `span`.
    pub fn warning(path: impl Into<String>, span: &Span<'_>, message: impl Into<String>) -> Self {
        Self::new(path, span, Severity::Warning, message)
    }

    /// Create an error over `span`.
    pub fn error(path: impl Into<String>, span: &Span<'_>, message: impl Into<String>) -> Self {
        Self::new(path, span, Severity::Error, message)
    }

    /// Create a warning suggesting the whole line (and its break) be deleted.
    pub fn delete_line(
        path: impl Into<String>,
        line_idx: usize,
        line: &str,
        message: impl Into<String>,
    ) -> Self {
        Self::warning(path, &Span::whole_line(line_idx, line), message).with_replacement("")
    }

    /// Attach a rule code.
    pub fn with_code(mut self, code: Code) -> Self {
        self.code = Some(code);
        self
    }

    /// Attach a suggestion replacing exactly this diagnostic's range.
    ///
    /// When the range swallows the line break, non-empty replacements get
    /// the break put back so applying them does not join lines.
    pub fn with_replacement(mut self, text: impl Into<String>) -> Self {
        let mut text = text.into();
        if self.range.spans_line_break() && !text.is_empty() {
            text.push('\n');
        }
        self.suggestion = Some(Suggestion {
            text,
            range: self.range,
        });
        self
    }
}
