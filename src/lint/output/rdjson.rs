//! Reviewdog rdjsonl output formatter.
//!
//! Writes one compact JSON object per diagnostic, one per line, in the
//! reviewdog diagnostic format. `code` and `suggestions` are omitted when a
//! diagnostic has none.

use super::LintFormatter;
use crate::lint::span::Range;
use crate::lint::{Diagnostic, Severity};
use serde::Serialize;
use std::io::Write;

/// Formats lint output as rdjson lines.
pub struct RdjsonFormatter;

#[derive(Serialize)]
struct RdjsonDiagnostic<'a> {
    message: &'a str,
    location: RdjsonLocation<'a>,
    severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<RdjsonCode>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    suggestions: Vec<RdjsonSuggestion<'a>>,
}

#[derive(Serialize)]
struct RdjsonLocation<'a> {
    path: &'a str,
    range: Range,
}

#[derive(Serialize)]
struct RdjsonCode {
    value: &'static str,
    url: String,
}

#[derive(Serialize)]
struct RdjsonSuggestion<'a> {
    text: &'a str,
    range: Range,
}

impl RdjsonFormatter {
    /// Create a new rdjson formatter.
    pub fn new() -> Self {
        Self
    }

    fn to_wire(diag: &Diagnostic) -> RdjsonDiagnostic<'_> {
        RdjsonDiagnostic {
            message: &diag.message,
            location: RdjsonLocation {
                path: &diag.path,
                range: diag.range,
            },
            severity: diag.severity,
            code: diag.code.map(|code| RdjsonCode {
                value: code.value(),
                url: code.url(),
            }),
            suggestions: diag
                .suggestion
                .iter()
                .map(|s| RdjsonSuggestion {
                    text: &s.text,
                    range: s.range,
                })
                .collect(),
        }
    }

    /// Render one diagnostic as a single JSON line (without terminator).
    pub fn render(&self, diag: &Diagnostic) -> serde_json::Result<String> {
        serde_json::to_string(&Self::to_wire(diag))
    }
}

impl Default for RdjsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LintFormatter for RdjsonFormatter {
    fn format<W: Write + ?Sized>(
        &self,
        diagnostics: &[Diagnostic],
        writer: &mut W,
    ) -> std::io::Result<()> {
        for diag in diagnostics {
            writeln!(writer, "{}", self.render(diag)?)?;
        }
        Ok(())
    }
}
