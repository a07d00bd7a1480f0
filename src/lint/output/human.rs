//! Human-readable output formatter.
//!
//! Formats lint diagnostics for terminal display with optional color support.

use super::LintFormatter;
use crate::lint::{Diagnostic, Severity};
use console::Style;
use std::io::Write;

/// Formats lint output for human consumption.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn severity_style(&self, severity: Severity) -> Style {
        if !self.use_color {
            return Style::new();
        }
        match severity {
            Severity::Warning => Style::new().color256(208),
            Severity::Error => Style::new().red().bold(),
        }
    }

    fn dim(&self) -> Style {
        if self.use_color {
            Style::new().dim()
        } else {
            Style::new()
        }
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write + ?Sized>(
        &self,
        diagnostics: &[Diagnostic],
        writer: &mut W,
    ) -> std::io::Result<()> {
        for diag in diagnostics {
            // Header line: error[GTN:006]: message
            let header = match diag.code {
                Some(code) => format!("{}[{}]", diag.severity, code),
                None => diag.severity.to_string(),
            };
            writeln!(
                writer,
                "{}: {}",
                self.severity_style(diag.severity).apply_to(header),
                diag.message
            )?;

            writeln!(
                writer,
                "  {} {}:{}:{}",
                self.dim().apply_to("-->"),
                diag.path,
                diag.range.start.line,
                diag.range.start.column
            )?;

            if let Some(ref suggestion) = diag.suggestion {
                let text = suggestion.text.trim_end_matches('\n');
                if text.is_empty() {
                    writeln!(writer, "   = help: remove this line")?;
                } else {
                    writeln!(writer, "   = help: replace with `{}`", text)?;
                }
            }

            if let Some(code) = diag.code {
                writeln!(writer, "   = see: {}", self.dim().apply_to(code.url()))?;
            }

            writeln!(writer)?;
        }

        // Summary
        let error_count = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        let warning_count = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count();

        if error_count > 0 || warning_count > 0 {
            writeln!(
                writer,
                "Found {} error(s) and {} warning(s)",
                error_count, warning_count
            )?;
        }

        Ok(())
    }
}
