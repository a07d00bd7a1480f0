//! Lint output formatters.
//!
//! This module provides formatters for outputting lint diagnostics
//! in different formats (rdjson lines, human-readable).

pub mod human;
pub mod rdjson;

use crate::lint::Diagnostic;
use serde::Deserialize;
use std::io::Write;

/// Output format for lint results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One reviewdog rdjson diagnostic object per line.
    #[default]
    Rdjsonl,
    /// Terminal-oriented report with a summary.
    Human,
}

/// Trait for formatting lint output.
pub trait LintFormatter {
    /// Format diagnostics to the given writer.
    fn format<W: Write + ?Sized>(
        &self,
        diagnostics: &[Diagnostic],
        writer: &mut W,
    ) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use rdjson::RdjsonFormatter;
