//! Automatic fix application.
//!
//! Suggestions carry line/column ranges over the original text. This module
//! maps them back to byte offsets and splices the replacements in, last
//! first, so earlier offsets stay valid.

use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::debug;

use crate::error::{GtnLintError, Result};
use crate::lint::span::Position;
use crate::lint::Diagnostic;

/// A single replacement over byte offsets of one text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fix {
    /// Start byte offset.
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
    /// Replacement text.
    pub replacement: String,
}

/// Result of applying fixes to one text.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FixResult {
    /// Number of fixes applied.
    pub applied: usize,
    /// Fixes dropped because they overlapped an applied fix or did not map
    /// onto the text.
    pub skipped: usize,
    /// Diagnostics without a suggestion.
    pub unfixable: usize,
}

/// Engine for applying automatic fixes.
pub struct FixEngine;

impl FixEngine {
    /// Create a new fix engine.
    pub fn new() -> Self {
        Self
    }

    /// Map the suggestions of `diagnostics` onto byte offsets of `source`.
    ///
    /// Returns the fixes in diagnostic order and the number of suggestions
    /// whose range does not map onto `source`.
    pub fn fixes_for(&self, source: &str, diagnostics: &[Diagnostic]) -> (Vec<Fix>, usize) {
        let line_starts = line_starts(source);
        let mut fixes = Vec::new();
        let mut invalid = 0;

        for suggestion in diagnostics.iter().filter_map(|d| d.suggestion.as_ref()) {
            let start = offset_of(source, &line_starts, suggestion.range.start);
            let end = offset_of(source, &line_starts, suggestion.range.end);
            match (start, end) {
                (Some(start), Some(end)) if start <= end => fixes.push(Fix {
                    start,
                    end,
                    replacement: adapt_line_break(source, end, &suggestion.text),
                }),
                _ => invalid += 1,
            }
        }

        (fixes, invalid)
    }

    /// Apply `fixes` to `source`.
    ///
    /// Fixes are applied back to front. A fix overlapping one already
    /// applied is skipped; among fixes starting at the same offset the one
    /// listed first wins.
    pub fn apply(&self, source: &str, fixes: &[Fix]) -> (String, FixResult) {
        let mut sorted: Vec<&Fix> = fixes.iter().collect();
        sorted.sort_by(|a, b| b.start.cmp(&a.start));

        let mut text = source.to_string();
        let mut limit = source.len();
        let mut result = FixResult::default();

        for fix in sorted {
            if fix.end > limit {
                result.skipped += 1;
                continue;
            }
            text.replace_range(fix.start..fix.end, &fix.replacement);
            limit = fix.start;
            result.applied += 1;
        }

        (text, result)
    }

    /// Apply the suggestions of `diagnostics` to the file at `path`.
    ///
    /// The file is only rewritten when at least one fix applies.
    pub fn fix_file(&self, path: &Path, diagnostics: &[Diagnostic]) -> Result<FixResult> {
        let source = fs::read_to_string(path).map_err(|source| GtnLintError::FileUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let (fixes, invalid) = self.fixes_for(&source, diagnostics);
        let (fixed, mut result) = self.apply(&source, &fixes);
        result.skipped += invalid;
        result.unfixable = diagnostics
            .iter()
            .filter(|d| d.suggestion.is_none())
            .count();

        if result.applied > 0 {
            fs::write(path, fixed)
                .with_context(|| format!("Failed to write fixes to {}", path.display()))?;
        }
        debug!(
            "Fixed {}: {} applied, {} skipped",
            path.display(),
            result.applied,
            result.skipped
        );

        Ok(result)
    }
}

impl Default for FixEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte offset at which every line starts; one past the last `\n` included.
fn line_starts(source: &str) -> Vec<usize> {
    std::iter::once(0)
        .chain(source.match_indices('\n').map(|(i, _)| i + 1))
        .collect()
}

fn offset_of(source: &str, line_starts: &[usize], pos: Position) -> Option<usize> {
    let line_idx = pos.line.checked_sub(1)?;
    let column = pos.column.checked_sub(1)?;

    let offset = match line_starts.get(line_idx) {
        Some(start) => start + column,
        // Rollover past the final unterminated line.
        None if line_idx == line_starts.len() && column == 0 => source.len(),
        None => return None,
    };

    (offset <= source.len() && source.is_char_boundary(offset)).then_some(offset)
}

/// Match the replacement's trailing break to the break it replaces.
fn adapt_line_break(source: &str, end: usize, text: &str) -> String {
    let Some(body) = text.strip_suffix('\n') else {
        return text.to_string();
    };

    if !source[..end].ends_with('\n') {
        body.to_string()
    } else if source[..end].ends_with("\r\n") {
        format!("{}\r\n", body)
    } else {
        text.to_string()
    }
}
