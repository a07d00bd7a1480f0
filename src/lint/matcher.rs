//! Line scanning primitive shared by all rules.

use regex::{Captures, Regex};

use super::span::Span;

/// The first occurrence of a pattern on one line.
#[derive(Debug)]
pub struct Match<'a> {
    /// Line index (0-indexed).
    pub line_idx: usize,
    /// Full text of the line.
    pub line: &'a str,
    /// Capture groups of the occurrence.
    pub captures: Captures<'a>,
}

impl<'a> Match<'a> {
    /// Span of the whole occurrence.
    pub fn span(&self) -> Span<'a> {
        let m = self.captures.get(0).expect("group 0 is always present");
        Span::new(self.line_idx, self.line, m.start(), m.end())
    }

    /// Span of capture group `i`, if it participated.
    pub fn group_span(&self, i: usize) -> Option<Span<'a>> {
        self.captures
            .get(i)
            .map(|m| Span::new(self.line_idx, self.line, m.start(), m.end()))
    }

    /// Text of capture group `i`, or `""` if it did not participate.
    pub fn group(&self, i: usize) -> &'a str {
        self.captures.get(i).map_or("", |m| m.as_str())
    }
}

/// Find the first occurrence of `pattern` on every line where it occurs.
///
/// Results are in line order; lines without an occurrence are skipped.
pub fn find_matching_texts<'a>(lines: &'a [String], pattern: &Regex) -> Vec<Match<'a>> {
    find_matching_texts_where(lines, pattern, |_| true)
}

/// Like [`find_matching_texts`], but occurrences rejected by `accept` are
/// passed over and scanning continues along the line.
pub fn find_matching_texts_where<'a, F>(
    lines: &'a [String],
    pattern: &Regex,
    accept: F,
) -> Vec<Match<'a>>
where
    F: Fn(&Captures<'a>) -> bool,
{
    lines
        .iter()
        .enumerate()
        .filter_map(|(line_idx, line)| {
            pattern
                .captures_iter(line)
                .find(|captures| accept(captures))
                .map(|captures| Match {
                    line_idx,
                    line,
                    captures,
                })
        })
        .collect()
}
