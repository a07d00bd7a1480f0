//! Source location spans.
//!
//! A [`Span`] is a byte range inside one line of the input, 0-indexed the
//! way regex offsets are. A [`Range`] is what consumers see: 1-indexed
//! line/column positions. Converting one into the other is the only place
//! where the end-of-line rollover happens.

use serde::Serialize;

/// A 1-indexed position in a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Position {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed, UTF-8 bytes).
    pub column: usize,
}

impl Position {
    /// Create a position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A reported range: `start` inclusive, `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Range {
    /// First position covered.
    pub start: Position,
    /// Position just past the covered text.
    pub end: Position,
}

impl Range {
    /// Whether the range ends on the following line, i.e. it swallows the
    /// line break of the line it starts on.
    pub fn spans_line_break(&self) -> bool {
        self.end.line > self.start.line
    }
}

/// A byte span within a single line of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    /// Line index (0-indexed).
    pub line_idx: usize,
    /// Full text of the line, without its terminator.
    pub line: &'a str,
    /// Start byte offset within the line.
    pub start: usize,
    /// End byte offset within the line (exclusive).
    pub end: usize,
}

impl<'a> Span<'a> {
    /// Create a span over `line[start..end]`.
    pub fn new(line_idx: usize, line: &'a str, start: usize, end: usize) -> Self {
        debug_assert!(start <= end && end <= line.len());
        Self {
            line_idx,
            line,
            start,
            end,
        }
    }

    /// Create a span covering the whole line.
    pub fn whole_line(line_idx: usize, line: &'a str) -> Self {
        Self::new(line_idx, line, 0, line.len())
    }

    /// The text covered by this span.
    pub fn text(&self) -> &'a str {
        &self.line[self.start..self.end]
    }

    /// Convert to a reported range.
    ///
    /// A span that reaches the end of its line ends at column 1 of the next
    /// line, so a suggestion over it replaces the line break as well.
    pub fn range(&self) -> Range {
        let start = Position::new(self.line_idx + 1, self.start + 1);
        let end = if self.end == self.line.len() {
            Position::new(self.line_idx + 2, 1)
        } else {
            Position::new(self.line_idx + 1, self.end + 1)
        };
        Range { start, end }
    }
}
