//! Document coordinates.
//!
//! Positions follow editor conventions: zero-based lines, and columns
//! counted in UTF-16 code units. Rust strings are indexed by byte, so every
//! column in this crate is produced through [`utf16_len`] or
//! [`utf16_column`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A point in a document.
///
/// Ordered by line, then by character.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub struct Position {
    /// Zero-based line index.
    pub line: u32,
    /// Zero-based column in UTF-16 code units.
    pub character: u32,
}

impl Position {
    /// Create a position.
    pub const fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.character)
    }
}

/// A half-open span between two positions. May cross lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Range {
    /// Inclusive start.
    pub start: Position,
    /// Exclusive end.
    pub end: Position,
}

impl Range {
    /// Create a range. `start` must not be after `end`.
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(start <= end, "range start {start} is after end {end}");
        Self { start, end }
    }

    /// Create a range covering `start..end` on a single line.
    pub fn on_line(line: u32, start: u32, end: u32) -> Self {
        Self::new(Position::new(line, start), Position::new(line, end))
    }

    /// Returns `true` if the range starts and ends on the same line.
    pub const fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }

    /// Returns `true` if `position` lies inside the range.
    pub fn contains(&self, position: Position) -> bool {
        self.start <= position && position < self.end
    }
}

/// Length of `text` in UTF-16 code units.
pub fn utf16_len(text: &str) -> u32 {
    text.chars().map(|c| c.len_utf16() as u32).sum()
}

/// UTF-16 column of the byte offset `byte_index` within `text`.
///
/// `byte_index` must sit on a char boundary.
pub fn utf16_column(text: &str, byte_index: usize) -> u32 {
    utf16_len(&text[..byte_index])
}
