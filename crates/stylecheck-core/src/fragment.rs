//! Line fragments and the sentence-terminator split rule.
//!
//! A [`LineFragment`] is a slice of one physical line together with the range
//! it occupies in the original document. Fragments are only ever created from
//! a whole line or by [`split_at`], so their ranges always agree with their
//! text.
//!
//! Split rule: the terminator stays with the fragment before it. A line
//! `"One. Two"` splits into `"One."` at `0..4` and `" Two"` at `4..8`.

use crate::document::TextLine;
use crate::position::{Position, Range, utf16_column, utf16_len};

/// The only character that ends a sentence.
pub const SENTENCE_TERMINATOR: char = '.';

/// A contiguous slice of a single line, anchored in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineFragment<'a> {
    text: &'a str,
    range: Range,
}

impl<'a> LineFragment<'a> {
    /// A fragment covering an entire line.
    pub fn from_line(line: TextLine<'a>) -> Self {
        Self {
            text: line.text,
            range: Range::on_line(line.line_number, 0, utf16_len(line.text)),
        }
    }

    /// The fragment's text.
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// The range the fragment occupies in the document.
    pub const fn range(&self) -> Range {
        self.range
    }

    /// The physical line this fragment belongs to.
    pub const fn line_number(&self) -> u32 {
        self.range.start.line
    }

    /// Document position of the byte offset `byte_index` within this fragment.
    pub fn position_at(&self, byte_index: usize) -> Position {
        Position::new(
            self.line_number(),
            self.range.start.character + utf16_column(self.text, byte_index),
        )
    }

    /// Byte offset of the document column `character`, if it falls on a
    /// character boundary inside this fragment.
    fn byte_index_of(&self, character: u32) -> Option<usize> {
        let mut column = self.range.start.character;
        for (idx, ch) in self.text.char_indices() {
            if column == character {
                return Some(idx);
            }
            if column > character {
                return None;
            }
            column += ch.len_utf16() as u32;
        }
        None
    }

    /// Split into the part ending at `byte_index` (exclusive) and the rest.
    fn split_bytes(&self, byte_index: usize) -> (Self, Self) {
        let (left, right) = self.text.split_at(byte_index);
        let cut = self.position_at(byte_index);
        (
            Self {
                text: left,
                range: Range::new(self.range.start, cut),
            },
            Self {
                text: right,
                range: Range::new(cut, self.range.end),
            },
        )
    }
}

/// Find every sentence terminator in `fragment`, in increasing order.
///
/// Returns an empty vector when there is none.
pub fn find_sentence_ends(fragment: &LineFragment<'_>) -> Vec<Position> {
    fragment
        .text
        .match_indices(SENTENCE_TERMINATOR)
        .map(|(idx, _)| fragment.position_at(idx))
        .collect()
}

/// Split `fragment` after each terminator position in `ends`.
///
/// Each piece keeps its terminator. A trailing piece with no text is
/// omitted, so a fragment ending in a terminator never yields an empty last
/// piece. Positions that do not fall inside the remaining text are ignored.
pub fn split_at<'a>(fragment: LineFragment<'a>, ends: &[Position]) -> Vec<LineFragment<'a>> {
    let mut pieces = Vec::with_capacity(ends.len() + 1);
    let mut rest = fragment;

    for end in ends {
        if end.line != rest.line_number() {
            continue;
        }
        let Some(idx) = rest.byte_index_of(end.character) else {
            continue;
        };
        let cut = idx + rest.text[idx..].chars().next().map_or(0, char::len_utf8);
        let (left, right) = rest.split_bytes(cut);
        pieces.push(left);
        rest = right;
        if rest.text.is_empty() {
            return pieces;
        }
    }

    pieces.push(rest);
    pieces
}
