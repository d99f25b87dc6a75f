//! Sentence segmentation over a line-oriented document.
//!
//! Splits a document into [`Sentence`]s that may span several lines while
//! keeping every fragment anchored to its original document range.
//!
//! Rules, applied per line:
//! - A line starting with ```` ``` ```` toggles a fenced code block. Opening
//!   a fence ends the current sentence; fenced lines and both fence lines
//!   are skipped.
//! - A blank line ends the current sentence.
//! - A list line (`- item`) is a sentence on its own.
//! - Any other line is cut after each `.`; complete pieces become
//!   sentences and an unterminated tail carries over to the next line.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::Document;
use crate::fragment::{LineFragment, find_sentence_ends, split_at};
use crate::position::Range;

/// Prefix that opens and closes a fenced code block.
pub const CODE_FENCE: &str = "```";

/// Bulleted list item: optional indentation, a hyphen, then a space.
static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*- ").expect("valid regex"));

/// One logical sentence: a non-empty, ordered run of line fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence<'a> {
    fragments: Vec<LineFragment<'a>>,
}

impl<'a> Sentence<'a> {
    /// Build a sentence from fragments. Returns `None` if `fragments` is empty.
    pub fn new(fragments: Vec<LineFragment<'a>>) -> Option<Self> {
        (!fragments.is_empty()).then_some(Self { fragments })
    }

    /// The sentence's fragments, in document order.
    pub fn fragments(&self) -> &[LineFragment<'a>] {
        &self.fragments
    }

    /// Fragment texts joined by a single space.
    pub fn text(&self) -> String {
        self.fragments
            .iter()
            .map(LineFragment::text)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// From the start of the first fragment to the end of the last.
    pub fn range(&self) -> Range {
        let first = self.fragments[0].range();
        let last = self.fragments[self.fragments.len() - 1].range();
        Range::new(first.start, last.end)
    }

    /// Number of physical lines the sentence touches.
    pub fn line_span(&self) -> usize {
        let range = self.range();
        (range.end.line - range.start.line) as usize + 1
    }
}

impl<'a> From<LineFragment<'a>> for Sentence<'a> {
    fn from(fragment: LineFragment<'a>) -> Self {
        Self {
            fragments: vec![fragment],
        }
    }
}

/// Whether the scanner is in prose or inside a fenced code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum FenceState {
    #[default]
    Prose,
    CodeBlock,
}

/// Splits documents into sentences.
#[derive(Debug, Clone, Copy, Default)]
pub struct Segmenter {
    keep_trailing: bool,
}

impl Segmenter {
    /// A segmenter that discards a sentence still open at end of document.
    pub const fn new() -> Self {
        Self {
            keep_trailing: false,
        }
    }

    /// Emit a sentence still open at end of document instead of dropping it.
    pub const fn keep_trailing(mut self, keep: bool) -> Self {
        self.keep_trailing = keep;
        self
    }

    /// Segment `document` into sentences.
    #[tracing::instrument(skip_all, fields(lines = document.line_count()))]
    pub fn segment<'a, D: Document + ?Sized>(&self, document: &'a D) -> Vec<Sentence<'a>> {
        let mut pass = Pass::default();

        for line in document.lines() {
            if line.text.starts_with(CODE_FENCE) {
                if pass.fence == FenceState::Prose {
                    pass.flush();
                    pass.fence = FenceState::CodeBlock;
                } else {
                    pass.fence = FenceState::Prose;
                }
                continue;
            }
            if pass.fence == FenceState::CodeBlock {
                continue;
            }

            if line.is_empty_or_whitespace() {
                pass.flush();
                continue;
            }

            let fragment = LineFragment::from_line(line);
            if LIST_ITEM.is_match(line.text) {
                pass.flush();
                pass.emit(vec![fragment]);
                continue;
            }

            pass.push_line(fragment);
        }

        if self.keep_trailing {
            pass.flush();
        }

        let sentences = pass.finish();
        tracing::debug!(sentences = sentences.len(), "segmented document");
        sentences
    }
}

/// Segment `document` with the default [`Segmenter`].
pub fn segment<D: Document + ?Sized>(document: &D) -> Vec<Sentence<'_>> {
    Segmenter::new().segment(document)
}

/// State carried across the lines of a single segmentation pass.
#[derive(Default)]
struct Pass<'a> {
    fence: FenceState,
    current: Vec<LineFragment<'a>>,
    sentences: Vec<Vec<LineFragment<'a>>>,
}

impl<'a> Pass<'a> {
    /// End the current sentence.
    fn flush(&mut self) {
        let current = std::mem::take(&mut self.current);
        self.emit(current);
    }

    fn emit(&mut self, fragments: Vec<LineFragment<'a>>) {
        self.sentences.push(fragments);
    }

    /// Add an ordinary prose line, cutting it at each terminator.
    fn push_line(&mut self, line: LineFragment<'a>) {
        let ends = find_sentence_ends(&line);
        if ends.is_empty() {
            self.current.push(line);
            return;
        }

        let mut pieces = split_at(line, &ends).into_iter();
        let Some(first) = pieces.next() else {
            return;
        };
        self.current.push(first);
        self.flush();

        let mut rest: Vec<_> = pieces.collect();
        let Some(last) = rest.pop() else {
            return;
        };
        for complete in rest {
            self.emit(vec![complete]);
        }
        if find_sentence_ends(&last).is_empty() {
            self.current.push(last);
        } else {
            self.emit(vec![last]);
        }
    }

    /// Drop blank fragments, then empty sentences.
    fn finish(self) -> Vec<Sentence<'a>> {
        self.sentences
            .into_iter()
            .filter_map(|fragments| {
                Sentence::new(
                    fragments
                        .into_iter()
                        .filter(|f| !f.text().trim().is_empty())
                        .collect(),
                )
            })
            .collect()
    }
}
