//! Document snapshots supplied by the host.
//!
//! The engine reads documents line by line through the [`Document`] trait and
//! never mutates them. [`TextDocument`] is the owned snapshot the CLI and MCP
//! server build from a whole buffer; any slice of strings is also a document.

/// One line of a document snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextLine<'a> {
    /// Zero-based line index.
    pub line_number: u32,
    /// The line's text, without its line break.
    pub text: &'a str,
}

impl<'a> TextLine<'a> {
    /// Create a line.
    pub const fn new(line_number: u32, text: &'a str) -> Self {
        Self { line_number, text }
    }

    /// Returns `true` if the line is empty or only whitespace.
    pub fn is_empty_or_whitespace(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Read-only, line-oriented access to a document snapshot.
pub trait Document {
    /// Number of lines in the snapshot.
    fn line_count(&self) -> usize;

    /// The line at `index`. Callers only pass `index < line_count()`.
    fn line_at(&self, index: usize) -> TextLine<'_>;

    /// Iterate over every line in order.
    fn lines(&self) -> Lines<'_, Self> {
        Lines {
            document: self,
            next: 0,
        }
    }
}

/// Iterator over the lines of a [`Document`].
#[derive(Debug)]
pub struct Lines<'a, D: ?Sized> {
    document: &'a D,
    next: usize,
}

impl<'a, D: Document + ?Sized> Iterator for Lines<'a, D> {
    type Item = TextLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.document.line_count() {
            return None;
        }
        let line = self.document.line_at(self.next);
        self.next += 1;
        Some(line)
    }
}

/// An owned document snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextDocument {
    lines: Vec<String>,
}

impl TextDocument {
    /// Snapshot `text`, splitting on `\n` and dropping a trailing `\r`.
    ///
    /// A final line terminator does not start a new line: `"a\n"` is one
    /// line, not two. The empty line an editor shows after it has no text,
    /// so it cannot carry diagnostics anyway.
    pub fn new(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_owned).collect(),
        }
    }
}

impl From<&str> for TextDocument {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl Document for TextDocument {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_at(&self, index: usize) -> TextLine<'_> {
        TextLine::new(index as u32, &self.lines[index])
    }
}

impl<S: AsRef<str>> Document for [S] {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line_at(&self, index: usize) -> TextLine<'_> {
        TextLine::new(index as u32, self[index].as_ref())
    }
}

impl<S: AsRef<str>> Document for Vec<S> {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line_at(&self, index: usize) -> TextLine<'_> {
        TextLine::new(index as u32, self[index].as_ref())
    }
}
