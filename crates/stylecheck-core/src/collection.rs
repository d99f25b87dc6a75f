//! Where diagnostics go once a document has been analyzed.

use std::collections::BTreeMap;

use crate::diagnostic::{DIAGNOSTIC_SOURCE, Diagnostic};

/// Receives the diagnostic set of each document.
///
/// Every call to [`set`](DiagnosticSink::set) replaces the key's previous set
/// wholesale; results are never merged.
pub trait DiagnosticSink {
    /// Replace the diagnostics stored for `key`.
    fn set(&mut self, key: &str, diagnostics: Vec<Diagnostic>);

    /// Forget `key`, typically because the document was closed.
    fn delete(&mut self, key: &str);
}

/// In-memory diagnostic store keyed by document identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticCollection {
    documents: BTreeMap<String, Vec<Diagnostic>>,
}

impl DiagnosticCollection {
    /// An empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// The collection's name, shared with each diagnostic's `source`.
    pub const fn name(&self) -> &'static str {
        DIAGNOSTIC_SOURCE
    }

    /// Diagnostics stored for `key`.
    pub fn get(&self, key: &str) -> Option<&[Diagnostic]> {
        self.documents.get(key).map(Vec::as_slice)
    }

    /// Documents and their diagnostics, ordered by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Diagnostic])> {
        self.documents
            .iter()
            .map(|(key, diagnostics)| (key.as_str(), diagnostics.as_slice()))
    }

    /// Number of documents with a stored set.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether no document has a stored set.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Drop every stored set.
    pub fn clear(&mut self) {
        self.documents.clear();
    }
}

impl DiagnosticSink for DiagnosticCollection {
    fn set(&mut self, key: &str, diagnostics: Vec<Diagnostic>) {
        tracing::debug!(key, count = diagnostics.len(), "diagnostics replaced");
        self.documents.insert(key.to_string(), diagnostics);
    }

    fn delete(&mut self, key: &str) {
        if self.documents.remove(key).is_some() {
            tracing::debug!(key, "diagnostics deleted");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Rule;
    use crate::position::Range;

    fn diagnostic(line: u32) -> Diagnostic {
        Diagnostic::information(Range::on_line(line, 0, 4), "message", Rule::Adverb)
    }

    #[test]
    fn set_replaces_previous_diagnostics() {
        let mut collection = DiagnosticCollection::new();
        collection.set("a.md", vec![diagnostic(0), diagnostic(1)]);
        collection.set("a.md", vec![diagnostic(2)]);

        let stored = collection.get("a.md").unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].range.start.line, 2);
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn empty_set_is_kept() {
        let mut collection = DiagnosticCollection::new();
        collection.set("a.md", Vec::new());
        assert_eq!(collection.get("a.md"), Some(&[][..]));
    }

    #[test]
    fn delete_forgets_document() {
        let mut collection = DiagnosticCollection::new();
        collection.set("a.md", vec![diagnostic(0)]);
        collection.delete("a.md");
        collection.delete("never-seen.md");
        assert!(collection.get("a.md").is_none());
        assert!(collection.is_empty());
    }

    #[test]
    fn iter_is_ordered_by_key() {
        let mut collection = DiagnosticCollection::new();
        collection.set("b.md", vec![diagnostic(0)]);
        collection.set("a.md", Vec::new());
        let keys: Vec<&str> = collection.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["a.md", "b.md"]);

        collection.clear();
        assert_eq!(collection.len(), 0);
    }

    #[test]
    fn collection_is_named_after_source() {
        assert_eq!(DiagnosticCollection::new().name(), "writing-style");
    }
}
