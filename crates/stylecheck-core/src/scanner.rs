//! Lexical scanning: complex words, adverbs and qualifiers.
//!
//! Each configured word is reported at most once per line, at its first
//! occurrence. Matching is plain substring search, so `"really"` also fires
//! inside `"unreally"`. All words of one list are searched in a single pass
//! with an Aho-Corasick automaton.

use aho_corasick::{AhoCorasick, MatchKind};

use crate::diagnostic::{Diagnostic, Rule};
use crate::error::AnalysisResult;
use crate::fragment::LineFragment;
use crate::position::{Range, utf16_len};
use crate::word_lists::WordLists;

/// Message for adverbs.
pub const ADVERB_MESSAGE: &str = "Adverb. Use a forceful verb instead.";

/// Message for qualifiers.
pub const QUALIFIER_MESSAGE: &str = "Qualifier. Be bold, don't hedge.";

/// Message for a complex word configured without suggestions.
pub const OMIT_COMPLEX_MESSAGE: &str = "Complex. Omit or simplify.";

fn complex_message(words: &[String]) -> String {
    if words.is_empty() {
        return OMIT_COMPLEX_MESSAGE.to_string();
    }
    format!("Complex. Omit or replace with {}.", suggestions(words))
}

/// Render suggestions as a quoted list: `'a'`, `'a' or 'b'`, `'a', 'b' or 'c'`.
pub fn suggestions(words: &[String]) -> String {
    match words {
        [] => String::new(),
        [only] => format!("'{only}'"),
        [rest @ .., last] => format!("'{}' or '{last}'", rest.join("', '")),
    }
}

/// Range of the first occurrence of `word` in `line`, if any.
pub fn range_of_word(line: &LineFragment<'_>, word: &str) -> Option<Range> {
    let idx = line.text().find(word)?;
    let start = line.position_at(idx);
    Some(Range::on_line(
        start.line,
        start.character,
        start.character + utf16_len(word),
    ))
}

/// One compiled word list.
#[derive(Debug, Clone)]
struct Matcher {
    words: Vec<String>,
    automaton: AhoCorasick,
}

impl Matcher {
    fn new(words: Vec<String>) -> AnalysisResult<Self> {
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(&words)?;
        Ok(Self { words, automaton })
    }

    /// `(word index, range)` for each word present in `line`, in list order.
    fn first_occurrences(&self, line: &LineFragment<'_>) -> Vec<(usize, Range)> {
        let mut first: Vec<Option<usize>> = vec![None; self.words.len()];
        for m in self.automaton.find_overlapping_iter(line.text()) {
            let slot = &mut first[m.pattern().as_usize()];
            if slot.is_none() {
                *slot = Some(m.start());
            }
        }

        first
            .into_iter()
            .enumerate()
            .filter_map(|(idx, start)| {
                let start = line.position_at(start?);
                let len = utf16_len(&self.words[idx]);
                Some((
                    idx,
                    Range::on_line(start.line, start.character, start.character + len),
                ))
            })
            .collect()
    }
}

/// Scans single lines against the configured word lists.
#[derive(Debug, Clone)]
pub struct LexicalScanner {
    complex: Matcher,
    complex_messages: Vec<String>,
    adverbs: Matcher,
    qualifiers: Matcher,
}

impl LexicalScanner {
    /// Compile the scanner for `lists`.
    pub fn new(lists: &WordLists) -> AnalysisResult<Self> {
        let (words, messages): (Vec<String>, Vec<String>) = lists
            .complex_words()
            .iter()
            .map(|entry| (entry.word.clone(), complex_message(&entry.suggestions)))
            .unzip();

        Ok(Self {
            complex: Matcher::new(words)?,
            complex_messages: messages,
            adverbs: Matcher::new(lists.adverbs().to_vec())?,
            qualifiers: Matcher::new(lists.qualifiers().to_vec())?,
        })
    }

    /// Complex words and phrases in `line`.
    pub fn complex_words(&self, line: &LineFragment<'_>) -> Vec<Diagnostic> {
        self.complex
            .first_occurrences(line)
            .into_iter()
            .map(|(idx, range)| {
                Diagnostic::information(
                    range,
                    self.complex_messages[idx].clone(),
                    Rule::ComplexWord,
                )
            })
            .collect()
    }

    /// Adverbs in `line`.
    pub fn adverbs(&self, line: &LineFragment<'_>) -> Vec<Diagnostic> {
        fixed_message(&self.adverbs, line, ADVERB_MESSAGE, Rule::Adverb)
    }

    /// Qualifiers in `line`.
    pub fn qualifiers(&self, line: &LineFragment<'_>) -> Vec<Diagnostic> {
        fixed_message(&self.qualifiers, line, QUALIFIER_MESSAGE, Rule::Qualifier)
    }

    /// All three lexical checks, concatenated in that order.
    pub fn scan_line(&self, line: &LineFragment<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = self.complex_words(line);
        diagnostics.extend(self.adverbs(line));
        diagnostics.extend(self.qualifiers(line));
        diagnostics
    }
}

fn fixed_message(
    matcher: &Matcher,
    line: &LineFragment<'_>,
    message: &str,
    rule: Rule,
) -> Vec<Diagnostic> {
    matcher
        .first_occurrences(line)
        .into_iter()
        .map(|(_, range)| Diagnostic::information(range, message, rule))
        .collect()
}
