//! Passive voice detection.
//!
//! Flags a precursor word ("is", "was", "been", ...) followed by a word ending
//! in "ed". The following word may sit at the start of the sentence's next
//! fragment, in which case the diagnostic crosses the line break.
//!
//! Only the "-ed" suffix is checked: irregular participles such as "was
//! written" are not reported.

use std::collections::HashSet;

use crate::diagnostic::{Diagnostic, Rule};
use crate::fragment::LineFragment;
use crate::position::Range;
use crate::segment::Sentence;
use crate::word_lists::WordLists;

/// Message for passive constructions.
pub const PASSIVE_VOICE_MESSAGE: &str = "Passive voice. Use active voice.";

/// Detects precursor + past-participle pairs within a sentence.
#[derive(Debug, Clone)]
pub struct PassiveVoiceDetector {
    precursors: HashSet<String>,
}

impl PassiveVoiceDetector {
    /// Build a detector using the precursor words in `lists`.
    pub fn new(lists: &WordLists) -> Self {
        Self {
            precursors: lists.passive_precursors().iter().cloned().collect(),
        }
    }

    /// Passive constructions in `sentence`, in document order.
    pub fn detect(&self, sentence: &Sentence<'_>) -> Vec<Diagnostic> {
        let fragments = sentence.fragments();
        let mut diagnostics = Vec::new();

        for (i, fragment) in fragments.iter().enumerate() {
            let words = words(fragment.text());
            let last_fragment = i + 1 == fragments.len();

            for (j, &(offset, word)) in words.iter().enumerate() {
                let last_word = j + 1 == words.len();
                if last_word && last_fragment {
                    break;
                }
                if !self.precursors.contains(word) {
                    continue;
                }

                let following = if last_word {
                    let next = &fragments[i + 1];
                    words_first(next)
                } else {
                    let (next_offset, next_word) = words[j + 1];
                    Some((fragment, next_offset, next_word))
                };
                let Some((owner, next_offset, next_word)) = following else {
                    continue;
                };
                if !is_past_participle(next_word) {
                    continue;
                }

                let range = Range::new(
                    fragment.position_at(offset),
                    owner.position_at(next_offset + next_word.len()),
                );
                tracing::trace!(precursor = word, participle = next_word, ?range, "passive voice");
                diagnostics.push(Diagnostic::information(
                    range,
                    PASSIVE_VOICE_MESSAGE,
                    Rule::PassiveVoice,
                ));
            }
        }

        diagnostics
    }
}

/// Space-separated words of the trimmed text, with their byte offsets in
/// the untrimmed text. Repeated spaces produce empty words.
fn words(text: &str) -> Vec<(usize, &str)> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut offset = text.len() - text.trim_start().len();
    trimmed
        .split(' ')
        .map(|word| {
            let item = (offset, word);
            offset += word.len() + 1;
            item
        })
        .collect()
}

fn words_first<'f, 'a>(
    fragment: &'f LineFragment<'a>,
) -> Option<(&'f LineFragment<'a>, usize, &'a str)> {
    words(fragment.text())
        .first()
        .map(|&(offset, word)| (fragment, offset, word))
}

/// Word ends in "ed" once everything but letters, digits and `.` is removed.
fn is_past_participle(word: &str) -> bool {
    let cleaned: String = word
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '.')
        .collect();
    cleaned.ends_with("ed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::TextLine;
    use crate::position::Position;

    fn sentence<'a>(lines: &[&'a str]) -> Sentence<'a> {
        Sentence::new(
            lines
                .iter()
                .enumerate()
                .map(|(i, text)| LineFragment::from_line(TextLine::new(i as u32, text)))
                .collect(),
        )
        .unwrap()
    }

    fn detect(lines: &[&str]) -> Vec<Diagnostic> {
        PassiveVoiceDetector::new(&WordLists::default()).detect(&sentence(lines))
    }

    #[test]
    fn no_passive_language() {
        assert!(detect(&["This is a simple sentence"]).is_empty());
    }

    #[test]
    fn one_passive_construction() {
        let diagnostics = detect(&["This sentence should be marked for passive language."]);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].range.start, Position::new(0, 21));
        assert_eq!(diagnostics[0].range.end, Position::new(0, 30));
        assert_eq!(diagnostics[0].message, PASSIVE_VOICE_MESSAGE);
        assert_eq!(diagnostics[0].rule, Rule::PassiveVoice);
    }

    #[test]
    fn passive_construction_across_lines() {
        let diagnostics = detect(&["This sentence should be ", "marked for passive language."]);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].range.start, Position::new(0, 21));
        assert_eq!(diagnostics[0].range.end, Position::new(1, 6));
        assert!(!diagnostics[0].range.is_single_line());
    }

    #[test]
    fn two_passive_constructions() {
        let diagnostics = detect(&[
            "This sentence should be marked for passive language.",
            "This sentence also should be marked for passive language.",
        ]);
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].range.start, Position::new(0, 21));
        assert_eq!(diagnostics[1].range.start, Position::new(1, 26));
    }

    #[test]
    fn last_word_of_sentence_is_never_a_precursor() {
        assert!(detect(&["The thing it was"]).is_empty());
    }

    #[test]
    fn irregular_participles_are_not_reported() {
        assert!(detect(&["The report was written by the team."]).is_empty());
    }

    #[test]
    fn participle_followed_by_period_is_not_matched() {
        assert!(detect(&["In the end the bug was fixed."]).is_empty());
        assert_eq!(detect(&["The bug was fixed, finally."]).len(), 1);
    }

    #[test]
    fn indented_fragment_keeps_offsets() {
        let diagnostics = detect(&["  It was painted red."]);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].range, Range::on_line(0, 5, 16));
    }

    #[test]
    fn next_fragment_leading_space_is_skipped() {
        let diagnostics = detect(&["The door was", "  opened slowly."]);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].range.start, Position::new(0, 9));
        assert_eq!(diagnostics[0].range.end, Position::new(1, 8));
    }

    #[test]
    fn precursors_match_whole_tokens_only() {
        assert!(detect(&["This mislabeled thing stays."]).is_empty());
        assert!(detect(&["Was marked is not flagged because case differs."]).is_empty());
    }

    #[test]
    fn custom_precursors() {
        let lists = WordLists::new(Vec::new(), Vec::<String>::new(), Vec::<String>::new(), ["got"]);
        let detector = PassiveVoiceDetector::new(&lists);
        let diagnostics = detector.detect(&sentence(&["He got fired yesterday."]));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].range, Range::on_line(0, 3, 12));
        assert!(detector.detect(&sentence(&["It was painted red."])).is_empty());
    }

    #[test]
    fn words_track_offsets() {
        assert_eq!(words("  a bc  d "), vec![(2, "a"), (4, "bc"), (7, ""), (8, "d")]);
        assert!(words("   ").is_empty());
    }
}
