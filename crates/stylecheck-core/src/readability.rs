//! Sentence difficulty scoring.
//!
//! Formula: `4.71 * (letters/words) + 0.5 * words - 21.43`, rounded and
//! floored at zero. This is the Automated Readability Index shape with the
//! words-per-sentence term taken over a single sentence, so the score grows
//! with both word length and sentence length.
//!
//! Scores above [`HARD_SENTENCE_SCORE`] are reported as hard, and scores above
//! [`VERY_HARD_SENTENCE_SCORE`] as very hard.

use crate::diagnostic::{Diagnostic, Rule, Severity};
use crate::segment::Sentence;

/// Highest score that produces no diagnostic.
pub const HARD_SENTENCE_SCORE: u32 = 10;

/// Highest score reported as "hard" rather than "very hard".
pub const VERY_HARD_SENTENCE_SCORE: u32 = 14;

/// Message for sentences scoring in `(10, 14]`.
pub const HARD_SENTENCE_MESSAGE: &str = "Hard sentence. Shorten or split it.";

/// Message for sentences scoring above 14.
pub const VERY_HARD_SENTENCE_MESSAGE: &str = "Very hard sentence. Shorten or split it.";

/// Score the difficulty of a sentence.
pub fn score(sentence: &Sentence<'_>) -> u32 {
    score_text(&sentence.text())
}

/// Score raw sentence text. [`score`] joins fragments and calls this.
pub fn score_text(text: &str) -> u32 {
    let mut cleaned: String = text
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '.' || *c == ' ')
        .collect();
    cleaned.push('.');

    let words = cleaned.split(' ').count();
    let letters = cleaned.chars().filter(|c| *c != ' ').count();
    if words == 0 || letters == 0 {
        return 0;
    }

    let words = words as f64;
    let letters = letters as f64;
    let raw = 4.71f64.mul_add(letters / words, 0.5 * words) - 21.43;
    raw.round().max(0.0) as u32
}

/// The difficulty diagnostic for `sentence`, if it is hard to read.
pub fn difficulty(sentence: &Sentence<'_>) -> Option<Diagnostic> {
    let score = score(sentence);
    let (message, severity) = match score {
        s if s <= HARD_SENTENCE_SCORE => return None,
        s if s <= VERY_HARD_SENTENCE_SCORE => (HARD_SENTENCE_MESSAGE, Severity::Information),
        _ => (VERY_HARD_SENTENCE_MESSAGE, Severity::Warning),
    };
    tracing::trace!(score, range = ?sentence.range(), "hard sentence");
    Some(Diagnostic::new(
        sentence.range(),
        message,
        severity,
        Rule::SentenceDifficulty,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::TextLine;
    use crate::fragment::LineFragment;
    use crate::position::{Position, Range};

    const SIMPLE_SENTENCE: &str = "This is a simple sentence";
    const HARD_SENTENCE: &str = "The extension highlights lengthy, complex sentences and common \
        errors; if you see a hard sentence, shorten or split it.";
    const VERY_HARD_SENTENCE: &str = "If you see a very hard highlight, your sentence is so \
        dense and complicated that your readers will get lost trying to follow its meandering, \
        splitting logic \u{2014} try editing this sentence to remove the highlight.";

    fn sentence(text: &str) -> Sentence<'_> {
        Sentence::from(LineFragment::from_line(TextLine::new(0, text)))
    }

    #[test]
    fn empty_sentence_scores_zero() {
        assert_eq!(score(&sentence("")), 0);
        assert_eq!(score_text(""), 0);
    }

    #[test]
    fn simple_sentence_scores_below_ten() {
        assert!(score(&sentence(SIMPLE_SENTENCE)) < 10);
    }

    #[test]
    fn hard_sentence_scores_between_ten_and_fourteen() {
        let score = score(&sentence(HARD_SENTENCE));
        assert!(10 < score, "score {score}");
        assert!(score <= 14, "score {score}");
    }

    #[test]
    fn very_hard_sentence_scores_above_fourteen() {
        let score = score(&sentence(VERY_HARD_SENTENCE));
        assert!(14 < score, "score {score}");
    }

    #[test]
    fn exact_scores_are_stable() {
        assert_eq!(score_text(SIMPLE_SENTENCE), 2);
        assert_eq!(score_text(HARD_SENTENCE), 13);
        assert_eq!(score_text(VERY_HARD_SENTENCE), 19);
        assert_eq!(score_text("This is a complete sentence."), 5);
    }

    #[test]
    fn fragments_are_joined_with_a_space() {
        let lines = [
            "The extension highlights lengthy, complex sentences and",
            "common errors; if you see a hard sentence, shorten or split it.",
        ];
        let two_lines = Sentence::new(
            lines
                .iter()
                .enumerate()
                .map(|(i, text)| LineFragment::from_line(TextLine::new(i as u32, text)))
                .collect(),
        )
        .unwrap();
        assert_eq!(score(&two_lines), score_text(HARD_SENTENCE));
    }

    #[test]
    fn multi_line_diagnostic_spans_every_fragment() {
        let lines = [
            "The extension highlights lengthy, complex sentences and",
            "common errors; if you see a hard sentence, shorten or split it.",
        ];
        let two_lines = Sentence::new(
            lines
                .iter()
                .enumerate()
                .map(|(i, text)| LineFragment::from_line(TextLine::new(i as u32, text)))
                .collect(),
        )
        .unwrap();
        let diag = difficulty(&two_lines).unwrap();
        assert_eq!(
            diag.range,
            Range::new(Position::new(0, 0), Position::new(1, lines[1].len() as u32))
        );
    }

    #[test]
    fn simple_sentence_has_no_diagnostic() {
        assert!(difficulty(&sentence(SIMPLE_SENTENCE)).is_none());
    }

    #[test]
    fn hard_sentence_is_information() {
        let diag = difficulty(&sentence(HARD_SENTENCE)).unwrap();
        assert_eq!(diag.severity, Severity::Information);
        assert_eq!(diag.message, HARD_SENTENCE_MESSAGE);
        assert_eq!(diag.rule, Rule::SentenceDifficulty);
    }

    #[test]
    fn very_hard_sentence_is_warning() {
        let diag = difficulty(&sentence(VERY_HARD_SENTENCE)).unwrap();
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(diag.message, VERY_HARD_SENTENCE_MESSAGE);
        assert_eq!(diag.range.start, Position::new(0, 0));
    }
}
