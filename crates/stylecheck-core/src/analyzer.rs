//! Assembles the diagnostics of a whole document.
//!
//! A pass runs the lexical checks over every line (fenced code included),
//! then the sentence checks over every segmented sentence. The output order
//! is fixed: per line complex words, adverbs, qualifiers; then per sentence
//! its difficulty diagnostic followed by its passive constructions.

use std::collections::BTreeSet;

use crate::collection::DiagnosticSink;
use crate::config::Config;
use crate::diagnostic::{Diagnostic, Rule};
use crate::document::Document;
use crate::error::AnalysisResult;
use crate::fragment::LineFragment;
use crate::passive_voice::PassiveVoiceDetector;
use crate::readability;
use crate::scanner::LexicalScanner;
use crate::segment::{Segmenter, Sentence};
use crate::word_lists::WordLists;

/// The rules enabled for a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    enabled: BTreeSet<Rule>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::all()
    }
}

impl RuleSet {
    /// Every rule.
    pub fn all() -> Self {
        Rule::ALL.into_iter().collect()
    }

    /// `checks` (or every rule when `None`) minus `exclude`.
    pub fn select(checks: Option<&[Rule]>, exclude: &[Rule]) -> Self {
        let base = checks.unwrap_or(&Rule::ALL);
        base.iter()
            .copied()
            .filter(|rule| !exclude.contains(rule))
            .collect()
    }

    /// Whether `rule` runs.
    pub fn contains(&self, rule: Rule) -> bool {
        self.enabled.contains(&rule)
    }

    /// Enabled rules in analyzer order.
    pub fn iter(&self) -> impl Iterator<Item = Rule> + '_ {
        self.enabled.iter().copied()
    }

    /// Whether no rule runs.
    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty()
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            enabled: iter.into_iter().collect(),
        }
    }
}

/// Runs every enabled check over a document.
///
/// Holds only immutable state, so one analyzer can serve any number of
/// documents, concurrently if shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Analyzer {
    scanner: LexicalScanner,
    passive: PassiveVoiceDetector,
    segmenter: Segmenter,
    rules: RuleSet,
}

impl Analyzer {
    /// An analyzer running every rule against `lists`.
    pub fn new(lists: &WordLists) -> AnalysisResult<Self> {
        Ok(Self {
            scanner: LexicalScanner::new(lists)?,
            passive: PassiveVoiceDetector::new(lists),
            segmenter: Segmenter::new(),
            rules: RuleSet::all(),
        })
    }

    /// An analyzer set up from the loaded configuration.
    pub fn from_config(config: &Config) -> AnalysisResult<Self> {
        let lists = WordLists::from_config(&config.word_lists);
        let rules = RuleSet::select(
            config.checks.as_deref(),
            config.exclude.as_deref().unwrap_or_default(),
        );
        Ok(Self::new(&lists)?
            .with_rules(rules)
            .with_segmenter(Segmenter::new().keep_trailing(config.keep_trailing_sentence)))
    }

    /// Restrict the analyzer to `rules`.
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Replace the sentence segmenter.
    pub const fn with_segmenter(mut self, segmenter: Segmenter) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// The enabled rules.
    pub const fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// All diagnostics for `document`, in a deterministic order.
    #[tracing::instrument(skip_all, fields(lines = document.line_count()))]
    pub fn analyze<D: Document + ?Sized>(&self, document: &D) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for line in document.lines() {
            let line = LineFragment::from_line(line);
            if self.rules.contains(Rule::ComplexWord) {
                diagnostics.extend(self.scanner.complex_words(&line));
            }
            if self.rules.contains(Rule::Adverb) {
                diagnostics.extend(self.scanner.adverbs(&line));
            }
            if self.rules.contains(Rule::Qualifier) {
                diagnostics.extend(self.scanner.qualifiers(&line));
            }
        }

        let difficulty = self.rules.contains(Rule::SentenceDifficulty);
        let passive = self.rules.contains(Rule::PassiveVoice);
        if difficulty || passive {
            for sentence in self.sentences(document) {
                if difficulty {
                    diagnostics.extend(readability::difficulty(&sentence));
                }
                if passive {
                    diagnostics.extend(self.passive.detect(&sentence));
                }
            }
        }

        tracing::debug!(diagnostics = diagnostics.len(), "analysis complete");
        diagnostics
    }

    /// The sentences the analyzer sees in `document`.
    pub fn sentences<'a, D: Document + ?Sized>(&self, document: &'a D) -> Vec<Sentence<'a>> {
        self.segmenter.segment(document)
    }

    /// Analyze `document` and replace the diagnostics stored under `key`.
    pub fn refresh<D: Document + ?Sized>(
        &self,
        key: &str,
        document: &D,
        sink: &mut impl DiagnosticSink,
    ) {
        sink.set(key, self.analyze(document));
    }
}

/// Analyze `document` with the built-in word lists and every rule.
pub fn analyze<D: Document + ?Sized>(document: &D) -> AnalysisResult<Vec<Diagnostic>> {
    Ok(Analyzer::new(&WordLists::default())?.analyze(document))
}
