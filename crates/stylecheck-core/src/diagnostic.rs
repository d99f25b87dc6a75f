//! Style diagnostics and the rules that produce them.

use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::position::Range;

/// Name shown as the origin of every diagnostic.
pub const DIAGNOSTIC_SOURCE: &str = "writing-style";

/// How prominently a host should surface a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Advisory note.
    Information,
    /// Something the writer should fix.
    Warning,
}

impl Severity {
    /// Lowercase name of the severity.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Information => "information",
            Self::Warning => "warning",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The style check a diagnostic comes from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Rule {
    /// Complex words and phrases with simpler replacements.
    ComplexWord,
    /// Adverbs.
    Adverb,
    /// Hedging qualifiers.
    Qualifier,
    /// Hard and very hard sentences.
    SentenceDifficulty,
    /// Passive voice.
    PassiveVoice,
}

impl Rule {
    /// Every rule, in the order the analyzer runs them.
    pub const ALL: [Self; 5] = [
        Self::ComplexWord,
        Self::Adverb,
        Self::Qualifier,
        Self::SentenceDifficulty,
        Self::PassiveVoice,
    ];

    /// Kebab-case rule name, as used in configuration.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ComplexWord => "complex-word",
            Self::Adverb => "adverb",
            Self::Qualifier => "qualifier",
            Self::SentenceDifficulty => "sentence-difficulty",
            Self::PassiveVoice => "passive-voice",
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rule {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rule| rule.as_str() == s)
            .ok_or_else(|| AnalysisError::UnknownRule {
                name: s.to_string(),
                available: Self::ALL
                    .iter()
                    .map(Rule::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// A single style finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Diagnostic {
    /// Where the finding applies.
    pub range: Range,
    /// Human-readable advice.
    pub message: String,
    /// How prominently to show it.
    pub severity: Severity,
    /// The rule that produced it.
    pub rule: Rule,
    /// Always [`DIAGNOSTIC_SOURCE`].
    pub source: String,
}

impl Diagnostic {
    /// Create a diagnostic.
    pub fn new(range: Range, message: impl Into<String>, severity: Severity, rule: Rule) -> Self {
        Self {
            range,
            message: message.into(),
            severity,
            rule,
            source: DIAGNOSTIC_SOURCE.to_string(),
        }
    }

    /// Create an [`Severity::Information`] diagnostic.
    pub fn information(range: Range, message: impl Into<String>, rule: Rule) -> Self {
        Self::new(range, message, Severity::Information, rule)
    }
}
