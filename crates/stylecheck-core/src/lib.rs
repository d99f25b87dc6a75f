//! Core library for stylecheck.
//!
//! Annotates prose with writing-style diagnostics: complex words, adverbs,
//! qualifiers, hard sentences and passive voice. The engine is synchronous
//! and holds no mutable state; every [`Analyzer::analyze`] call recomputes
//! the full result set for a document snapshot.
//!
//! # Modules
//!
//! - [`document`] - The line-oriented document snapshot the engine reads
//! - [`segment`] - Sentence segmentation across lines and code fences
//! - [`scanner`] - Per-line complex word, adverb and qualifier matching
//! - [`readability`] - Sentence difficulty scoring
//! - [`passive_voice`] - Passive construction detection
//! - [`analyzer`] - Assembles all diagnostics for a document
//! - [`config`] - Configuration loading and management
//!
//! # Quick Start
//!
//! ```
//! use stylecheck_core::{Analyzer, TextDocument, WordLists};
//!
//! let analyzer = Analyzer::new(&WordLists::default()).unwrap();
//! let doc = TextDocument::new("This sentence should be marked for passive language.");
//! let diagnostics = analyzer.analyze(&doc);
//!
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].message, "Passive voice. Use active voice.");
//! ```
#![deny(unsafe_code)]

pub mod analyzer;
pub mod collection;
pub mod config;
pub mod diagnostic;
pub mod document;
pub mod error;
pub mod fragment;
pub mod passive_voice;
pub mod position;
pub mod readability;
pub mod scanner;
pub mod segment;
pub mod word_lists;

pub use analyzer::{Analyzer, RuleSet, analyze};
pub use collection::{DiagnosticCollection, DiagnosticSink};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use diagnostic::{DIAGNOSTIC_SOURCE, Diagnostic, Rule, Severity};
pub use document::{Document, TextDocument, TextLine};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use fragment::LineFragment;
pub use position::{Position, Range};
pub use segment::{Segmenter, Sentence};
pub use word_lists::{ComplexWord, WordListConfig, WordLists};

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
