//! Error types for stylecheck-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while preparing an analysis.
///
/// Analyzing text never fails; these only come from building the engine.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// A word list could not be compiled into a matcher.
    #[error("failed to compile word list: {0}")]
    Matcher(#[from] aho_corasick::BuildError),

    /// An unknown rule name was provided.
    #[error("unknown rule: {name}. Use: {available}")]
    UnknownRule {
        /// The rule name that was requested.
        name: String,
        /// Comma-separated list of available rule names.
        available: String,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
