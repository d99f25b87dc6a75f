//! Logging setup for the CLI.
//!
//! Human-readable events go to stderr. When a log location is configured,
//! the same events are also written as JSON lines to a daily-rolling file
//! through a non-blocking writer.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Explicit log file path; its parent directory and file name are used.
pub const LOG_PATH_ENV: &str = "STYLECHECK_LOG_PATH";

/// Log directory; files are named [`DEFAULT_LOG_FILE`].
pub const LOG_DIR_ENV: &str = "STYLECHECK_LOG_DIR";

/// File name prefix used when only a directory is configured.
pub const DEFAULT_LOG_FILE: &str = "stylecheck.jsonl";

/// Where the JSONL log goes, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Directory of the rolling log file. `None` disables file logging.
    pub log_dir: Option<PathBuf>,
    /// File name prefix; the appender adds the date.
    pub log_file: String,
}

impl ObservabilityConfig {
    /// Resolve the log location from `STYLECHECK_LOG_PATH`, then
    /// `STYLECHECK_LOG_DIR`, then the configured `log_dir`.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            std::env::var_os(LOG_DIR_ENV).map(PathBuf::from),
            config_log_dir,
        )
    }

    fn resolve(
        log_path: Option<PathBuf>,
        env_log_dir: Option<PathBuf>,
        config_log_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = log_path
            && let Some(name) = path.file_name().and_then(|n| n.to_str())
        {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
            return Self {
                log_dir: Some(dir),
                log_file: name.to_string(),
            };
        }

        Self {
            log_dir: env_log_dir.or(config_log_dir),
            log_file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}

/// Build the event filter.
///
/// `RUST_LOG` wins when set. Otherwise `--quiet` limits output to errors,
/// each `-v` raises the level one step, and `config_level` is the baseline.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Install the global subscriber.
///
/// Hold the returned guard until exit; dropping it flushes the file writer.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let (file_layer, guard) = match config.log_dir {
        Some(ref dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, &config.log_file);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}
