//! Structured logging setup for the server bins.
//!
//! `RUST_LOG` takes precedence over the configured filter, so module-level
//! overrides work the usual way:
//!
//! ```bash
//! RUST_LOG=warn,covenant_guard::server=debug cargo run --bin covenant_server
//! ```

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Log output format.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable format with colors (default for development)
    #[default]
    Pretty,
    /// JSON format (best for log aggregation)
    Json,
    /// Compact single-line format
    Compact,
}

impl LogFormat {
    /// Parse a format name as given on the command line.
    pub fn parse(name: &str) -> Result<Self, String> {
        match name {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            "compact" => Ok(LogFormat::Compact),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

/// Logging configuration for the server bins.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogConfig {
    /// Default filter directives when `RUST_LOG` is unset
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Format for stdout logging
    #[serde(default)]
    pub format: LogFormat,

    /// Optional log file, written in addition to stdout
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            format: LogFormat::default(),
            log_file: None,
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// Returns the non-blocking writer guard when a log file is configured; the
/// caller must hold it for the lifetime of the process or buffered lines are
/// lost on exit.
pub fn init_logging(config: &LogConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let (file_layer, guard) = match &config.log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|d| !d.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .unwrap_or_else(|| OsStr::new("covenant_guard.log"));
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);

    match config.format {
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).init(),
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Compact => registry.with(fmt::layer().compact()).init(),
    }

    guard
}
