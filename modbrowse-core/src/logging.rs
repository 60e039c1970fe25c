//! src/logging.rs
//! ============================================================================
//! # Logging: tracing subscriber initialization
//!
//! Sets up the global `tracing` subscriber: an `EnvFilter` seeded from config
//! (overridable via `RUST_LOG`), a compact fmt layer on stderr, and an
//! optional daily-rolling file layer via `tracing-appender`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Directory for log files; None disables file logging entirely
    pub log_dir: Option<PathBuf>,

    pub log_file_prefix: CompactString,

    /// Default filter directive when `RUST_LOG` is unset
    pub log_level: CompactString,

    pub rotation: LogRotation,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LogRotation {
    Never,
    Daily,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_dir: None,
            log_file_prefix: CompactString::const_new("modbrowse"),
            log_level: CompactString::const_new("info"),
            rotation: LogRotation::Daily,
        }
    }
}

/// Install the global subscriber.
///
/// Returns the appender guard when file logging is enabled; the caller must
/// hold it for the lifetime of the process or buffered lines are lost.
pub fn init_logging(config: &LoggerConfig) -> Result<Option<WorkerGuard>> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(config.log_level.as_str())
            .context("invalid log filter directive")?,
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    match &config.log_dir {
        Some(dir) => {
            let rotation = match config.rotation {
                LogRotation::Never => Rotation::NEVER,
                LogRotation::Daily => Rotation::DAILY,
            };
            let appender =
                RollingFileAppender::new(rotation, dir, config.log_file_prefix.as_str());
            let (writer, guard) = tracing_appender::non_blocking(appender);

            let file_layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .with(file_layer)
                .try_init()
                .context("logging already initialized")?;

            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()
                .context("logging already initialized")?;

            Ok(None)
        }
    }
}
