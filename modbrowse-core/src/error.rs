//! src/error.rs
//! ============================================================================
//! # `AppError`: Unified Error Type for the Catalog Browser
//!
//! Defines the error enum used across the crate. Each variant carries enough
//! context for diagnostics, and fallible modules are expected to use
//! `Result<T, AppError>` for consistency. The query engine itself is total
//! and never produces one of these.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Unified error type for all catalog browser operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Standard IO error, auto-converted from `io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Catalog JSON (de)serialization error.
    #[error("Catalog parse error: {0}")]
    Catalog(#[from] serde_json::Error),

    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// Config file I/O error with path.
    #[error("Failed to read config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Snippet clipboard error, auto-converted from the snipr crate.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] snipr::ClipError),

    /// Input validation errors at parse seams.
    #[error("Invalid input: {field} - {message}")]
    InvalidInput { field: String, message: String },

    /// Any other error, with description.
    #[error("Unexpected error: {0}")]
    Other(String),
}

impl AppError {
    #[must_use]
    /// Attach extra context to an error.
    pub fn with_context<S: Into<String>>(self, ctx: S) -> Self {
        Self::Other(format!("{}: {}", ctx.into(), self))
    }

    /// Create an input validation error
    pub fn invalid_input<S1: Into<String>, S2: Into<String>>(field: S1, message: S2) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

// Allow conversion from `anyhow::Error` as fallback.
impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        Self::Other(e.to_string())
    }
}
