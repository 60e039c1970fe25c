//! Error handling for clipboard operations

use compact_str::CompactString;
use thiserror::Error;

pub type ClipResult<T> = Result<T, ClipError>;

/// Error types for snippet clipboard operations
#[derive(Error, Debug, Clone)]
pub enum ClipError {
    #[error("Clipboard item not found: {0}")]
    ItemNotFound(u64),

    #[error("Refusing to copy an empty snippet")]
    EmptySnippet,

    #[error("Clipboard history is full (max {max} items)")]
    HistoryFull { max: usize },

    #[error("Clipboard sink rejected write: {reason}")]
    Sink { reason: CompactString },

    #[error("Clipboard configuration error: {0}")]
    ConfigError(CompactString),
}

impl ClipError {
    /// Recovery check for callers that want to retry or degrade
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ClipError::ItemNotFound(_) | ClipError::HistoryFull { .. } | ClipError::Sink { .. }
        )
    }

    /// Create a sink error from any displayable failure
    #[inline]
    pub fn sink_error(reason: impl Into<CompactString>) -> Self {
        Self::Sink {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_errors_are_recoverable() {
        assert!(ClipError::sink_error("display server gone").is_recoverable());
        assert!(!ClipError::EmptySnippet.is_recoverable());
    }
}
