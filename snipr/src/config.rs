use crate::error::{ClipError, ClipResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClipboardConfig {
    /// Maximum number of items kept in the copy history
    pub max_items: usize,

    /// Collapse repeated copies of identical text into the newest entry
    pub dedup_identical: bool,

    /// Auto-expire history items after duration (None = never expire)
    #[serde(default, with = "humantime_serde")]
    pub item_expiry: Option<Duration>,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            max_items: 50,
            dedup_identical: true,
            item_expiry: Some(Duration::from_secs(3600)), // 1 hour
        }
    }
}

impl ClipboardConfig {
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> ClipResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ClipError::ConfigError(format!("failed to read config file: {e}").into()))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ClipError::ConfigError(format!("failed to parse config: {e}").into()))?;

        Ok(config)
    }

    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> ClipResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ClipError::ConfigError(format!("failed to serialize config: {e}").into()))?;

        std::fs::write(path.as_ref(), content)
            .map_err(|e| ClipError::ConfigError(format!("failed to write config file: {e}").into()))?;

        Ok(())
    }
}
