use crate::config::ClipboardConfig;
use crate::error::{ClipError, ClipResult};
use crate::item::ClipboardItem;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;

/// Boundary to the actual system clipboard.
///
/// The host application supplies the implementation wired to its display
/// server or terminal; this crate only tracks history around the write.
#[async_trait]
pub trait ClipboardSink: Send + Sync {
    async fn write_text(&self, text: &str) -> ClipResult<()>;
}

/// Sink that accepts every write and discards it. Default for headless
/// embedding and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

#[async_trait]
impl ClipboardSink for NullSink {
    async fn write_text(&self, _text: &str) -> ClipResult<()> {
        Ok(())
    }
}

#[derive(Clone)]
pub struct Clipboard {
    items: Vec<ClipboardItem>,
    sink: Arc<dyn ClipboardSink>,
    config: ClipboardConfig,
    next_id: u64,
    created_at: Instant,
}

impl std::fmt::Debug for Clipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clipboard")
            .field("items", &self.items.len())
            .field("config", &self.config)
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}

impl Clipboard {
    pub fn new(config: ClipboardConfig, sink: Arc<dyn ClipboardSink>) -> Self {
        Self {
            items: Vec::new(),
            sink,
            config,
            next_id: 1,
            created_at: Instant::now(),
        }
    }

    /// Write a snippet through the sink and record it in the history.
    ///
    /// The history entry is only recorded after the sink accepted the write,
    /// so the history never claims a copy that never reached the system.
    pub async fn copy(
        &mut self,
        label: impl Into<compact_str::CompactString>,
        text: impl Into<String>,
    ) -> ClipResult<u64> {
        let text: String = text.into();
        if text.is_empty() {
            return Err(ClipError::EmptySnippet);
        }

        self.sink.write_text(&text).await?;

        let id: u64 = self.next_id;
        self.next_id += 1;

        let item = ClipboardItem::new(id, label, text);
        self.insert_item(item);

        Ok(id)
    }

    /// Remove item from the history
    pub fn remove_item(&mut self, id: u64) -> ClipResult<ClipboardItem> {
        let pos: usize = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(ClipError::ItemNotFound(id))?;

        Ok(self.items.remove(pos))
    }

    /// Get item by id
    pub fn get_item(&self, id: u64) -> Option<&ClipboardItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// All history items, newest first
    pub fn items(&self) -> impl Iterator<Item = &ClipboardItem> {
        self.items.iter().rev()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Clear all history items
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Drop entries older than the configured expiry, if one is set
    pub fn evict_expired(&mut self) -> usize {
        let Some(max_age) = self.config.item_expiry else {
            return 0;
        };

        let before: usize = self.items.len();
        self.items.retain(|item| !item.is_expired(max_age));
        before - self.items.len()
    }

    /// Get clipboard statistics
    pub fn stats(&self) -> ClipboardStats {
        ClipboardStats::new(&self.items, self.created_at)
    }

    fn insert_item(&mut self, item: ClipboardItem) {
        // Identical text collapses into the newest entry
        if self.config.dedup_identical {
            self.items.retain(|existing| existing.text != item.text);
        }

        // Enforce item limit
        while self.items.len() >= self.config.max_items {
            self.items.remove(0);
        }

        self.items.push(item);
    }
}

impl Default for Clipboard {
    fn default() -> Self {
        Self::new(ClipboardConfig::default(), Arc::new(NullSink))
    }
}

#[derive(Debug, Clone)]
pub struct ClipboardStats {
    pub total_items: usize,
    pub total_bytes: usize,
    pub created_at: Instant,
}

impl ClipboardStats {
    fn new(items: &[ClipboardItem], created_at: Instant) -> Self {
        Self {
            total_items: items.len(),
            total_bytes: items.iter().map(ClipboardItem::len).sum(),
            created_at,
        }
    }
}
