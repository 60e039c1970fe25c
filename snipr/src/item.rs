use compact_str::CompactString;
use std::time::Instant;

/// One entry in the copy history.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipboardItem {
    pub id: u64,
    pub label: CompactString,
    pub text: String,
    pub copied_at: Instant,
}

impl ClipboardItem {
    pub fn new(id: u64, label: impl Into<CompactString>, text: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            text: text.into(),
            copied_at: Instant::now(),
        }
    }

    /// Byte length of the copied text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// First line of the text, truncated for list display.
    pub fn preview(&self, max_chars: usize) -> CompactString {
        let first_line: &str = self.text.lines().next().unwrap_or("");
        if first_line.chars().count() <= max_chars {
            first_line.into()
        } else {
            let truncated: String = first_line.chars().take(max_chars).collect();
            format!("{truncated}…").into()
        }
    }

    pub fn is_expired(&self, max_age: std::time::Duration) -> bool {
        self.copied_at.elapsed() > max_age
    }
}
