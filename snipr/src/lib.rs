//! # snipr - Snippet Clipboard System for Catalog Browsers
//!
//! A clipboard layer for text snippets (usage blocks, install commands)
//! with bounded copy history, rich item metadata, and a pluggable sink
//! for the actual system clipboard.
//!
//! ## Key Features
//! - Bounded, deduplicated history of copied snippets
//! - Pluggable `ClipboardSink` boundary (the host supplies the OS write)
//! - Configurable limits and expiration
//! - Comprehensive error handling

pub mod clipboard;
pub mod config;
pub mod error;
pub mod item;

// Re-export main types for easy use
pub use clipboard::{Clipboard, ClipboardSink, ClipboardStats, NullSink};
pub use config::ClipboardConfig;
pub use error::{ClipError, ClipResult};
pub use item::ClipboardItem;
