//! src/model/catalog.rs
//! ============================================================================
//! # Catalog: Immutable Module Record Collection
//!
//! The catalog is loaded once per browsing session and never mutated; every
//! derived view (facet vocabulary, query results) is recomputed from it.
//! Records use the registry's JSON shape (`camelCase`, `fullName`).

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// One released version of a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleVersion {
    pub version: String,

    /// ISO-like release date (`YYYY-MM-DD`). Kept as a string at rest and
    /// only parsed by the recency sort.
    pub date: String,
}

/// A single module record as supplied by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleRecord {
    /// Unique, stable identifier.
    pub id: u64,

    pub namespace: String,

    pub name: String,

    /// Display-consistent `namespace/name/provider` path; not re-derived at
    /// query time.
    pub full_name: String,

    pub description: String,

    pub tags: Vec<String>,

    pub stars: u64,

    /// Current (headline) version.
    pub version: String,

    pub provider: String,

    /// Release history; never empty, entry 0 is treated as most recent.
    pub versions: Vec<ModuleVersion>,
}

impl ModuleRecord {
    /// Two-character namespace badge shown on cards and in the detail view.
    #[must_use]
    pub fn initials(&self) -> String {
        self.namespace.chars().take(2).collect::<String>().to_uppercase()
    }

    /// The entry the recency sort keys on.
    #[must_use]
    pub fn latest_version(&self) -> Option<&ModuleVersion> {
        self.versions.first()
    }
}

/// Immutable in-memory catalog for one browsing session.
///
/// Records are wrapped in `Arc` so result sets and the selection share them
/// instead of cloning.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<Arc<ModuleRecord>>,
}

impl Catalog {
    #[must_use]
    pub fn from_records(records: Vec<ModuleRecord>) -> Self {
        Self {
            records: records.into_iter().map(Arc::new).collect(),
        }
    }

    /// Parse a catalog from registry JSON.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, AppError> {
        let records: Vec<ModuleRecord> = serde_json::from_slice(bytes)?;
        Ok(Self::from_records(records))
    }

    /// The embedded demo dataset.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
            Catalog::from_json_slice(include_bytes!("../../data/modules.json"))
                .expect("embedded catalog is valid JSON")
        });
        &BUILTIN
    }

    #[must_use]
    pub fn records(&self) -> &[Arc<ModuleRecord>] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Arc<ModuleRecord>> {
        self.records.iter().find(|record| record.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
