//! src/model/facets.rs
//! ============================================================================
//! # `FacetIndex`: Selectable Filter Vocabulary
//!
//! Derives the tag and provider vocabularies offered as multi-select filters.
//! Pure projection of the catalog; since the catalog is immutable this is
//! computed once per session.

use std::collections::BTreeSet;

use crate::model::catalog::Catalog;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetIndex {
    tags: Vec<String>,
    providers: Vec<String>,
}

impl FacetIndex {
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        // BTreeSet gives dedup and stable sorted order in one pass
        let tags: BTreeSet<String> = catalog
            .records()
            .iter()
            .flat_map(|record| record.tags.iter().map(|tag| tag.to_lowercase()))
            .collect();

        let providers: BTreeSet<String> = catalog
            .records()
            .iter()
            .map(|record| record.provider.clone())
            .collect();

        Self {
            tags: tags.into_iter().collect(),
            providers: providers.into_iter().collect(),
        }
    }

    /// Deduplicated, case-normalized tag vocabulary in sorted order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Deduplicated provider vocabulary in sorted order.
    #[must_use]
    pub fn providers(&self) -> &[String] {
        &self.providers
    }
}
