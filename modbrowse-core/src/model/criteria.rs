//! src/model/criteria.rs
//! ============================================================================
//! # Criteria: Active Filter and Sort Choices
//!
//! Ephemeral per-session state mutated by user actions. Facet selections are
//! plain sets with toggle/clear operations; the sort key is a closed enum so
//! the engine never sees an unrecognized value (unknown strings are rejected
//! at the parse seam instead).

use std::collections::BTreeSet;
use std::str::FromStr;

use crate::error::AppError;

/// Result ordering applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Most starred first.
    #[default]
    Stars,

    /// Most recently released first.
    Recent,

    /// Name, A-Z.
    Name,
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s: &'_ str = match self {
            Self::Stars => "stars",
            Self::Recent => "recent",
            Self::Name => "name",
        };

        write!(f, "{s}")
    }
}

impl FromStr for SortKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stars" => Ok(Self::Stars),
            "recent" => Ok(Self::Recent),
            "name" => Ok(Self::Name),
            other => Err(AppError::invalid_input(
                "sort",
                format!("unknown sort key '{other}'"),
            )),
        }
    }
}

/// The active filter/sort choices for one browsing session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    /// Case-insensitive substring filter over name, namespace, description.
    pub text_filter: String,

    /// Selected tag facets (lowercased vocabulary). Empty = no restriction.
    pub tags: BTreeSet<String>,

    /// Selected provider facets. Empty = no restriction.
    pub providers: BTreeSet<String>,

    pub sort: SortKey,
}

impl Criteria {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text_filter = text.into();
    }

    /// Toggle a tag's membership; returns the new membership state.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        let tag: String = tag.to_lowercase();
        if self.tags.remove(&tag) {
            false
        } else {
            self.tags.insert(tag);
            true
        }
    }

    /// Toggle a provider's membership; returns the new membership state.
    pub fn toggle_provider(&mut self, provider: &str) -> bool {
        if self.providers.remove(provider) {
            false
        } else {
            self.providers.insert(provider.to_string());
            true
        }
    }

    /// Clear both facet selections. The text filter and sort key keep their
    /// values, matching the sidebar "Clear" affordance.
    pub fn clear_filters(&mut self) {
        self.tags.clear();
        self.providers.clear();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// True when no filter restricts the result set.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.text_filter.is_empty() && self.tags.is_empty() && self.providers.is_empty()
    }

    /// True when at least one facet is selected (drives the "Clear" button).
    #[must_use]
    pub fn has_facet_selection(&self) -> bool {
        !self.tags.is_empty() || !self.providers.is_empty()
    }
}
