//! src/query.rs
//! ============================================================================
//! # Query Engine: Pure Criteria Evaluation
//!
//! `evaluate` maps (catalog, criteria) to the full ordered result set. The
//! three filters are AND-combined; each active filter is an OR over its own
//! alternatives. Sorting is stable, so modules with equal keys keep the
//! catalog's relative order. The function is total: it never panics, never
//! errors, and identical inputs always produce identical output.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::model::catalog::{Catalog, ModuleRecord};
use crate::model::criteria::{Criteria, SortKey};

/// Evaluate the criteria over the whole catalog and return the full ordered
/// result set. Pagination happens downstream on this value.
#[must_use]
pub fn evaluate(catalog: &Catalog, criteria: &Criteria) -> Vec<Arc<ModuleRecord>> {
    let needle: String = criteria.text_filter.to_lowercase();

    let mut results: Vec<Arc<ModuleRecord>> = catalog
        .records()
        .iter()
        .filter(|record| {
            matches_text(record, &needle)
                && matches_tags(record, &criteria.tags)
                && matches_provider(record, &criteria.providers)
        })
        .cloned()
        .collect();

    sort_results(&mut results, criteria.sort);
    results
}

fn matches_text(record: &ModuleRecord, needle: &str) -> bool {
    needle.is_empty()
        || record.name.to_lowercase().contains(needle)
        || record.namespace.to_lowercase().contains(needle)
        || record.description.to_lowercase().contains(needle)
}

fn matches_tags(record: &ModuleRecord, selected: &BTreeSet<String>) -> bool {
    selected.is_empty()
        || record
            .tags
            .iter()
            .any(|tag| selected.contains(&tag.to_lowercase()))
}

fn matches_provider(record: &ModuleRecord, selected: &BTreeSet<String>) -> bool {
    selected.is_empty() || selected.contains(&record.provider)
}

fn sort_results(results: &mut [Arc<ModuleRecord>], sort: SortKey) {
    match sort {
        SortKey::Stars => {
            results.sort_by(|a: &Arc<ModuleRecord>, b: &Arc<ModuleRecord>| -> Ordering {
                b.stars.cmp(&a.stars)
            });
        }

        SortKey::Recent => {
            // None (missing or malformed date) orders below every parsed
            // date, so those modules sink to the end of the list.
            results.sort_by(|a: &Arc<ModuleRecord>, b: &Arc<ModuleRecord>| -> Ordering {
                release_date(b).cmp(&release_date(a))
            });
        }

        SortKey::Name => {
            results.sort_by_cached_key(|record| record.name.to_lowercase());
        }
    }
}

/// Parsed release date of the entry the catalog marks most recent.
fn release_date(record: &ModuleRecord) -> Option<NaiveDate> {
    record
        .latest_version()
        .and_then(|v| NaiveDate::parse_from_str(&v.date, "%Y-%m-%d").ok())
}
