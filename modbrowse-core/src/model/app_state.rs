//! src/model/app_state.rs
//! ============================================================================
//! # `BrowserState`: Session State for Catalog Browsing
//!
//! Owns the immutable catalog and every piece of derived, mutable session
//! state: criteria, the cached ordered result set, the reveal window, and the
//! detail-view selection. All mutation goes through the methods here, and
//! every criteria change recomputes the full result set and resets the
//! window before returning, so a renderer never observes a stale ordering.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use snipr::{Clipboard, ClipboardSink, NullSink};

use crate::config::Config;
use crate::model::catalog::{Catalog, ModuleRecord};
use crate::model::criteria::{Criteria, SortKey};
use crate::model::facets::FacetIndex;
use crate::model::pagination::RevealWindow;
use crate::model::selection::SelectionState;
use crate::query;

/// Everything the event loop needs to perform one clipboard write.
#[derive(Debug, Clone)]
pub struct CopyRequest {
    pub generation: u64,
    pub label: String,
    pub text: String,
}

#[derive(Debug)]
pub struct BrowserState {
    pub catalog: Catalog,
    pub facets: FacetIndex,
    pub criteria: Criteria,

    /// Full ordered result set for the current criteria.
    pub results: Vec<Arc<ModuleRecord>>,

    pub window: RevealWindow,
    pub selection: SelectionState,

    /// Shared with spawned copy tasks.
    pub clipboard: Arc<Mutex<Clipboard>>,
}

impl BrowserState {
    /// State with default configuration and a discarding clipboard sink.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(catalog, &Config::default(), Arc::new(NullSink))
    }

    #[must_use]
    pub fn with_config(catalog: Catalog, config: &Config, sink: Arc<dyn ClipboardSink>) -> Self {
        let facets = FacetIndex::new(&catalog);
        let criteria = Criteria::new();
        let results = query::evaluate(&catalog, &criteria);
        let window = RevealWindow::with_page_size(config.browse.page_size, results.len());

        info!(
            modules = catalog.len(),
            tags = facets.tags().len(),
            providers = facets.providers().len(),
            "Catalog session started"
        );

        Self {
            catalog,
            facets,
            criteria,
            results,
            window,
            selection: SelectionState::with_ttl(config.browse.copy_confirm_ttl),
            clipboard: Arc::new(Mutex::new(Clipboard::new(config.clipboard.clone(), sink))),
        }
    }

    /// Recompute the full result set and reset the reveal window. Called
    /// after every criteria mutation.
    fn refresh_results(&mut self) {
        self.results = query::evaluate(&self.catalog, &self.criteria);
        self.window.rebind(self.results.len());

        debug!(
            matches = self.results.len(),
            revealed = self.window.revealed(),
            sort = %self.criteria.sort,
            "Results recomputed"
        );
    }

    /// Currently revealed prefix of the result set.
    #[must_use]
    pub fn visible(&self) -> &[Arc<ModuleRecord>] {
        &self.results[..self.window.revealed()]
    }

    /// `(shown, total)` for the "Showing X of Y" line. A `(0, 0)` summary is
    /// the renderer's cue for the distinguishable "no results" state.
    #[must_use]
    pub fn summary(&self) -> (usize, usize) {
        self.window.summary()
    }

    // ------------------------------------------------------------------
    // Criteria mutations; each one triggers a full recompute
    // ------------------------------------------------------------------

    pub fn set_text_filter(&mut self, text: impl Into<String>) {
        self.criteria.set_text(text);
        self.refresh_results();
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        let selected: bool = self.criteria.toggle_tag(tag);
        debug!(tag, selected, "Tag facet toggled");
        self.refresh_results();
    }

    pub fn toggle_provider(&mut self, provider: &str) {
        let selected: bool = self.criteria.toggle_provider(provider);
        debug!(provider, selected, "Provider facet toggled");
        self.refresh_results();
    }

    pub fn clear_filters(&mut self) {
        self.criteria.clear_filters();
        self.refresh_results();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.criteria.set_sort(sort);
        self.refresh_results();
    }

    // ------------------------------------------------------------------
    // Window and selection
    // ------------------------------------------------------------------

    /// Reveal one more page of the existing result set; no re-query.
    pub fn load_more(&mut self) {
        self.window.advance();
    }

    /// Open a module in the detail view by catalog id.
    pub fn select(&mut self, id: u64) {
        match self.catalog.get(id) {
            Some(record) => self.selection.select(Arc::clone(record)),
            None => debug!(id, "Ignoring selection of unknown module id"),
        }
    }

    pub fn dismiss(&mut self) {
        self.selection.dismiss();
    }

    // ------------------------------------------------------------------
    // Clipboard copy plumbing
    // ------------------------------------------------------------------

    /// Stage a copy of the selected module's snippet. Returns what the
    /// event loop needs to run the write; None when nothing is selected.
    pub fn begin_copy_request(&mut self) -> Option<CopyRequest> {
        let record = Arc::clone(self.selection.selected()?);
        let text: String = crate::model::selection::usage_snippet(&record);
        let generation: u64 = self.selection.begin_copy();

        Some(CopyRequest {
            generation,
            label: record.full_name.clone(),
            text,
        })
    }

    /// Fold a finished copy back into the selection state. Failures are
    /// logged and recorded, never surfaced.
    pub fn handle_copy_outcome(
        &mut self,
        generation: u64,
        outcome: Result<u64, snipr::ClipError>,
    ) {
        match outcome {
            Ok(item_id) => {
                if self.selection.confirm_copy(generation) {
                    info!(item_id, "Snippet copied to clipboard");
                }
            }
            Err(err) => {
                warn!(error = %err, "Clipboard write failed");
                self.selection.record_copy_failure(generation, err.to_string());
            }
        }
    }

    /// Periodic maintenance: revert an expired copy confirmation.
    pub fn tick(&mut self) {
        if self.selection.update() {
            debug!("Copy confirmation reverted");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn state() -> BrowserState {
        BrowserState::new(Catalog::builtin().clone())
    }

    #[test]
    fn test_session_starts_with_full_catalog_by_stars() {
        let state = state();
        assert_eq!(state.results.len(), 8);
        assert_eq!(state.summary(), (6, 8));
        assert_eq!(state.visible().len(), 6);
        assert_eq!(state.visible()[0].name, "eks");
    }

    #[test]
    fn test_criteria_change_resets_window() {
        let mut state = state();
        state.load_more();
        assert_eq!(state.summary(), (8, 8));

        state.toggle_tag("aws");
        assert_eq!(state.results.len(), 5);
        assert_eq!(state.summary(), (5, 5));

        state.clear_filters();
        assert_eq!(state.summary(), (6, 8));
    }

    #[test]
    fn test_sort_change_also_resets_window() {
        let mut state = state();
        state.load_more();

        state.set_sort(SortKey::Name);
        assert_eq!(state.summary(), (6, 8));
        assert_eq!(state.visible()[0].name, "aks");
    }

    #[test]
    fn test_load_more_does_not_requery() {
        let mut state = state();
        let before = state.results.clone();
        state.load_more();
        assert_eq!(state.results, before);
        assert_eq!(state.visible().len(), 8);
    }

    #[test]
    fn test_no_results_summary_is_distinguishable() {
        let mut state = state();
        state.set_text_filter("nothing-matches-this");
        assert!(state.results.is_empty());
        assert_eq!(state.summary(), (0, 0));
        assert!(state.visible().is_empty());
    }

    #[test]
    fn test_selection_is_independent_of_query_state() {
        let mut state = state();
        state.select(1);
        assert_eq!(state.selection.selected().unwrap().name, "vpc");

        // Filtering vpc out of the results leaves the detail view open
        state.toggle_provider("google");
        assert!(state.results.iter().all(|m| m.name != "vpc"));
        assert_eq!(state.selection.selected().unwrap().name, "vpc");

        state.select(999);
        assert_eq!(state.selection.selected().unwrap().name, "vpc");

        state.dismiss();
        assert!(!state.selection.is_open());
    }

    #[test]
    fn test_copy_request_requires_selection() {
        let mut state = state();
        assert!(state.begin_copy_request().is_none());

        state.select(1);
        let request = state.begin_copy_request().unwrap();
        assert_eq!(request.label, "terraform-aws-modules/vpc/aws");
        assert!(request.text.starts_with("module \"vpc\" {"));
    }

    #[test]
    fn test_copy_outcome_success_and_failure() {
        let mut state = state();
        state.select(1);

        let request = state.begin_copy_request().unwrap();
        state.handle_copy_outcome(request.generation, Ok(1));
        assert!(state.selection.copy_confirmed());

        let request = state.begin_copy_request().unwrap();
        state.handle_copy_outcome(
            request.generation,
            Err(snipr::ClipError::sink_error("denied")),
        );
        assert!(state.selection.last_copy_error.is_some());
    }
}
