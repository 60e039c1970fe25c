//! src/controller/actions.rs
//! ============================================================================
//! # Actions: Centralized Browsing Commands
//!
//! Defines the `Action` enum, which represents all user inputs and internal
//! events the browser responds to. The host maps its own input events (DOM,
//! terminal keys, whatever) onto these; the event loop is the single place
//! that applies them.

use crate::model::criteria::SortKey;

/// Represents a high-level action that the browser can perform.
#[derive(Debug, Clone)]
pub enum Action {
    /// Clear both facet selections.
    ClearFilters,

    /// A spawned clipboard write finished; outcome folds into the
    /// selection state.
    CopyFinished {
        generation: u64,
        outcome: Result<u64, snipr::ClipError>,
    },

    /// Copy the selected module's usage snippet to the clipboard.
    CopySnippet,

    /// Close the detail view.
    Dismiss,

    /// Reveal one more page of results.
    LoadMore,

    /// No operation. Used when an event is consumed but no state change is
    /// needed.
    NoOp,

    /// Stop the event loop and hand the final state back.
    Quit,

    /// Open the module with this catalog id in the detail view.
    Select(u64),

    /// Change the result ordering.
    SetSort(SortKey),

    /// Replace the free-text filter.
    SetTextFilter(String),

    /// An internal tick event for periodic updates.
    Tick,

    /// Toggle a provider facet.
    ToggleProvider(String),

    /// Toggle a tag facet.
    ToggleTag(String),
}
