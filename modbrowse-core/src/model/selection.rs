//! src/model/selection.rs
//! ============================================================================
//! # `SelectionState`: Inspected Module and Copy Confirmation
//!
//! Holds the module currently open in the detail view, produces its usage
//! snippet, and runs the transient "copied" confirmation: a timer-based
//! state machine (idle → confirmed on successful copy, confirmed → idle on
//! expiry or replacement by a newer copy). Copy outcomes arrive
//! asynchronously, so each copy request carries a generation token and only
//! the latest generation may change the state.

use std::sync::Arc;
use std::time::{Duration, Instant};

use compact_str::CompactString;

use crate::model::catalog::{ModuleRecord, ModuleVersion};

/// How long the confirmation stays visible before reverting.
pub const COPY_CONFIRM_TTL: Duration = Duration::from_millis(2000);

/// Render the ready-to-paste usage block for a module.
///
/// The template is byte-exact; downstream tooling pastes it verbatim.
#[must_use]
pub fn usage_snippet(record: &ModuleRecord) -> String {
    format!(
        "module \"{}\" {{\n  source  = \"{}\"\n  version = \"{}\"\n\n  # Configuration options\n}}",
        record.name, record.full_name, record.version
    )
}

/// Armed "copied" confirmation with its revert deadline.
#[derive(Debug, Clone, Copy)]
pub struct CopyConfirmation {
    pub armed_at: Instant,
    pub ttl: Duration,
}

impl CopyConfirmation {
    fn new(ttl: Duration) -> Self {
        Self {
            armed_at: Instant::now(),
            ttl,
        }
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.armed_at.elapsed() >= self.ttl
    }
}

/// Detail-view state, independent of the query state.
#[derive(Debug, Clone)]
pub struct SelectionState {
    /// Module currently open in the detail view.
    pub selected: Option<Arc<ModuleRecord>>,

    /// Present while the "copied" confirmation is showing.
    pub confirmation: Option<CopyConfirmation>,

    /// Last clipboard failure; recorded for the host, never surfaced here.
    pub last_copy_error: Option<CompactString>,

    pub copy_confirm_ttl: Duration,

    /// Monotonic token; outcomes from superseded copies are ignored.
    copy_generation: u64,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionState {
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(COPY_CONFIRM_TTL)
    }

    #[must_use]
    pub fn with_ttl(copy_confirm_ttl: Duration) -> Self {
        Self {
            selected: None,
            confirmation: None,
            last_copy_error: None,
            copy_confirm_ttl,
            copy_generation: 0,
        }
    }

    /// Open a module in the detail view, replacing any prior selection.
    /// Re-selecting the already open module is a no-op.
    pub fn select(&mut self, record: Arc<ModuleRecord>) {
        if self
            .selected
            .as_ref()
            .is_some_and(|current| current.id == record.id)
        {
            return;
        }

        self.selected = Some(record);
        self.confirmation = None;
        self.last_copy_error = None;
    }

    /// Close the detail view. No-op when nothing is selected.
    pub fn dismiss(&mut self) {
        if self.selected.is_none() {
            return;
        }

        self.selected = None;
        self.confirmation = None;
        self.last_copy_error = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Arc<ModuleRecord>> {
        self.selected.as_ref()
    }

    /// Usage snippet for the selected module.
    #[must_use]
    pub fn snippet(&self) -> Option<String> {
        self.selected.as_deref().map(usage_snippet)
    }

    /// Version history of the selected module, in stored order.
    #[must_use]
    pub fn versions(&self) -> &[ModuleVersion] {
        self.selected
            .as_deref()
            .map_or(&[], |record| record.versions.as_slice())
    }

    /// Start a copy attempt and obtain its generation token.
    pub fn begin_copy(&mut self) -> u64 {
        self.copy_generation += 1;
        self.copy_generation
    }

    /// Arm the confirmation for a successful copy. Outcomes of superseded
    /// generations are dropped; the newest copy restarts the timer.
    pub fn confirm_copy(&mut self, generation: u64) -> bool {
        if generation != self.copy_generation {
            return false;
        }

        self.confirmation = Some(CopyConfirmation::new(self.copy_confirm_ttl));
        self.last_copy_error = None;
        true
    }

    /// Record a failed copy. The failure is kept for the host to inspect;
    /// the confirmation state is left untouched.
    pub fn record_copy_failure(&mut self, generation: u64, reason: impl Into<CompactString>) -> bool {
        if generation != self.copy_generation {
            return false;
        }

        self.last_copy_error = Some(reason.into());
        true
    }

    #[must_use]
    pub fn copy_confirmed(&self) -> bool {
        self.confirmation.is_some()
    }

    /// Revert an expired confirmation. Returns true when the state changed;
    /// the driver calls this on every tick.
    pub fn update(&mut self) -> bool {
        if self.confirmation.is_some_and(|c| c.is_expired()) {
            self.confirmation = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::Catalog;

    fn vpc() -> Arc<ModuleRecord> {
        Arc::clone(Catalog::builtin().get(1).unwrap())
    }

    fn backdate(state: &mut SelectionState, by: Duration) {
        let confirmation = state.confirmation.as_mut().unwrap();
        confirmation.armed_at = confirmation.armed_at.checked_sub(by).unwrap();
    }

    #[test]
    fn test_snippet_is_byte_exact() {
        let mut state = SelectionState::new();
        state.select(vpc());

        let expected = "module \"vpc\" {\n  source  = \"terraform-aws-modules/vpc/aws\"\n  version = \"5.1.2\"\n\n  # Configuration options\n}";
        assert_eq!(state.snippet().unwrap(), expected);
    }

    #[test]
    fn test_select_and_dismiss_are_idempotent() {
        let mut state = SelectionState::new();
        assert!(!state.is_open());

        state.dismiss();
        assert!(!state.is_open());

        state.select(vpc());
        let generation = state.begin_copy();
        state.confirm_copy(generation);

        // Re-selecting the same module must not drop the confirmation
        state.select(vpc());
        assert!(state.copy_confirmed());

        state.dismiss();
        assert!(!state.is_open());
        assert!(!state.copy_confirmed());
    }

    #[test]
    fn test_selecting_another_module_resets_copy_state() {
        let mut state = SelectionState::new();
        state.select(vpc());
        let generation = state.begin_copy();
        state.confirm_copy(generation);

        state.select(Arc::clone(Catalog::builtin().get(3).unwrap()));
        assert!(!state.copy_confirmed());
    }

    #[test]
    fn test_versions_projection_preserves_stored_order() {
        let mut state = SelectionState::new();
        assert!(state.versions().is_empty());

        state.select(vpc());
        let versions: Vec<&str> = state.versions().iter().map(|v| v.version.as_str()).collect();
        assert_eq!(versions, ["5.1.2", "5.1.1", "5.0.0"]);
    }

    #[test]
    fn test_confirmation_expires_after_ttl() {
        let mut state = SelectionState::new();
        state.select(vpc());

        let generation = state.begin_copy();
        assert!(state.confirm_copy(generation));
        assert!(state.copy_confirmed());

        // Not yet expired: update leaves it alone
        assert!(!state.update());
        assert!(state.copy_confirmed());

        backdate(&mut state, Duration::from_millis(2001));
        assert!(state.update());
        assert!(!state.copy_confirmed());
    }

    #[test]
    fn test_superseded_outcomes_are_ignored() {
        let mut state = SelectionState::new();
        state.select(vpc());

        let first = state.begin_copy();
        let second = state.begin_copy();

        assert!(!state.confirm_copy(first));
        assert!(!state.copy_confirmed());

        assert!(state.confirm_copy(second));
        assert!(state.copy_confirmed());

        // A stale failure must not clobber the newer success
        assert!(!state.record_copy_failure(first, "stale"));
        assert!(state.last_copy_error.is_none());
    }

    #[test]
    fn test_new_copy_restarts_the_timer() {
        let mut state = SelectionState::new();
        state.select(vpc());

        let first = state.begin_copy();
        state.confirm_copy(first);
        backdate(&mut state, Duration::from_millis(1500));

        // Second copy lands before the first expires; its timer starts fresh
        let second = state.begin_copy();
        state.confirm_copy(second);

        assert!(!state.update());
        assert!(state.copy_confirmed());
    }

    #[test]
    fn test_failure_recorded_but_confirmation_untouched() {
        let mut state = SelectionState::new();
        state.select(vpc());

        let generation = state.begin_copy();
        assert!(state.record_copy_failure(generation, "no display server"));
        assert!(!state.copy_confirmed());
        assert_eq!(state.last_copy_error.as_deref(), Some("no display server"));
    }
}
