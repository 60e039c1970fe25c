//! src/controller/event_loop.rs
//! ============================================================================
//! # Event Loop: State-Transition Driver
//!
//! Pumps `Action`s from the host into `BrowserState`. Every action is applied
//! synchronously and completely before the next one is observed; the only
//! operation that suspends is the clipboard write, which runs fire-and-forget
//! on a spawned task and reports back through the same action channel. A
//! periodic tick reverts the expired copy confirmation and sweeps the
//! clipboard history.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time::MissedTickBehavior;
use tracing::{debug, trace};

use crate::controller::actions::Action;
use crate::model::app_state::{BrowserState, CopyRequest};

const TICK_INTERVAL: Duration = Duration::from_millis(250);

pub struct EventLoop {
    pub state: BrowserState,
    action_rx: UnboundedReceiver<Action>,
    action_tx: UnboundedSender<Action>,
}

impl EventLoop {
    /// Create the loop and the sender the host feeds actions through.
    #[must_use]
    pub fn new(state: BrowserState) -> (Self, UnboundedSender<Action>) {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let sender = action_tx.clone();

        (
            Self {
                state,
                action_rx,
                action_tx,
            },
            sender,
        )
    }

    /// Run until `Quit`, then hand the final state back to the caller.
    pub async fn run(mut self) -> BrowserState {
        let mut tick = tokio::time::interval(TICK_INTERVAL);
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                maybe_action = self.action_rx.recv() => {
                    match maybe_action {
                        None | Some(Action::Quit) => {
                            debug!("Event loop terminating");
                            break;
                        }
                        Some(action) => self.dispatch(action),
                    }
                }

                _ = tick.tick() => {
                    self.on_tick();
                }
            }
        }

        self.state
    }

    /// Apply one action to the state. Public so hosts (and tests) can drive
    /// the browser without the async pump.
    pub fn dispatch(&mut self, action: Action) {
        trace!(?action, "Dispatching action");

        match action {
            Action::SetTextFilter(text) => self.state.set_text_filter(text),
            Action::ToggleTag(tag) => self.state.toggle_tag(&tag),
            Action::ToggleProvider(provider) => self.state.toggle_provider(&provider),
            Action::ClearFilters => self.state.clear_filters(),
            Action::SetSort(sort) => self.state.set_sort(sort),
            Action::LoadMore => self.state.load_more(),
            Action::Select(id) => self.state.select(id),
            Action::Dismiss => self.state.dismiss(),
            Action::CopySnippet => self.spawn_copy(),
            Action::CopyFinished {
                generation,
                outcome,
            } => self.state.handle_copy_outcome(generation, outcome),
            Action::Tick => self.state.tick(),
            Action::NoOp => {}
            // Quit is handled by the run loop before dispatch
            Action::Quit => {}
        }
    }

    fn on_tick(&mut self) {
        self.state.tick();

        // Sweep expired history entries when the clipboard isn't busy with
        // a write; the next tick catches whatever this one skipped.
        if let Ok(mut clipboard) = self.state.clipboard.try_lock() {
            let evicted: usize = clipboard.evict_expired();
            if evicted > 0 {
                debug!(evicted, "Expired clipboard history entries removed");
            }
        }
    }

    /// Fire-and-forget clipboard write; the UI never blocks on it.
    fn spawn_copy(&mut self) {
        let Some(CopyRequest {
            generation,
            label,
            text,
        }) = self.state.begin_copy_request()
        else {
            debug!("Copy requested without a selection");
            return;
        };

        let clipboard = Arc::clone(&self.state.clipboard);
        let action_tx = self.action_tx.clone();

        tokio::spawn(async move {
            let outcome = clipboard.lock().await.copy(label, text).await;
            let _ = action_tx.send(Action::CopyFinished {
                generation,
                outcome,
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::Catalog;
    use crate::model::criteria::SortKey;

    fn event_loop() -> (EventLoop, UnboundedSender<Action>) {
        EventLoop::new(BrowserState::new(Catalog::builtin().clone()))
    }

    #[tokio::test]
    async fn test_dispatch_applies_criteria_actions() {
        let (mut event_loop, _tx) = event_loop();

        event_loop.dispatch(Action::ToggleTag("aws".into()));
        event_loop.dispatch(Action::SetSort(SortKey::Name));
        assert_eq!(event_loop.state.results.len(), 5);
        assert_eq!(event_loop.state.visible()[0].name, "eks");

        event_loop.dispatch(Action::ClearFilters);
        assert_eq!(event_loop.state.summary(), (6, 8));
    }

    #[tokio::test]
    async fn test_run_processes_copy_flow() {
        let (event_loop, tx) = event_loop();
        let handle = tokio::spawn(event_loop.run());

        tx.send(Action::Select(1)).unwrap();
        tx.send(Action::CopySnippet).unwrap();

        // Give the spawned write and its CopyFinished time to land
        tokio::time::sleep(Duration::from_millis(100)).await;
        tx.send(Action::Quit).unwrap();

        let state = handle.await.unwrap();
        assert!(state.selection.copy_confirmed());

        let clipboard = state.clipboard.lock().await;
        assert_eq!(clipboard.len(), 1);
        assert_eq!(
            clipboard.items().next().unwrap().label,
            "terraform-aws-modules/vpc/aws"
        );
    }

    #[tokio::test]
    async fn test_copy_without_selection_is_a_noop() {
        let (mut event_loop, _tx) = event_loop();
        event_loop.dispatch(Action::CopySnippet);
        assert!(!event_loop.state.selection.copy_confirmed());
    }

    #[tokio::test]
    async fn test_run_hands_state_back_on_quit() {
        let (event_loop, tx) = event_loop();
        let handle = tokio::spawn(event_loop.run());

        tx.send(Action::LoadMore).unwrap();
        tx.send(Action::Quit).unwrap();

        let state = handle.await.unwrap();
        assert_eq!(state.summary(), (8, 8));
    }
}
