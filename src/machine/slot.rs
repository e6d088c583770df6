//! The event sink that owns the current state.

use super::table::TransitionTable;
use crate::core::{Event, EventSink, State, StateHistory, StateTransition};
use chrono::Utc;
use tracing::{debug, warn};

/// Holds the current state and swaps it as events arrive.
///
/// This is the automaton's [`EventSink`]: a cast event is resolved against
/// the transition table and the successor replaces the current state before
/// `cast_event` returns.
#[derive(Clone, Debug)]
pub struct StateSlot<S: State> {
    current: S,
    table: TransitionTable<S>,
    history: StateHistory<S>,
}

impl<S: State> StateSlot<S> {
    /// Create a slot positioned at the table's initial state.
    pub fn new(table: TransitionTable<S>, history: StateHistory<S>) -> Self {
        Self {
            current: table.initial(),
            table,
            history,
        }
    }

    /// Get current state (pure)
    pub fn current(&self) -> S {
        self.current
    }

    pub fn table(&self) -> &TransitionTable<S> {
        &self.table
    }

    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }
}

impl<S: State> EventSink for StateSlot<S> {
    fn cast_event(&mut self, event: Event) {
        let from = self.current;
        let Some(to) = self.table.target(from, event) else {
            warn!(state = from.name(), %event, "No transition for event, state unchanged");
            return;
        };

        debug!(from = from.name(), %event, to = to.name(), "Transition");
        self.current = to;
        self.history.record(StateTransition {
            from,
            event,
            to,
            timestamp: Utc::now(),
        });
    }
}
