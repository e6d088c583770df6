//! Transition topology.

use crate::core::{Event, State};
use std::collections::HashMap;

/// Maps `(current state, event)` to the next state.
///
/// Tables are created through
/// [`TransitionTableBuilder`](crate::builder::TransitionTableBuilder), which
/// checks that every state reachable from the initial state handles every
/// event.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionTable<S: State> {
    initial: S,
    targets: HashMap<(S, Event), S>,
}

impl<S: State> TransitionTable<S> {
    pub(crate) fn new(initial: S, targets: HashMap<(S, Event), S>) -> Self {
        Self { initial, targets }
    }

    /// The state a fresh machine starts in.
    pub fn initial(&self) -> S {
        self.initial
    }

    /// Look up the successor of `from` under `event` (pure).
    pub fn target(&self, from: S, event: Event) -> Option<S> {
        self.targets.get(&(from, event)).copied()
    }

    /// Number of `(state, event)` entries.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
