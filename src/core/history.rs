//! State transition history tracking.
//!
//! Every event handled by the automaton's sink is recorded here, including
//! self-loops and restarts, so the path the machine took through a stream
//! can be inspected or exported after the fact.
//!
//! Histories are bounded by default ([`DEFAULT_HISTORY_LIMIT`]); the oldest
//! entries are evicted first. Unbounded retention must be requested with
//! [`StateHistory::unbounded`].

use super::event::Event;
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Number of transitions a history keeps unless configured otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 1024;

/// Record of a single handled event.
///
/// # Example
///
/// ```rust
/// use namestate::core::{Event, StateTransition};
/// use namestate::rules::NameState;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: NameState::Initial,
///     event: Event::Correct,
///     to: NameState::CorrectName,
///     timestamp: Utc::now(),
/// };
/// assert!(transition.changed_state());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state the event was cast from
    pub from: S,
    /// The event that was cast
    pub event: Event,
    /// The state the table selected
    pub to: S,
    /// When the event was handled
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// Whether the transition moved to a different state.
    pub fn changed_state(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered history of handled events.
///
/// An optional limit keeps only the most recent transitions, which bounds
/// memory for long-lived streams.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: VecDeque<StateTransition<S>>,
    limit: Option<usize>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create an empty history bounded by [`DEFAULT_HISTORY_LIMIT`].
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create an empty history that retains at most `limit` transitions.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: VecDeque::new(),
            limit: Some(limit),
        }
    }

    /// Create an empty history that never evicts.
    ///
    /// Memory grows by one entry per handled event for the life of the
    /// machine.
    pub fn unbounded() -> Self {
        Self {
            transitions: VecDeque::new(),
            limit: None,
        }
    }

    /// Record a transition, evicting the oldest entries past the limit.
    pub fn record(&mut self, transition: StateTransition<S>) {
        self.transitions.push_back(transition);
        if let Some(limit) = self.limit {
            while self.transitions.len() > limit {
                self.transitions.pop_front();
            }
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest retained transition, then the
    /// `to` state of each transition. Empty when nothing was recorded.
    ///
    /// # Example
    ///
    /// ```rust
    /// use namestate::prelude::*;
    ///
    /// let mut machine = Automaton::<NameState>::default();
    /// machine.feed_str("aB").unwrap();
    ///
    /// let path = machine.history().get_path();
    /// assert_eq!(
    ///     path,
    ///     vec![&NameState::Initial, &NameState::CorrectName, &NameState::Error]
    /// );
    /// ```
    pub fn get_path(&self) -> Vec<&S> {
        let Some(first) = self.transitions.front() else {
            return Vec::new();
        };

        std::iter::once(&first.from)
            .chain(self.transitions.iter().map(|t| &t.to))
            .collect()
    }

    /// Time elapsed between the oldest and newest retained transitions.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.transitions.front()?;
        let last = self.transitions.back()?;
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Get all retained transitions, oldest first.
    pub fn transitions(&self) -> &VecDeque<StateTransition<S>> {
        &self.transitions
    }

    /// The most recently recorded transition.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.back()
    }

    /// Number of retained transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Whether no transitions are retained.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Maximum number of retained transitions, `None` when unbounded.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}
