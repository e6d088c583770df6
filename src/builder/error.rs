//! Build errors for transition table and automaton builders.

use crate::core::Event;
use thiserror::Error;

/// Errors that can occur when building transition tables and automatons.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,

    #[error("State '{state}' has no transition for event '{event}'")]
    IncompleteTable { state: String, event: Event },

    #[error("State '{state}' maps event '{event}' to more than one target")]
    ConflictingTransition { state: String, event: Event },

    #[error("State '{state}' does not return to the initial state on 'Clear'")]
    ClearNotInitial { state: String },

    #[error("Transition table not specified. Call .table(table) before .build()")]
    MissingTable,
}
