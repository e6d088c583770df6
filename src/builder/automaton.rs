//! Builder for constructing automatons.

use crate::builder::error::BuildError;
use crate::core::{Reporter, State, StateHistory, DEFAULT_HISTORY_LIMIT};
use crate::machine::{Automaton, TransitionTable};

/// Builder for configuring an [`Automaton`] with a fluent API.
///
/// Defaults: reports go to `tracing`, history keeps the most recent
/// [`DEFAULT_HISTORY_LIMIT`] transitions. Unbounded history must be
/// requested with [`AutomatonBuilder::unbounded_history`].
pub struct AutomatonBuilder<S: State> {
    table: Option<TransitionTable<S>>,
    reporter: Option<Reporter>,
    history_limit: Option<usize>,
}

impl<S: State> AutomatonBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            table: None,
            reporter: None,
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
        }
    }

    /// Set the transition table (required).
    pub fn table(mut self, table: TransitionTable<S>) -> Self {
        self.table = Some(table);
        self
    }

    /// Set where correctness reports go.
    pub fn reporter(mut self, reporter: Reporter) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Keep at most `limit` transitions in the history.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Keep every transition for the life of the machine.
    pub fn unbounded_history(mut self) -> Self {
        self.history_limit = None;
        self
    }

    /// Build the automaton.
    pub fn build(self) -> Result<Automaton<S>, BuildError> {
        let table = self.table.ok_or(BuildError::MissingTable)?;
        let history = match self.history_limit {
            Some(limit) => StateHistory::with_limit(limit),
            None => StateHistory::unbounded(),
        };

        Ok(Automaton::from_parts(
            table,
            self.reporter.unwrap_or_default(),
            history,
        ))
    }
}

impl<S: State> Default for AutomatonBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{name_table, NameState};

    #[test]
    fn builder_requires_table() {
        let result = AutomatonBuilder::<NameState>::new().build();
        assert!(matches!(result, Err(BuildError::MissingTable)));
    }

    #[test]
    fn builder_applies_history_limit() {
        let mut machine = AutomatonBuilder::new()
            .table(name_table())
            .reporter(Reporter::silent())
            .history_limit(2)
            .build()
            .unwrap();

        machine.feed_str("abcd").unwrap();

        assert_eq!(machine.history().len(), 2);
        assert_eq!(machine.history().limit(), Some(2));
        assert_eq!(machine.current_string(), "abcd");
    }

    #[test]
    fn builder_defaults_to_bounded_history() {
        let mut machine = AutomatonBuilder::new()
            .table(name_table())
            .reporter(Reporter::silent())
            .build()
            .unwrap();

        machine.feed_str("abcd").unwrap();

        assert_eq!(machine.history().len(), 4);
        assert_eq!(machine.history().limit(), Some(DEFAULT_HISTORY_LIMIT));
        assert_eq!(machine.current_state(), NameState::CorrectName);
    }

    #[test]
    fn unbounded_history_is_opt_in() {
        let mut machine = AutomatonBuilder::new()
            .table(name_table())
            .reporter(Reporter::silent())
            .history_limit(2)
            .unbounded_history()
            .build()
            .unwrap();

        for _ in 0..DEFAULT_HISTORY_LIMIT {
            machine.feed_str("ab").unwrap();
            machine.start_new_query();
        }

        assert_eq!(machine.history().limit(), None);
        assert_eq!(machine.history().len(), DEFAULT_HISTORY_LIMIT * 3);
    }
}
