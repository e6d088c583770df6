//! Builder for constructing transition tables.

use crate::builder::error::BuildError;
use crate::core::{Event, State};
use crate::machine::TransitionTable;
use std::collections::{HashMap, HashSet, VecDeque};

/// Builder for transition tables with a fluent API.
///
/// # Example
///
/// ```rust
/// use namestate::builder::TransitionTableBuilder;
/// use namestate::core::Event;
/// use namestate::rules::NameState;
///
/// let table = TransitionTableBuilder::new()
///     .initial(NameState::Initial)
///     .on(NameState::Initial, Event::Correct, NameState::CorrectName)
///     .on(NameState::CorrectName, Event::Correct, NameState::CorrectName)
///     .on_any(Event::Incorrect, NameState::Error)
///     .on(NameState::Error, Event::Correct, NameState::Error)
///     .on_any(Event::Clear, NameState::Initial)
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     table.target(NameState::CorrectName, Event::Incorrect),
///     Some(NameState::Error)
/// );
/// ```
pub struct TransitionTableBuilder<S: State> {
    initial: Option<S>,
    entries: Vec<(S, Event, S)>,
    wildcards: Vec<(Event, S)>,
}

impl<S: State> TransitionTableBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            entries: Vec::new(),
            wildcards: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Map `event` cast in `from` to `to`.
    pub fn on(mut self, from: S, event: Event, to: S) -> Self {
        self.entries.push((from, event, to));
        self
    }

    /// Map `event` cast in any known state to `to`.
    ///
    /// Explicit `on` entries for the same state and event take precedence.
    pub fn on_any(mut self, event: Event, to: S) -> Self {
        self.wildcards.push((event, to));
        self
    }

    /// Build the table.
    ///
    /// Every state reachable from the initial state must handle every
    /// event and return to the initial state on [`Event::Clear`]. No state
    /// may map one event to two different targets.
    pub fn build(self) -> Result<TransitionTable<S>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.entries.is_empty() && self.wildcards.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        let mut targets: HashMap<(S, Event), S> = HashMap::new();
        for &(from, event, to) in &self.entries {
            insert_unique(&mut targets, from, event, to)?;
        }

        let known: Vec<S> = known_states(initial, &self.entries, &self.wildcards);
        let mut wildcard_targets: HashMap<Event, S> = HashMap::new();
        for &(event, to) in &self.wildcards {
            if let Some(existing) = wildcard_targets.insert(event, to) {
                if existing != to {
                    return Err(BuildError::ConflictingTransition {
                        state: "*".to_string(),
                        event,
                    });
                }
            }
        }
        for state in &known {
            for (&event, &to) in &wildcard_targets {
                targets.entry((*state, event)).or_insert(to);
            }
        }

        check_complete(initial, &targets)?;

        Ok(TransitionTable::new(initial, targets))
    }
}

impl<S: State> Default for TransitionTableBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

fn insert_unique<S: State>(
    targets: &mut HashMap<(S, Event), S>,
    from: S,
    event: Event,
    to: S,
) -> Result<(), BuildError> {
    match targets.insert((from, event), to) {
        Some(existing) if existing != to => Err(BuildError::ConflictingTransition {
            state: from.name().to_string(),
            event,
        }),
        _ => Ok(()),
    }
}

/// States named anywhere in the builder, in first-mention order.
fn known_states<S: State>(
    initial: S,
    entries: &[(S, Event, S)],
    wildcards: &[(Event, S)],
) -> Vec<S> {
    let mentioned = std::iter::once(initial)
        .chain(entries.iter().flat_map(|&(from, _, to)| [from, to]))
        .chain(wildcards.iter().map(|&(_, to)| to));

    let mut seen = HashSet::new();
    mentioned.filter(|s| seen.insert(*s)).collect()
}

/// Walk every state reachable from `initial`, requiring an entry for each
/// event and a restart that lands back on `initial`.
fn check_complete<S: State>(
    initial: S,
    targets: &HashMap<(S, Event), S>,
) -> Result<(), BuildError> {
    let mut visited = HashSet::from([initial]);
    let mut queue = VecDeque::from([initial]);

    while let Some(state) = queue.pop_front() {
        for event in Event::ALL {
            let next = targets
                .get(&(state, event))
                .copied()
                .ok_or_else(|| BuildError::IncompleteTable {
                    state: state.name().to_string(),
                    event,
                })?;
            if event == Event::Clear && next != initial {
                return Err(BuildError::ClearNotInitial {
                    state: state.name().to_string(),
                });
            }
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::NameState;

    #[test]
    fn builder_validates_initial_state() {
        let result = TransitionTableBuilder::<NameState>::new()
            .on(NameState::Initial, Event::Correct, NameState::CorrectName)
            .build();

        assert_eq!(result.unwrap_err(), BuildError::MissingInitialState);
    }

    #[test]
    fn builder_requires_transitions() {
        let result = TransitionTableBuilder::new()
            .initial(NameState::Initial)
            .build();

        assert_eq!(result.unwrap_err(), BuildError::NoTransitions);
    }

    #[test]
    fn builder_rejects_incomplete_table() {
        let result = TransitionTableBuilder::new()
            .initial(NameState::Initial)
            .on(NameState::Initial, Event::Correct, NameState::CorrectName)
            .on_any(Event::Clear, NameState::Initial)
            .on_any(Event::Incorrect, NameState::Error)
            .build();

        // CorrectName is reachable but never handles Correct
        assert!(matches!(result, Err(BuildError::IncompleteTable { .. })));
    }

    #[test]
    fn incomplete_error_names_state_and_event() {
        let result = TransitionTableBuilder::new()
            .initial(NameState::Initial)
            .on(NameState::Initial, Event::Correct, NameState::Initial)
            .on(NameState::Initial, Event::Incorrect, NameState::Initial)
            .build();

        assert_eq!(
            result.unwrap_err(),
            BuildError::IncompleteTable {
                state: "Initial".to_string(),
                event: Event::Clear,
            }
        );
    }

    #[test]
    fn unreachable_states_need_not_be_complete() {
        let result = TransitionTableBuilder::new()
            .initial(NameState::Initial)
            .on(NameState::Initial, Event::Correct, NameState::Initial)
            .on(NameState::Initial, Event::Incorrect, NameState::Initial)
            .on(NameState::Initial, Event::Clear, NameState::Initial)
            .on(NameState::Error, Event::Correct, NameState::Error)
            .build();

        assert!(result.is_ok());
    }

    #[test]
    fn builder_rejects_clear_to_non_initial_state() {
        let result = TransitionTableBuilder::new()
            .initial(NameState::Initial)
            .on(NameState::Initial, Event::Correct, NameState::CorrectName)
            .on(NameState::CorrectName, Event::Correct, NameState::CorrectName)
            .on(NameState::Error, Event::Correct, NameState::Error)
            .on_any(Event::Incorrect, NameState::Error)
            .on_any(Event::Clear, NameState::Error)
            .build();

        assert_eq!(
            result.unwrap_err(),
            BuildError::ClearNotInitial {
                state: "Initial".to_string(),
            }
        );
    }

    #[test]
    fn builder_rejects_single_state_clearing_elsewhere() {
        let result = TransitionTableBuilder::new()
            .initial(NameState::Initial)
            .on(NameState::Initial, Event::Correct, NameState::CorrectName)
            .on(NameState::CorrectName, Event::Correct, NameState::CorrectName)
            .on(NameState::Error, Event::Correct, NameState::Error)
            .on_any(Event::Incorrect, NameState::Error)
            .on_any(Event::Clear, NameState::Initial)
            .on(NameState::Error, Event::Clear, NameState::Error)
            .build();

        assert_eq!(
            result.unwrap_err(),
            BuildError::ClearNotInitial {
                state: "Error".to_string(),
            }
        );
    }

    #[test]
    fn builder_rejects_conflicting_entries() {
        let result = TransitionTableBuilder::new()
            .initial(NameState::Initial)
            .on(NameState::Initial, Event::Correct, NameState::CorrectName)
            .on(NameState::Initial, Event::Correct, NameState::Error)
            .build();

        assert_eq!(
            result.unwrap_err(),
            BuildError::ConflictingTransition {
                state: "Initial".to_string(),
                event: Event::Correct,
            }
        );
    }

    #[test]
    fn builder_rejects_conflicting_wildcards() {
        let result = TransitionTableBuilder::new()
            .initial(NameState::Initial)
            .on_any(Event::Clear, NameState::Initial)
            .on_any(Event::Clear, NameState::Error)
            .build();

        assert!(matches!(
            result,
            Err(BuildError::ConflictingTransition { event: Event::Clear, .. })
        ));
    }

    #[test]
    fn explicit_entry_overrides_wildcard() {
        let table = TransitionTableBuilder::new()
            .initial(NameState::Initial)
            .on_any(Event::Correct, NameState::CorrectName)
            .on_any(Event::Incorrect, NameState::Error)
            .on_any(Event::Clear, NameState::Initial)
            .on(NameState::Error, Event::Correct, NameState::Error)
            .build()
            .unwrap();

        assert_eq!(
            table.target(NameState::Error, Event::Correct),
            Some(NameState::Error)
        );
        assert_eq!(
            table.target(NameState::Initial, Event::Correct),
            Some(NameState::CorrectName)
        );
    }

    #[test]
    fn duplicate_identical_entries_are_allowed() {
        let result = TransitionTableBuilder::new()
            .initial(NameState::Initial)
            .on(NameState::Initial, Event::Correct, NameState::Initial)
            .on(NameState::Initial, Event::Correct, NameState::Initial)
            .on_any(Event::Incorrect, NameState::Initial)
            .on_any(Event::Clear, NameState::Initial)
            .build();

        assert!(result.is_ok());
    }
}
