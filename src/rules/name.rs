//! Name validation rule.
//!
//! A correct name starts with a letter of either case and continues with
//! lowercase letters only. Once broken it stays broken until restarted.

use crate::builder::TransitionTableBuilder;
use crate::core::{Event, State};
use crate::machine::{Automaton, TransitionTable};
use serde::{Deserialize, Serialize};

/// States of the name rule.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum NameState {
    /// Nothing received since the last restart.
    Initial,
    /// Every character so far fits the rule.
    CorrectName,
    /// At least one character broke the rule.
    Error,
}

impl State for NameState {
    fn name(&self) -> &str {
        match self {
            Self::Initial => "Initial",
            Self::CorrectName => "CorrectName",
            Self::Error => "Error",
        }
    }

    fn classify(&self, character: char) -> Event {
        let fits = match self {
            Self::Initial => character.is_alphabetic(),
            Self::CorrectName => character.is_lowercase(),
            // absorbing: nothing repairs a broken name
            Self::Error => false,
        };

        if fits {
            Event::Correct
        } else {
            Event::Incorrect
        }
    }

    fn is_correct(&self) -> bool {
        match self {
            Self::Initial | Self::CorrectName => true,
            Self::Error => false,
        }
    }
}

/// Transition table for the name rule.
///
/// `Error` maps `Correct` back onto itself even though the rule never
/// produces it there, so every state handles every event.
pub fn name_table() -> TransitionTable<NameState> {
    TransitionTableBuilder::new()
        .initial(NameState::Initial)
        .on(NameState::Initial, Event::Correct, NameState::CorrectName)
        .on(NameState::Initial, Event::Incorrect, NameState::Error)
        .on(NameState::CorrectName, Event::Correct, NameState::CorrectName)
        .on(NameState::CorrectName, Event::Incorrect, NameState::Error)
        .on(NameState::Error, Event::Correct, NameState::Error)
        .on(NameState::Error, Event::Incorrect, NameState::Error)
        .on_any(Event::Clear, NameState::Initial)
        .build()
        .expect("Name rule table should always build")
}

impl Default for Automaton<NameState> {
    fn default() -> Self {
        Automaton::new(name_table())
    }
}
