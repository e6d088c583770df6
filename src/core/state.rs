//! Core State trait for input-classifying states.
//!
//! A state decides what kind of character it was just given and casts the
//! matching [`Event`]. It never names its successor: the sink it casts into
//! owns the transition topology.

use super::error::{validate_character, InputError};
use super::event::Event;
use super::model::DataModel;
use super::report::{CorrectnessReport, Reporter};
use super::sink::EventSink;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for states of an incremental input classifier.
///
/// Implementors supply the per-variant policy (`classify`, `is_correct`);
/// the restart, accumulation and reporting operations are provided and
/// behave the same for every rule set.
///
/// States are plain values. The sink and the model are borrowed for the
/// duration of each call, never stored.
///
/// # Example
///
/// ```rust
/// use namestate::core::{DataModel, Event, State};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Digits {
///     Ok,
///     Broken,
/// }
///
/// impl State for Digits {
///     fn name(&self) -> &str {
///         match self {
///             Self::Ok => "Ok",
///             Self::Broken => "Broken",
///         }
///     }
///
///     fn classify(&self, character: char) -> Event {
///         match self {
///             Self::Ok if character.is_ascii_digit() => Event::Correct,
///             _ => Event::Incorrect,
///         }
///     }
///
///     fn is_correct(&self) -> bool {
///         matches!(self, Self::Ok)
///     }
/// }
///
/// let mut events: Vec<Event> = Vec::new();
/// let mut model = DataModel::new();
/// Digits::Ok.input_character('7', &mut events, &mut model).unwrap();
/// Digits::Ok.input_character('x', &mut events, &mut model).unwrap();
///
/// assert_eq!(events, vec![Event::Correct, Event::Incorrect]);
/// assert_eq!(model.current_string(), "7x");
/// ```
pub trait State:
    Copy + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Decide which event a character produces in this state.
    ///
    /// Must be pure: the same state and character always give the same
    /// event.
    fn classify(&self, character: char) -> Event;

    /// Whether this state represents a currently valid classification.
    ///
    /// Fixed per variant; never derived from the accumulated text.
    fn is_correct(&self) -> bool;

    /// Restart the machine: clear the model and cast [`Event::Clear`].
    fn start_new_query(&self, sink: &mut dyn EventSink, model: &mut DataModel) {
        tracing::info!(state = self.name(), "Input cache cleared");
        model.clear();
        sink.cast_event(Event::Clear);
    }

    /// Classify a character, cast the resulting event, then record the
    /// character in the model whatever the outcome.
    ///
    /// Fails only for characters that are not valid input at all; nothing
    /// is cast or recorded in that case.
    fn input_character(
        &self,
        character: char,
        sink: &mut dyn EventSink,
        model: &mut DataModel,
    ) -> Result<(), InputError> {
        let character = validate_character(character)?;
        let event = self.classify(character);
        sink.cast_event(event);
        model.add_character(character);
        Ok(())
    }

    /// Report whether the accumulated input is a correct name.
    fn log_stream_name_correctness(&self, model: &DataModel, reporter: &Reporter) {
        reporter.report(&CorrectnessReport {
            state: self.name(),
            text: model.current_string(),
            correct: self.is_correct(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum Vowels {
        Clean,
        Dirty,
    }

    impl State for Vowels {
        fn name(&self) -> &str {
            match self {
                Self::Clean => "Clean",
                Self::Dirty => "Dirty",
            }
        }

        fn classify(&self, character: char) -> Event {
            match self {
                Self::Clean if "aeiou".contains(character) => Event::Correct,
                _ => Event::Incorrect,
            }
        }

        fn is_correct(&self) -> bool {
            matches!(self, Self::Clean)
        }
    }

    #[test]
    fn input_character_casts_then_records() {
        let mut events: Vec<Event> = Vec::new();
        let mut model = DataModel::new();

        Vowels::Clean
            .input_character('a', &mut events, &mut model)
            .unwrap();
        Vowels::Clean
            .input_character('z', &mut events, &mut model)
            .unwrap();

        assert_eq!(events, vec![Event::Correct, Event::Incorrect]);
        assert_eq!(model.current_string(), "az");
    }

    #[test]
    fn incorrect_characters_are_still_recorded() {
        let mut events: Vec<Event> = Vec::new();
        let mut model = DataModel::new();

        Vowels::Dirty
            .input_character('a', &mut events, &mut model)
            .unwrap();

        assert_eq!(events, vec![Event::Incorrect]);
        assert_eq!(model.current_string(), "a");
    }

    #[test]
    fn invalid_character_leaves_everything_untouched() {
        let mut events: Vec<Event> = Vec::new();
        let mut model = DataModel::new();
        model.add_character('e');

        let result = Vowels::Clean.input_character('\0', &mut events, &mut model);

        assert!(matches!(result, Err(InputError::InvalidInput { .. })));
        assert!(events.is_empty());
        assert_eq!(model.current_string(), "e");
    }

    #[test]
    fn start_new_query_clears_and_casts_clear() {
        let mut events: Vec<Event> = Vec::new();
        let mut model = DataModel::new();
        model.add_character('q');

        Vowels::Dirty.start_new_query(&mut events, &mut model);

        assert_eq!(events, vec![Event::Clear]);
        assert!(model.is_empty());
    }

    #[test]
    fn log_reports_variant_correctness_without_side_effects() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let reporter = Reporter::new(move |r| {
            sink.lock().unwrap().push(r.to_string());
        });
        let mut model = DataModel::new();
        model.add_character('x');

        Vowels::Clean.log_stream_name_correctness(&model, &reporter);
        Vowels::Dirty.log_stream_name_correctness(&model, &reporter);

        assert_eq!(model.current_string(), "x");
        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                "String 'x' is a correct name".to_string(),
                "String 'x' is not a correct name".to_string(),
            ]
        );
    }

    #[test]
    fn state_is_copy_and_comparable() {
        let state = Vowels::Clean;
        let copy = state;
        assert_eq!(state, copy);
        assert_ne!(Vowels::Clean, Vowels::Dirty);
    }
}
