//! The controller that feeds characters to the current state.

use super::slot::StateSlot;
use super::table::TransitionTable;
use crate::builder::AutomatonBuilder;
use crate::core::{validate_code_point, DataModel, InputError, Reporter, State, StateHistory};

/// Incremental classifier over a stream of characters.
///
/// The automaton owns the accumulated input, the current state (inside its
/// [`StateSlot`]) and the reporter. Each operation is delegated to the
/// current state, which borrows the slot as its event sink and the model
/// as its buffer for the duration of the call.
///
/// # Example
///
/// ```rust
/// use namestate::prelude::*;
///
/// let mut machine = Automaton::<NameState>::default();
///
/// machine.input_character('a').unwrap();
/// assert_eq!(machine.current_state(), NameState::CorrectName);
///
/// machine.input_character('B').unwrap();
/// assert_eq!(machine.current_state(), NameState::Error);
/// assert_eq!(machine.current_string(), "aB");
/// assert!(!machine.is_correct());
///
/// machine.start_new_query();
/// assert_eq!(machine.current_state(), NameState::Initial);
/// assert_eq!(machine.current_string(), "");
/// ```
#[derive(Clone, Debug)]
pub struct Automaton<S: State> {
    slot: StateSlot<S>,
    model: DataModel,
    reporter: Reporter,
}

impl<S: State> Automaton<S> {
    /// Create a machine in the table's initial state, reporting through
    /// `tracing` and keeping the most recent
    /// [`DEFAULT_HISTORY_LIMIT`](crate::core::DEFAULT_HISTORY_LIMIT)
    /// transitions.
    ///
    /// Use [`Automaton::builder`] with
    /// [`unbounded_history`](AutomatonBuilder::unbounded_history) to keep
    /// every transition.
    pub fn new(table: TransitionTable<S>) -> Self {
        Self::from_parts(table, Reporter::default(), StateHistory::new())
    }

    /// Start configuring a machine.
    pub fn builder() -> AutomatonBuilder<S> {
        AutomatonBuilder::new()
    }

    pub(crate) fn from_parts(
        table: TransitionTable<S>,
        reporter: Reporter,
        history: StateHistory<S>,
    ) -> Self {
        Self {
            slot: StateSlot::new(table, history),
            model: DataModel::new(),
            reporter,
        }
    }

    /// Feed one character to the current state.
    ///
    /// On return the current state already reflects the event the
    /// character produced.
    pub fn input_character(&mut self, character: char) -> Result<(), InputError> {
        let state = self.slot.current();
        state.input_character(character, &mut self.slot, &mut self.model)
    }

    /// Feed a raw code point, rejecting values that are not characters.
    pub fn input_code_point(&mut self, code_point: u32) -> Result<(), InputError> {
        let character = validate_code_point(code_point)?;
        self.input_character(character)
    }

    /// Feed every character of `input` in order.
    ///
    /// Stops at the first invalid character; characters before it have
    /// already been applied.
    pub fn feed_str(&mut self, input: &str) -> Result<(), InputError> {
        input.chars().try_for_each(|c| self.input_character(c))
    }

    /// Restart: empty the accumulated input and return to the initial state.
    pub fn start_new_query(&mut self) {
        let state = self.slot.current();
        state.start_new_query(&mut self.slot, &mut self.model);
    }

    /// Report the correctness of the accumulated input through the
    /// configured reporter.
    pub fn log_stream_name_correctness(&self) {
        self.slot
            .current()
            .log_stream_name_correctness(&self.model, &self.reporter);
    }

    /// Whether the input accumulated so far is a correct name.
    ///
    /// ```rust
    /// use namestate::prelude::*;
    ///
    /// let mut machine = Automaton::<NameState>::default();
    /// assert!(machine.is_correct());
    ///
    /// machine.feed_str("9").unwrap();
    /// assert!(!machine.is_correct());
    /// ```
    pub fn is_correct(&self) -> bool {
        self.slot.current().is_correct()
    }

    /// The state the last event moved the machine into.
    ///
    /// ```rust
    /// use namestate::prelude::*;
    ///
    /// let mut machine = Automaton::<NameState>::default();
    /// assert_eq!(machine.current_state(), NameState::Initial);
    ///
    /// machine.input_character('x').unwrap();
    /// assert_eq!(machine.current_state(), NameState::CorrectName);
    /// ```
    pub fn current_state(&self) -> S {
        self.slot.current()
    }

    /// Characters accumulated since the last restart.
    ///
    /// ```rust
    /// use namestate::prelude::*;
    ///
    /// let mut machine = Automaton::<NameState>::default();
    /// machine.feed_str("Ab1").unwrap();
    /// assert_eq!(machine.current_string(), "Ab1");
    /// ```
    pub fn current_string(&self) -> &str {
        self.model.current_string()
    }

    /// The buffer backing [`Automaton::current_string`].
    ///
    /// ```rust
    /// use namestate::prelude::*;
    ///
    /// let mut machine = Automaton::<NameState>::default();
    /// machine.feed_str("héllo").unwrap();
    /// assert_eq!(machine.model().len(), 5);
    /// ```
    pub fn model(&self) -> &DataModel {
        &self.model
    }

    /// The transition table the machine consults on every event.
    ///
    /// ```rust
    /// use namestate::prelude::*;
    ///
    /// let machine = Automaton::<NameState>::default();
    /// assert_eq!(machine.table().initial(), NameState::Initial);
    /// assert_eq!(
    ///     machine.table().target(NameState::Error, Event::Clear),
    ///     Some(NameState::Initial)
    /// );
    /// ```
    pub fn table(&self) -> &TransitionTable<S> {
        self.slot.table()
    }

    /// Get state history (pure)
    pub fn history(&self) -> &StateHistory<S> {
        self.slot.history()
    }
}
