//! Namestate: an event-driven finite-state machine for incremental input
//! classification.
//!
//! Characters are fed one at a time. The current state classifies each one
//! and casts an [`Event`](core::Event); a transition table, held by the
//! event sink rather than by the states, decides which state comes next.
//! The accumulated input is kept in a single buffer owned by the
//! automaton.
//!
//! # Core Concepts
//!
//! - **State**: per-variant classification policy via the `State` trait
//! - **Event / EventSink**: the indirection between "what happened" and
//!   "what comes next"
//! - **TransitionTable**: the topology, built and validated separately
//! - **Automaton**: owns the buffer, the current state and the reporter
//!
//! # Example
//!
//! ```rust
//! use namestate::prelude::*;
//!
//! let mut machine = Automaton::<NameState>::default();
//!
//! for c in "abc".chars() {
//!     machine.input_character(c).unwrap();
//!     assert_eq!(machine.current_state(), NameState::CorrectName);
//!     assert!(machine.is_correct());
//! }
//!
//! machine.input_character('!').unwrap();
//! assert!(!machine.is_correct());
//! assert_eq!(machine.current_string(), "abc!");
//!
//! machine.start_new_query();
//! assert!(machine.is_correct());
//! assert_eq!(machine.current_string(), "");
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{DataModel, Event, EventSink, InputError, Reporter, State};
pub use crate::machine::{Automaton, TransitionTable};

/// Everything needed to drive the built-in name rule.
pub mod prelude {
    pub use crate::builder::{AutomatonBuilder, BuildError, TransitionTableBuilder};
    pub use crate::core::{
        CorrectnessReport, DataModel, Event, EventSink, InputError, Reporter, State,
    };
    pub use crate::machine::{Automaton, TransitionTable};
    pub use crate::rules::{name_table, NameState};
}
