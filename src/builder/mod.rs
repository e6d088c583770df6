//! Builder API for ergonomic machine construction.
//!
//! Transition tables and automatons are assembled with fluent builders whose
//! `build()` validates the configuration instead of panicking later.

pub mod automaton;
pub mod error;
pub mod table;

pub use automaton::AutomatonBuilder;
pub use error::BuildError;
pub use table::TransitionTableBuilder;
