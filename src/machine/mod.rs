//! The controller side of the machine.
//!
//! - `TransitionTable`: which state follows which event
//! - `StateSlot`: the event sink that applies the table to the current state
//! - `Automaton`: owns the slot, the input buffer and the reporter, and
//!   feeds characters to whichever state is current

mod automaton;
mod slot;
mod table;

pub use automaton::Automaton;
pub use slot::StateSlot;
pub use table::TransitionTable;
