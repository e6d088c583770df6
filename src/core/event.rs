//! Transition signals cast by states.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification outcome of the most recent input.
///
/// Events are plain tags. They describe what kind of input a state saw,
/// never which state should come next; that decision belongs to the
/// transition table held by the event sink.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Event {
    /// The stream was restarted.
    Clear,
    /// The character keeps the accumulated input correct.
    Correct,
    /// The character breaks correctness.
    Incorrect,
}

impl Event {
    /// Every event, in declaration order.
    pub const ALL: [Event; 3] = [Event::Clear, Event::Correct, Event::Incorrect];

    /// Get the event's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Correct => "Correct",
            Self::Incorrect => "Incorrect",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
