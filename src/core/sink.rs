//! The capability states use to publish events.

use super::event::Event;

/// Receiver of events cast by states.
///
/// Implementors own the decision of what an event means. The automaton's
/// [`StateSlot`](crate::machine::StateSlot) swaps the current state through
/// a transition table; a plain `Vec<Event>` just records what was cast,
/// which is enough to test a state's classification in isolation.
pub trait EventSink {
    /// Publish an event. Any state change must be complete on return.
    fn cast_event(&mut self, event: Event);
}

impl EventSink for Vec<Event> {
    fn cast_event(&mut self, event: Event) {
        self.push(event);
    }
}
