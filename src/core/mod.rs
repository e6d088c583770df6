//! Core classifier types.
//!
//! This module contains the building blocks every rule set shares:
//! - The accumulated input buffer (`DataModel`)
//! - Transition signals (`Event`) and the capability to cast them (`EventSink`)
//! - The `State` trait with restart, input and reporting operations
//! - Injected correctness reporting and transition history

mod error;
mod event;
mod history;
mod model;
mod report;
mod sink;
mod state;

pub use error::{validate_character, validate_code_point, InputError};
pub use event::Event;
pub use history::{StateHistory, StateTransition, DEFAULT_HISTORY_LIMIT};
pub use model::DataModel;
pub use report::{CorrectnessReport, Reporter};
pub use sink::EventSink;
pub use state::State;
