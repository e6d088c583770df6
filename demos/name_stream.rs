//! Name Stream
//!
//! Feeds each command-line word into the name automaton one character at
//! a time, logging correctness after every character and restarting
//! between words.
//!
//! Run with: cargo run --example name_stream -- alice Bob carOl 4ever
//! Set RUST_LOG=debug to see every transition.

use namestate::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), InputError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut words: Vec<String> = std::env::args().skip(1).collect();
    if words.is_empty() {
        words = vec!["alice".into(), "Bob".into(), "carOl".into(), "4ever".into()];
    }

    let mut machine = Automaton::<NameState>::default();

    for word in &words {
        for c in word.chars() {
            machine.input_character(c)?;
            machine.log_stream_name_correctness();
        }
        tracing::info!(
            word = %word,
            correct = machine.is_correct(),
            transitions = machine.history().len(),
            "Word finished"
        );
        machine.start_new_query();
    }

    Ok(())
}
