//! Concrete rule sets.

mod name;

pub use name::{name_table, NameState};
