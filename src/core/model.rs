//! Accumulated input buffer.

/// Characters received since the last restart.
///
/// The model is append-only apart from [`DataModel::clear`]. It is owned by
/// the automaton and lent to whichever state is current; states read and
/// extend it but never replace it.
///
/// # Example
///
/// ```rust
/// use namestate::core::DataModel;
///
/// let mut model = DataModel::new();
/// model.add_character('a');
/// model.add_character('B');
/// assert_eq!(model.current_string(), "aB");
///
/// model.clear();
/// assert!(model.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataModel {
    current: String,
}

impl DataModel {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a character. Accepts any `char`.
    pub fn add_character(&mut self, character: char) {
        self.current.push(character);
    }

    /// The accumulated string as it stands.
    pub fn current_string(&self) -> &str {
        &self.current
    }

    /// Reset the accumulated string to empty.
    pub fn clear(&mut self) {
        self.current.clear();
    }

    /// Number of characters accumulated (not bytes).
    pub fn len(&self) -> usize {
        self.current.chars().count()
    }

    /// Whether nothing has been accumulated since the last restart.
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }
}
