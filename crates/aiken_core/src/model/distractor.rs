//! Single answer option of a test item.

/// One answer option as read from a distractor line.
///
/// The display letter is not stored here; it is derived from the option's
/// position inside a `DistractorCollection`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distractor {
    text: String,
}

impl Distractor {
    /// Creates a distractor without validating its text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<&str> for Distractor {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Distractor {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
