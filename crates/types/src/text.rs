#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextError {
    #[error("Text cannot be empty")]
    Empty,
}

/// Hospital identity text (name, tax id) that must not be blank.
///
/// Stored trimmed, so `"  Hospital Central "` and `"Hospital Central"` are the same value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// # Errors
    ///
    /// [`TextError::Empty`] when nothing is left after trimming.
    pub fn new(raw: &str) -> Result<Self, TextError> {
        match raw.trim() {
            "" => Err(TextError::Empty),
            value => Ok(Self(value.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
