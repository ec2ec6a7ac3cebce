use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToggleError {
    #[error("No window object")]
    NoWindow,
    #[error("No document")]
    NoDocument,
    #[error("No body")]
    NoBody,
    #[error("No element with id `{0}`")]
    MissingElement(String),
    #[error("Element `{0}` is not a checkbox input")]
    NotCheckbox(String),
    #[error("Failed to listen for `{0}`")]
    Listener(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Invalid config: {0}")]
    Config(String),
}

impl ToggleError {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Element lookups abort installation; storage and config problems only degrade it.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::Storage(_) | Self::Config(_))
    }
}
