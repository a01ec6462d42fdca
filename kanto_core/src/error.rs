use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoadError>;

#[derive(Debug, Error)]
pub enum LoadError {
    /// Network failure or non-success status on the listing or a detail fetch.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Body did not have the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl LoadError {
    pub const USER_MESSAGE: &'static str =
        "Failed to reach the catalog server. Please try again later.";

    /// The message shown to the user. Both kinds collapse into the same text.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        Self::USER_MESSAGE
    }

    pub fn transport(detail: impl Into<String>) -> Self {
        Self::Transport(detail.into())
    }

    pub fn parse(detail: impl Into<String>) -> Self {
        Self::Parse(detail.into())
    }
}
