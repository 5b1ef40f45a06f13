//! Error type for the bot core.

use thiserror::Error;

/// Top-level error. Handlers reply data-source and rendering failures to the chat themselves, so only
/// chat transport failures travel as `CoreError`.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Bot error: {0}")]
    Bot(String),
}

/// Result type for core operations; uses [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bot_error_display() {
        let err = CoreError::Bot("chat not found".to_string());
        assert_eq!(err.to_string(), "Bot error: chat not found");
    }
}
