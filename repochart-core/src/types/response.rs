//! Dispatch outcome type.

/// What a command handler (or the router) did with a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Not a command for this bot, or an unknown command; nothing was sent.
    Ignored,
    /// A text reply was sent.
    Text,
    /// A photo reply was sent.
    Photo,
    /// The command failed; the failure text (already sent to the chat) is attached.
    Failed(String),
}
