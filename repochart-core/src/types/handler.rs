//! CommandHandler trait and transport conversion traits.

use async_trait::async_trait;

use super::{command::Command, message::Message, response::HandlerResponse, user::User};

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// Handles one registered command. Implementations reply through their own [`crate::Bot`] and
/// report what they sent. Failures of the data source or renderer are replied to the chat and
/// returned as [`HandlerResponse::Failed`]; only transport failures are returned as `Err`.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Short handler name for logs.
    fn name(&self) -> &str;

    async fn handle(
        &self,
        message: &Message,
        command: &Command,
    ) -> crate::error::Result<HandlerResponse>;
}
