//! Chat transport capability.
//!
//! [`Bot`] is transport-agnostic: handlers only ever send text or a photo to a chat. The Telegram
//! implementation lives in repochart-telegram; tests substitute a recording implementation.

use crate::error::Result;
use crate::types::Chat;
use async_trait::async_trait;

/// An image reply held in memory (PNG bytes), with the file name shown to the user and an optional caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub caption: Option<String>,
}

impl Photo {
    /// Creates a photo without caption.
    pub fn new(bytes: Vec<u8>, file_name: impl Into<String>) -> Self {
        Self {
            bytes,
            file_name: file_name.into(),
            caption: None,
        }
    }

    /// Sets the caption.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

/// Narrow reply capability used by command handlers.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a Markdown-formatted text message to the given chat.
    async fn send_markdown(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends an image to the given chat.
    async fn send_photo(&self, chat: &Chat, photo: Photo) -> Result<()>;
}
