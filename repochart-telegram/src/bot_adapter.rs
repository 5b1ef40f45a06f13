//! Wraps teloxide::Bot and implements [`repochart_core::Bot`]. Production code sends through Telegram; tests can substitute another Bot impl.

use async_trait::async_trait;
use repochart_core::{Bot as CoreBot, Chat, CoreError, Photo, Result};
use teloxide::prelude::*;
use teloxide::types::{ChatId, InputFile, ParseMode};
use tracing::debug;

/// Thin wrapper around teloxide::Bot that implements repochart-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| CoreError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_markdown(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .parse_mode(ParseMode::Markdown)
            .await
            .map_err(|e| CoreError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_photo(&self, chat: &Chat, photo: Photo) -> Result<()> {
        debug!(
            chat_id = chat.id,
            file_name = %photo.file_name,
            bytes = photo.bytes.len(),
            "Uploading photo"
        );
        let file = InputFile::memory(photo.bytes).file_name(photo.file_name);
        let mut request = self.bot.send_photo(ChatId(chat.id), file);
        if let Some(caption) = photo.caption {
            request = request.caption(caption);
        }
        request
            .await
            .map_err(|e| CoreError::Bot(e.to_string()))?;
        Ok(())
    }
}
