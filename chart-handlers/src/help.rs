use async_trait::async_trait;
use repochart_core::{Bot as CoreBot, Command, CommandHandler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{info, instrument};

/// Reply to `/start` and `/help` (Telegram legacy Markdown).
pub const HELP_TEXT: &str = "🤖 *Bot de GitHub Notifications*

Comandos disponibles:
/grafica - Muestra commits por rama
/grafica [rama] - Muestra detalles de una rama
/resumen - Estadísticas del repositorio";

/// Sends the static help text. Registered for both `/start` and `/help`.
#[derive(Clone)]
pub struct HelpHandler {
    bot: Arc<dyn CoreBot>,
}

impl HelpHandler {
    pub fn new(bot: Arc<dyn CoreBot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CommandHandler for HelpHandler {
    fn name(&self) -> &str {
        "help"
    }

    #[instrument(skip(self, message, command), fields(chat_id = message.chat.id, command = %command.name))]
    async fn handle(&self, message: &Message, command: &Command) -> Result<HandlerResponse> {
        self.bot.send_markdown(&message.chat, HELP_TEXT).await?;
        info!("step: help sent");
        Ok(HandlerResponse::Text)
    }
}
