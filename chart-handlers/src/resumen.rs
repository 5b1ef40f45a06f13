use async_trait::async_trait;
use repo_client::RepoDataClient;
use repochart_core::{Bot as CoreBot, Command, CommandHandler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::error_reply;
use crate::summary::RepositorySummary;

/// `/resumen`: repository statistics as plain text.
#[derive(Clone)]
pub struct ResumenHandler {
    bot: Arc<dyn CoreBot>,
    client: Arc<dyn RepoDataClient>,
    contributors_limit: usize,
}

impl ResumenHandler {
    pub fn new(
        bot: Arc<dyn CoreBot>,
        client: Arc<dyn RepoDataClient>,
        contributors_limit: usize,
    ) -> Self {
        Self {
            bot,
            client,
            contributors_limit,
        }
    }
}

#[async_trait]
impl CommandHandler for ResumenHandler {
    fn name(&self) -> &str {
        "resumen"
    }

    #[instrument(skip(self, message, _command), fields(chat_id = message.chat.id, user_id = message.user.id))]
    async fn handle(&self, message: &Message, _command: &Command) -> Result<HandlerResponse> {
        match RepositorySummary::fetch(self.client.as_ref(), self.contributors_limit).await {
            Ok(summary) => {
                self.bot.send_message(&message.chat, &summary.render()).await?;
                info!("step: summary sent");
                Ok(HandlerResponse::Text)
            }
            Err(e) => {
                warn!(error = %e, "Summary failed");
                let reply = error_reply(&e);
                self.bot.send_message(&message.chat, &reply).await?;
                Ok(HandlerResponse::Failed(reply))
            }
        }
    }
}
