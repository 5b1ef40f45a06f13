//! `/grafica`: bar chart of commits per branch, or with arguments, pie chart of commits per author for the
//! branch named by the joined arguments.

use async_trait::async_trait;
use chart_renderer::ChartRenderer;
use repo_client::RepoDataClient;
use repochart_core::{Bot as CoreBot, Command, CommandHandler, HandlerResponse, Message, Result};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, instrument, warn};

use crate::charts;
use crate::error_reply;

const MSG_NO_BRANCHES: &str = "ℹ️ El repositorio no tiene ramas.";

#[derive(Clone)]
pub struct GraficaHandler {
    bot: Arc<dyn CoreBot>,
    client: Arc<dyn RepoDataClient>,
    renderer: Arc<dyn ChartRenderer>,
    /// Commits examined per author chart.
    scan_limit: usize,
}

impl GraficaHandler {
    pub fn new(
        bot: Arc<dyn CoreBot>,
        client: Arc<dyn RepoDataClient>,
        renderer: Arc<dyn ChartRenderer>,
        scan_limit: usize,
    ) -> Self {
        Self {
            bot,
            client,
            renderer,
            scan_limit,
        }
    }
}

#[async_trait]
impl CommandHandler for GraficaHandler {
    fn name(&self) -> &str {
        "grafica"
    }

    #[instrument(skip(self, message, command), fields(chat_id = message.chat.id, user_id = message.user.id))]
    async fn handle(&self, message: &Message, command: &Command) -> Result<HandlerResponse> {
        let started = Instant::now();

        let outcome = match command.argument_text() {
            None => {
                info!("step: building branch chart");
                charts::branch_chart(self.client.as_ref(), self.renderer.clone()).await
            }
            Some(branch) => {
                info!(branch = %branch, "step: building author chart");
                charts::author_chart(
                    self.client.as_ref(),
                    self.renderer.clone(),
                    &branch,
                    self.scan_limit,
                )
                .await
                .map(Some)
            }
        };

        match outcome {
            Ok(Some(photo)) => {
                self.bot.send_photo(&message.chat, photo).await?;
                info!(
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "step: chart sent"
                );
                Ok(HandlerResponse::Photo)
            }
            Ok(None) => {
                self.bot.send_message(&message.chat, MSG_NO_BRANCHES).await?;
                Ok(HandlerResponse::Text)
            }
            Err(e) => {
                warn!(error = %e, "Chart failed");
                let reply = error_reply(&e);
                self.bot.send_message(&message.chat, &reply).await?;
                Ok(HandlerResponse::Failed(reply))
            }
        }
    }
}
