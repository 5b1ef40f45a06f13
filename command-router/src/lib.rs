//! # Command router
//!
//! Maps each inbound command token to exactly one [`CommandHandler`]. Plain text, unknown commands and
//! commands addressed to another bot (`/cmd@otherbot`) are ignored without a reply. Handlers are stateless;
//! every message is routed independently.

use repochart_core::{CommandHandler, HandlerResponse, Message, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

/// Command name → handler table. Cheap to clone (handlers are shared).
#[derive(Clone)]
pub struct CommandRouter {
    routes: HashMap<String, Arc<dyn CommandHandler>>,
    bot_username: Arc<RwLock<Option<String>>>,
}

impl CommandRouter {
    /// Creates an empty router. `bot_username` is filled by the transport once known (`get_me`).
    pub fn new(bot_username: Arc<RwLock<Option<String>>>) -> Self {
        Self {
            routes: HashMap::new(),
            bot_username,
        }
    }

    /// Registers `handler` for `/name` (case-insensitive, without the slash). A later registration
    /// for the same name replaces the earlier one.
    pub fn add_command(mut self, name: &str, handler: Arc<dyn CommandHandler>) -> Self {
        self.routes
            .insert(name.trim_start_matches('/').to_ascii_lowercase(), handler);
        self
    }

    /// Registered command names, sorted.
    pub fn commands(&self) -> Vec<String> {
        let mut names: Vec<String> = self.routes.keys().cloned().collect();
        names.sort();
        names
    }

    /// Name of the handler registered for `command`, if any.
    pub fn handler_name(&self, command: &str) -> Option<&str> {
        self.routes
            .get(&command.trim_start_matches('/').to_ascii_lowercase())
            .map(|handler| handler.name())
    }

    /// Shared bot username slot.
    pub fn bot_username(&self) -> Arc<RwLock<Option<String>>> {
        self.bot_username.clone()
    }

    /// Routes one message. Returns [`HandlerResponse::Ignored`] when no handler applies; otherwise the
    /// handler's own response. Transport errors from the handler are returned as `Err`.
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, user_id = message.user.id))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(command) = message.command() else {
            debug!("step: not a command, ignored");
            return Ok(HandlerResponse::Ignored);
        };

        if let Some(username) = self.bot_username.read().await.as_deref() {
            if !command.is_addressed_to(username) {
                debug!(
                    command = %command.name,
                    target = ?command.target,
                    "step: command addressed to another bot, ignored"
                );
                return Ok(HandlerResponse::Ignored);
            }
        }

        let Some(handler) = self.routes.get(&command.name) else {
            debug!(command = %command.name, "step: unknown command, ignored");
            return Ok(HandlerResponse::Ignored);
        };

        info!(
            command = %command.name,
            args = command.args.len(),
            handler = handler.name(),
            "step: dispatching command"
        );

        let response = handler.handle(message, &command).await?;

        info!(
            command = %command.name,
            response = ?response,
            "step: command done"
        );

        Ok(response)
    }
}

// Integration tests live in tests/command_router_test.rs
