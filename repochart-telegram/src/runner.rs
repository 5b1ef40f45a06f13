//! REPL runner: converts teloxide messages to core messages and routes them through the [`CommandRouter`].

use anyhow::Result;
use command_router::CommandRouter;
use repochart_core::ToCoreMessage;
use teloxide::prelude::*;
use teloxide::types::BotCommand;
use tracing::{debug, error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;

/// Authenticates with `getMe`, stores the bot's username in the router's slot and publishes the command menu.
/// A rejected token is a startup error; a failed menu update is only logged.
#[instrument(skip(bot, router, menu))]
pub async fn announce(
    bot: &teloxide::Bot,
    router: &CommandRouter,
    menu: &[(&str, &str)],
) -> Result<Option<String>> {
    let me = bot
        .get_me()
        .await
        .map_err(|e| anyhow::anyhow!("Telegram authentication failed (getMe): {}", e))?;
    let username = me.user.username.clone();
    if let Some(username) = &username {
        *router.bot_username().write().await = Some(username.clone());
        info!(username = %username, "Bot username set before repl");
    }

    if !menu.is_empty() {
        let commands: Vec<BotCommand> = menu
            .iter()
            .map(|(name, description)| BotCommand::new(*name, *description))
            .collect();
        match bot.set_my_commands(commands).await {
            Ok(_) => info!(commands = menu.len(), "Command menu published"),
            Err(e) => warn!(error = %e, "setMyCommands failed"),
        }
    }

    Ok(username)
}

/// Starts the REPL. Runs [`announce`] first (failing on a rejected token); then each message is converted to a core message and routed
/// in its own task, so a slow chart never blocks other chats and a failing command never stops the loop.
#[instrument(skip(bot, router, menu))]
pub async fn run_repl(
    bot: teloxide::Bot,
    router: CommandRouter,
    menu: &[(&str, &str)],
) -> Result<()> {
    announce(&bot, &router, menu).await?;

    info!(commands = ?router.commands(), "Starting REPL");

    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let router = router.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            if msg.text().is_none() {
                debug!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    "Received non-text message"
                );
                return respond(());
            }

            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_content = %core_msg.content,
                "Received message"
            );

            tokio::spawn(async move {
                debug!(
                    chat_id = core_msg.chat.id,
                    message_id = %core_msg.id,
                    "step: routing message"
                );
                match router.handle(&core_msg).await {
                    Ok(response) => debug!(response = ?response, "step: message handled"),
                    Err(e) => error!(
                        error = %e,
                        user_id = core_msg.user.id,
                        chat_id = core_msg.chat.id,
                        "Command failed"
                    ),
                }
            });

            respond(())
        }
    })
    .await;

    Ok(())
}
