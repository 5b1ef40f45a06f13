use anyhow::Result;
use command_router::CommandRouter;
use repochart_core::init_tracing;
use repochart_telegram::run_repl;
use tracing::{info, instrument};

use super::components::{build_bot_components, build_router, COMMAND_MENU};
use super::config::BotConfig;

/// Main entry: validate config, init logging, build components and router, then run the REPL until the
/// process is stopped.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    info!(
        repo = %config.github.repository,
        github_api = %config.github.api_url,
        commit_scan_limit = config.github.commit_scan_limit,
        "Initializing bot"
    );

    let components = build_bot_components(&config)?;
    let router = build_router(&components, &config.github);
    let teloxide_bot = components.teloxide_bot.clone();

    info!(commands = ?router.commands(), "Bot started successfully");

    run_repl(teloxide_bot, router, COMMAND_MENU).await
}

/// Builds components and router without starting the REPL. Used by integration tests that drive the
/// router with fake messages.
pub fn build_only(config: &BotConfig) -> Result<CommandRouter> {
    config.validate()?;
    let components = build_bot_components(config)?;
    Ok(build_router(&components, &config.github))
}
