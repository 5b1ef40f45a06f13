//! Component factory: builds BotComponents from config and wires the command router. Isolates assembly logic from runner.

use anyhow::{Context, Result};
use chart_handlers::{GraficaHandler, HelpHandler, ResumenHandler};
use chart_renderer::{ChartRenderer, PlottersRenderer};
use command_router::CommandRouter;
use repo_client::{GithubClient, GithubConfig, RepoDataClient};
use repochart_core::Bot as CoreBot;
use repochart_telegram::TelegramBotAdapter;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument};

use super::config::BotConfig;

/// Commands published to Telegram's command menu, with their descriptions.
pub const COMMAND_MENU: &[(&str, &str)] = &[
    ("start", "Muestra la ayuda"),
    ("help", "Muestra la ayuda"),
    ("grafica", "Commits por rama, o por autor con /grafica <rama>"),
    ("resumen", "Estadísticas del repositorio"),
];

/// Core dependencies for run_bot; produced by the component factory.
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    pub bot: Arc<dyn CoreBot>,
    pub client: Arc<dyn RepoDataClient>,
    pub renderer: Arc<dyn ChartRenderer>,
    pub bot_username: Arc<RwLock<Option<String>>>,
}

/// Builds the GitHub client and chart renderer shared by all handlers.
pub fn build_services(
    github: &GithubConfig,
) -> Result<(Arc<dyn RepoDataClient>, Arc<dyn ChartRenderer>)> {
    let client: Arc<dyn RepoDataClient> =
        Arc::new(GithubClient::new(github).context("Failed to create GitHub client")?);
    let renderer: Arc<dyn ChartRenderer> = Arc::new(PlottersRenderer::new());
    Ok((client, renderer))
}

#[instrument(skip(config))]
pub fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let teloxide_bot = config.telegram.build_bot();
    let bot: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let (client, renderer) = build_services(&config.github)?;

    info!(
        repo = %config.github.repository,
        telegram_token = %config.telegram.masked_token(),
        "Bot components built"
    );

    Ok(BotComponents {
        teloxide_bot,
        bot,
        client,
        renderer,
        bot_username: Arc::new(RwLock::new(None)),
    })
}

/// Registers `/start`, `/help`, `/grafica` and `/resumen`.
pub fn build_router(components: &BotComponents, github: &GithubConfig) -> CommandRouter {
    let help = Arc::new(HelpHandler::new(components.bot.clone()));
    let grafica = Arc::new(GraficaHandler::new(
        components.bot.clone(),
        components.client.clone(),
        components.renderer.clone(),
        github.commit_scan_limit,
    ));
    let resumen = Arc::new(ResumenHandler::new(
        components.bot.clone(),
        components.client.clone(),
        github.contributors_limit,
    ));

    CommandRouter::new(components.bot_username.clone())
        .add_command("start", help.clone())
        .add_command("help", help)
        .add_command("grafica", grafica)
        .add_command("resumen", resumen)
}
