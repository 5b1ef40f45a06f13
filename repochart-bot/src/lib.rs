//! # repochart-bot
//!
//! Bootstrap for the repochart Telegram bot: configuration, component wiring, the bot runner and the
//! `repochart` CLI.
//!
//! ## Commands
//!
//! - `/start`, `/help`: help text
//! - `/grafica`: bar chart of commits per branch
//! - `/grafica <rama>`: pie chart of commits per author over the first commits of a branch
//! - `/resumen`: repository statistics

pub mod cli;
pub mod components;
pub mod config;
pub mod runner;

pub use cli::{handle_chart, handle_summary, load_config, Cli, Commands};
pub use components::{build_bot_components, build_router, BotComponents, COMMAND_MENU};
pub use config::BotConfig;
pub use runner::{build_only, run_bot};
