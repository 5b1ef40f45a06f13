//! # repochart-telegram
//!
//! Telegram layer: adapters, [`repochart_core::Bot`] implementation, connectivity config, REPL runner.
//! Handles only Telegram connectivity and command routing; chart and repository logic live elsewhere.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::TelegramConfig;
pub use runner::{announce, run_repl};
