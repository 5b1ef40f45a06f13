//! Bot configuration: TelegramConfig (chat transport) + GithubConfig (repository) + log file. Loaded from env.

mod bot_config;


pub use bot_config::{log_file_from_env, BotConfig, DEFAULT_LOG_FILE};
