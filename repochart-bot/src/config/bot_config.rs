//! Full bot config: Telegram connectivity + GitHub repository access + log file.

use anyhow::{Context, Result};
use repo_client::GithubConfig;
use repochart_telegram::TelegramConfig;
use std::env;

pub const DEFAULT_LOG_FILE: &str = "logs/repochart.log";

/// Log file path from LOG_FILE, or [`DEFAULT_LOG_FILE`].
pub fn log_file_from_env() -> String {
    env::var("LOG_FILE")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string())
}

/// Read once at process entry and passed by reference into component construction.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    pub github: GithubConfig,
    pub log_file: String,
}

impl BotConfig {
    /// Loads from environment variables. `token` overrides TELEGRAM_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = match token {
            Some(token) => {
                let mut config = TelegramConfig::with_token(token);
                config.telegram_api_url = env::var("TELEGRAM_API_URL")
                    .or_else(|_| env::var("TELOXIDE_API_URL"))
                    .ok();
                config
            }
            None => TelegramConfig::from_env()?,
        };
        let github = GithubConfig::from_env().context("GitHub configuration")?;

        Ok(Self {
            telegram,
            github,
            log_file: log_file_from_env(),
        })
    }

    /// Validate both sections (URLs parse, token present, scan limit positive).
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        self.github.validate()?;
        Ok(())
    }
}
