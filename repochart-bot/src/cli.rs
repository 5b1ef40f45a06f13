//! CLI parser and the one-shot `chart` / `summary` commands.

use anyhow::{Context, Result};
use chart_handlers::{charts, RepositorySummary};
use chart_renderer::write_chart;
use clap::{Parser, Subcommand};
use repo_client::GithubConfig;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::components::build_services;
use crate::config::BotConfig;

#[derive(Parser)]
#[command(name = "repochart")]
#[command(about = "Telegram bot charting commits of a GitHub repository", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override TELEGRAM_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Render a chart to a file: commits per branch, or commits per author of BRANCH.
    Chart {
        /// Branch name; several words are joined with spaces.
        branch: Vec<String>,
        /// Output PNG path (default chart.png, or pie.png with a branch).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the repository summary.
    Summary,
}

/// Load BotConfig from environment. If `token` is provided it overrides TELEGRAM_TOKEN.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}

fn load_github_config() -> Result<GithubConfig> {
    let config = GithubConfig::from_env().context("GitHub configuration")?;
    config.validate()?;
    Ok(config)
}

/// Output path for `chart`: explicit, or the default file name for the chart kind.
pub fn chart_output_path(branch: Option<&str>, output: Option<PathBuf>) -> PathBuf {
    output.unwrap_or_else(|| {
        PathBuf::from(match branch {
            Some(_) => charts::AUTHOR_CHART_FILE,
            None => charts::BRANCH_CHART_FILE,
        })
    })
}

/// Handle the chart command. Returns the written path, or `None` when there was nothing to chart.
pub async fn handle_chart(branch: Vec<String>, output: Option<PathBuf>) -> Result<Option<PathBuf>> {
    let github = load_github_config()?;
    let (client, renderer) = build_services(&github)?;

    let branch = (!branch.is_empty()).then(|| branch.join(" "));
    let path = chart_output_path(branch.as_deref(), output);

    let photo = match branch.as_deref() {
        Some(branch) => Some(
            charts::author_chart(client.as_ref(), renderer, branch, github.commit_scan_limit)
                .await?,
        ),
        None => charts::branch_chart(client.as_ref(), renderer).await?,
    };

    match photo {
        Some(photo) => {
            write_chart(Path::new(&path), &photo.bytes)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "Chart saved");
            Ok(Some(path))
        }
        None => Ok(None),
    }
}

/// Handle the summary command: the `/resumen` text.
pub async fn handle_summary() -> Result<String> {
    let github = load_github_config()?;
    let (client, _) = build_services(&github)?;
    let summary = RepositorySummary::fetch(client.as_ref(), github.contributors_limit).await?;
    Ok(summary.render())
}
