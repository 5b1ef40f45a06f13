//! # chart-handlers
//!
//! Command handlers for the repochart bot:
//!
//! - [`HelpHandler`]: `/start`, `/help`
//! - [`GraficaHandler`]: `/grafica` (per-branch bar chart) and `/grafica <branch>` (per-author pie chart)
//! - [`ResumenHandler`]: `/resumen` (repository statistics)
//!
//! Data-source and rendering failures are caught here and replied as `❌ Error: <text>`; only chat
//! transport failures reach the caller.

use chart_renderer::RenderError;
use repo_client::RepoError;
use thiserror::Error;

pub mod charts;
mod grafica;
mod help;
mod resumen;
pub mod summary;

pub use grafica::GraficaHandler;
pub use help::{HelpHandler, HELP_TEXT};
pub use resumen::ResumenHandler;
pub use summary::RepositorySummary;

/// Prefix of every failure reply.
pub const ERROR_PREFIX: &str = "❌ Error:";

/// Failure while producing a chart. Displays the underlying error text unchanged.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Repo(#[from] RepoError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("rendering task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Chat reply for a failed command.
pub fn error_reply(error: &dyn std::fmt::Display) -> String {
    format!("{} {}", ERROR_PREFIX, error)
}
