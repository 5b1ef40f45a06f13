//! Chart production shared by `/grafica` and the `chart` CLI subcommand: fetch counts, render off the async
//! runtime, wrap as a [`Photo`].

use chart_renderer::ChartRenderer;
use repo_client::{stats, CountTable, RepoDataClient};
use repochart_core::Photo;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::CommandError;

pub const BRANCH_CHART_TITLE: &str = "Commits por Rama";
pub const BRANCH_CHART_FILE: &str = "chart.png";
pub const AUTHOR_CHART_FILE: &str = "pie.png";

pub fn author_chart_title(branch: &str) -> String {
    format!("Commits en {}", branch)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChartKind {
    Bar,
    Pie,
}

/// Renders on a blocking thread; plotters drawing and PNG encoding are CPU-bound. Bars keep the
/// table order, pie slices go largest first.
async fn render(
    renderer: Arc<dyn ChartRenderer>,
    kind: ChartKind,
    title: String,
    table: &CountTable,
) -> Result<Vec<u8>, CommandError> {
    let entries = match kind {
        ChartKind::Bar => table.entries().to_vec(),
        ChartKind::Pie => table.sorted_desc(),
    };
    let bytes = tokio::task::spawn_blocking(move || match kind {
        ChartKind::Bar => renderer.bar_chart(&title, &entries),
        ChartKind::Pie => renderer.pie_chart(&title, &entries),
    })
    .await??;
    Ok(bytes)
}

/// Commits per branch as a bar chart. `Ok(None)` when the repository has no branches.
#[instrument(skip(client, renderer), fields(repo = %client.repository()))]
pub async fn branch_chart(
    client: &dyn RepoDataClient,
    renderer: Arc<dyn ChartRenderer>,
) -> Result<Option<Photo>, CommandError> {
    let counts = stats::branch_commit_counts(client).await?;
    if counts.is_empty() {
        return Ok(None);
    }

    let bytes = render(renderer, ChartKind::Bar, BRANCH_CHART_TITLE.to_string(), &counts).await?;
    info!(bars = counts.len(), bytes = bytes.len(), "step: branch chart rendered");

    Ok(Some(
        Photo::new(bytes, BRANCH_CHART_FILE).with_caption(BRANCH_CHART_TITLE),
    ))
}

/// Commits per author among the first `cap` commits of `branch`, as a pie chart.
#[instrument(skip(client, renderer), fields(repo = %client.repository()))]
pub async fn author_chart(
    client: &dyn RepoDataClient,
    renderer: Arc<dyn ChartRenderer>,
    branch: &str,
    cap: usize,
) -> Result<Photo, CommandError> {
    let counts = stats::author_commit_counts(client, branch, cap).await?;
    let title = author_chart_title(branch);

    let bytes = render(renderer, ChartKind::Pie, title.clone(), &counts).await?;
    info!(
        branch = %branch,
        slices = counts.len(),
        examined = counts.total(),
        bytes = bytes.len(),
        "step: author chart rendered"
    );

    Ok(Photo::new(bytes, AUTHOR_CHART_FILE).with_caption(format!(
        "{} ({} commits analizados)",
        title,
        counts.total()
    )))
}
