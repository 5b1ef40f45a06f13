//! Repository summary text for `/resumen` and the `summary` CLI subcommand.

use chrono::{DateTime, Utc};
use repo_client::{CommitInfo, Contributor, RepoDataClient, RepoError, RepositoryInfo, Result};
use std::fmt::Write;
use tracing::{info, instrument};

/// Everything `/resumen` reports, gathered in one pass.
#[derive(Debug, Clone)]
pub struct RepositorySummary {
    pub info: RepositoryInfo,
    pub branch_count: usize,
    pub latest_commit: Option<CommitInfo>,
    pub contributors: Vec<Contributor>,
}

impl RepositorySummary {
    /// Fetches metadata, branch list, the default branch head commit and the top contributors.
    #[instrument(skip(client), fields(repo = %client.repository()))]
    pub async fn fetch(client: &dyn RepoDataClient, contributors_limit: usize) -> Result<Self> {
        let info = client.repository_info().await?;
        let branch_count = client.list_branches().await?.len();
        let latest_commit = match client.recent_commits(&info.default_branch, 1).await {
            Ok(commits) => commits.into_iter().next(),
            // 409 Conflict: the repository has no commits yet.
            Err(RepoError::Api { status: 409, .. }) => None,
            Err(e) => return Err(e),
        };
        let contributors = client.top_contributors(contributors_limit).await?;

        info!(
            branches = branch_count,
            contributors = contributors.len(),
            "step: repository summary fetched"
        );

        Ok(Self {
            info,
            branch_count,
            latest_commit,
            contributors,
        })
    }

    /// Plain-text rendering (no Markdown: descriptions and commit messages are free text).
    pub fn render(&self) -> String {
        let info = &self.info;
        let mut out = String::new();

        let _ = writeln!(out, "📊 Resumen de {}", info.full_name);
        if let Some(description) = &info.description {
            let _ = writeln!(out, "{}", description);
        }
        out.push('\n');
        let _ = writeln!(out, "⭐ Estrellas: {}", info.stars);
        let _ = writeln!(out, "🍴 Forks: {}", info.forks);
        let _ = writeln!(out, "👀 Observadores: {}", info.watchers);
        let _ = writeln!(out, "🐛 Issues abiertas: {}", info.open_issues);
        let _ = writeln!(
            out,
            "💻 Lenguaje: {}",
            info.language.as_deref().unwrap_or("No especificado")
        );
        let _ = writeln!(out, "📦 Tamaño: {}", format_size(info.size_kb));
        let _ = writeln!(out, "📅 Creado: {}", format_date(&info.created_at));
        let _ = writeln!(out, "🔄 Actualizado: {}", format_date(&info.updated_at));
        let _ = writeln!(out, "🌿 Ramas: {}", self.branch_count);

        out.push('\n');
        match &self.latest_commit {
            Some(commit) => {
                let _ = writeln!(out, "📝 Último commit en {}:", info.default_branch);
                let author = commit
                    .author_login
                    .as_deref()
                    .or(commit.author_name.as_deref())
                    .unwrap_or(commit.author_label());
                let _ = write!(out, "{} {} ({}", commit.short_sha(), commit.summary(), author);
                if let Some(date) = &commit.date {
                    let _ = write!(out, ", {}", format_date(date));
                }
                out.push_str(")\n");
            }
            None => {
                let _ = writeln!(out, "📝 Sin commits en {}", info.default_branch);
            }
        }

        if !self.contributors.is_empty() {
            out.push('\n');
            out.push_str("👥 Principales contribuidores:\n");
            for (i, c) in self.contributors.iter().enumerate() {
                let _ = writeln!(out, "{}. {}: {} commits", i + 1, c.login, c.contributions);
            }
        }

        out.trim_end().to_string()
    }
}

fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Human-readable size from kilobytes.
pub fn format_size(kb: u64) -> String {
    const MB: u64 = 1024;
    const GB: u64 = 1024 * 1024;
    if kb < MB {
        format!("{} KB", kb)
    } else if kb < GB {
        format!("{:.1} MB", kb as f64 / MB as f64)
    } else {
        format!("{:.2} GB", kb as f64 / GB as f64)
    }
}
