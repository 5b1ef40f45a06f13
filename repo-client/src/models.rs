//! Repository metadata returned by [`crate::RepoDataClient`], and the GitHub JSON payloads they are decoded from.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::stats::UNKNOWN_AUTHOR;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub name: String,
    /// Head commit sha.
    pub sha: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    pub sha: String,
    pub message: String,
    /// Platform account of the author; `None` when the commit email maps to no account.
    pub author_login: Option<String>,
    /// Name recorded in the commit itself.
    pub author_name: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

impl CommitInfo {
    /// Author login, or [`UNKNOWN_AUTHOR`] when the identity is unavailable.
    pub fn author_label(&self) -> &str {
        self.author_login.as_deref().unwrap_or(UNKNOWN_AUTHOR)
    }

    /// First line of the commit message.
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Abbreviated sha (7 chars).
    pub fn short_sha(&self) -> &str {
        self.sha.get(..7).unwrap_or(&self.sha)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryInfo {
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub default_branch: String,
    pub stars: u64,
    pub forks: u64,
    pub watchers: u64,
    pub open_issues: u64,
    pub language: Option<String>,
    /// Size in kilobytes, as reported by the hosting service.
    pub size_kb: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contributor {
    pub login: String,
    pub contributions: u64,
}

// --- GitHub REST payloads ---

#[derive(Debug, Deserialize)]
pub(crate) struct BranchPayload {
    name: String,
    commit: ShaPayload,
}

#[derive(Debug, Deserialize)]
struct ShaPayload {
    sha: String,
}

impl From<BranchPayload> for Branch {
    fn from(p: BranchPayload) -> Self {
        Self {
            name: p.name,
            sha: p.commit.sha,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommitPayload {
    sha: String,
    commit: GitCommitPayload,
    /// `null` when the commit email is not linked to an account.
    author: Option<AccountPayload>,
}

#[derive(Debug, Deserialize)]
struct GitCommitPayload {
    message: String,
    author: Option<GitAuthorPayload>,
}

#[derive(Debug, Deserialize)]
struct GitAuthorPayload {
    name: Option<String>,
    date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct AccountPayload {
    login: Option<String>,
}

impl From<CommitPayload> for CommitInfo {
    fn from(p: CommitPayload) -> Self {
        let (author_name, date) = match p.commit.author {
            Some(a) => (a.name, a.date),
            None => (None, None),
        };
        Self {
            sha: p.sha,
            message: p.commit.message,
            author_login: p.author.and_then(|a| a.login),
            author_name,
            date,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RepositoryPayload {
    name: String,
    full_name: String,
    description: Option<String>,
    default_branch: String,
    stargazers_count: u64,
    forks_count: u64,
    watchers_count: u64,
    open_issues_count: u64,
    language: Option<String>,
    size: u64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<RepositoryPayload> for RepositoryInfo {
    fn from(p: RepositoryPayload) -> Self {
        Self {
            name: p.name,
            full_name: p.full_name,
            description: p.description.filter(|d| !d.trim().is_empty()),
            default_branch: p.default_branch,
            stars: p.stargazers_count,
            forks: p.forks_count,
            watchers: p.watchers_count,
            open_issues: p.open_issues_count,
            language: p.language,
            size_kb: p.size,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ContributorPayload {
    login: Option<String>,
    contributions: u64,
}

impl From<ContributorPayload> for Contributor {
    fn from(p: ContributorPayload) -> Self {
        Self {
            login: p.login.unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
            contributions: p.contributions,
        }
    }
}

/// Error body: `{"message": "...", "documentation_url": "..."}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorPayload {
    pub message: String,
}
