//! # Repository data client
//!
//! Read-only access to one source-control repository: branch list, total commit count per branch,
//! the first commits of a branch, repository metadata and top contributors.
//!
//! [`RepoDataClient`] is the seam used by the command handlers; [`GithubClient`] implements it over the
//! GitHub REST API with reqwest. [`stats`] turns client results into the per-branch and per-author
//! count tables that get charted.
//!
//! ## Example
//!
//! ```rust,no_run
//! use repo_client::{stats, GithubClient, GithubConfig};
//!
//! async fn example() -> anyhow::Result<()> {
//!     let config = GithubConfig::from_env()?;
//!     let client = GithubClient::new(&config)?;
//!     let per_branch = stats::branch_commit_counts(&client).await?;
//!     for (branch, commits) in per_branch.iter() {
//!         println!("{branch}: {commits}");
//!     }
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;

mod config;
mod error;
mod github;
mod link;
mod models;
pub mod stats;

pub use config::{
    GithubConfig, RepoId, DEFAULT_COMMIT_SCAN_LIMIT, DEFAULT_CONTRIBUTORS_LIMIT,
    DEFAULT_GITHUB_API_URL,
};
pub use error::RepoError;
pub use github::{GithubClient, MAX_BRANCH_PAGES, PAGE_SIZE};
pub use link::last_page;
pub use models::{Branch, CommitInfo, Contributor, RepositoryInfo};
pub use stats::{AuthorCommitCounts, BranchCommitCounts, CountTable, UNKNOWN_AUTHOR};

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepoError>;

/// Read-only queries against the configured repository.
#[async_trait]
pub trait RepoDataClient: Send + Sync {
    /// The repository this client serves.
    fn repository(&self) -> &RepoId;

    /// All branches, in the order returned by the hosting service.
    async fn list_branches(&self) -> Result<Vec<Branch>>;

    /// Total number of commits reachable from `branch`.
    async fn commit_count(&self, branch: &str) -> Result<u64>;

    /// The first `limit` commits of `branch`, newest first.
    async fn recent_commits(&self, branch: &str, limit: usize) -> Result<Vec<CommitInfo>>;

    /// Repository metadata.
    async fn repository_info(&self) -> Result<RepositoryInfo>;

    /// Contributors ordered by contribution count, at most `limit`.
    async fn top_contributors(&self, limit: usize) -> Result<Vec<Contributor>>;
}
