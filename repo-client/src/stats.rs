//! Commit aggregation: per-branch totals and per-author counts over the first N commits of a branch.
//!
//! Both results are fresh per call and owned by the caller; nothing is cached.

use std::collections::HashMap;
use tracing::{info, instrument};

use crate::models::CommitInfo;
use crate::{RepoDataClient, Result};

/// Label used for commits whose author identity cannot be resolved.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Label → count table with unique labels, kept in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountTable {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

/// Branch name → total commit count.
pub type BranchCommitCounts = CountTable;
/// Author login (or [`UNKNOWN_AUTHOR`]) → commits among those examined.
pub type AuthorCommitCounts = CountTable;

impl CountTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to `label`, inserting it at the end when new.
    pub fn add(&mut self, label: &str, amount: u64) {
        match self.index.get(label) {
            Some(&i) => self.entries[i].1 += amount,
            None => {
                self.index.insert(label.to_string(), self.entries.len());
                self.entries.push((label.to_string(), amount));
            }
        }
    }

    /// Sets `label` to `value`, replacing any previous value in place.
    pub fn set(&mut self, label: &str, value: u64) {
        match self.index.get(label) {
            Some(&i) => self.entries[i].1 = value,
            None => {
                self.index.insert(label.to_string(), self.entries.len());
                self.entries.push((label.to_string(), value));
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<u64> {
        self.index.get(label).map(|&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.entries.iter().map(|(label, n)| (label.as_str(), *n))
    }

    pub fn entries(&self) -> &[(String, u64)] {
        &self.entries
    }

    /// Entries by descending count; ties keep insertion order.
    pub fn sorted_desc(&self) -> Vec<(String, u64)> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }
}

impl<S: AsRef<str>> FromIterator<(S, u64)> for CountTable {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut table = CountTable::new();
        for (label, n) in iter {
            table.add(label.as_ref(), n);
        }
        table
    }
}

/// Counts commits per author over at most `cap` commits, in the given order.
pub fn tally_authors<'a, I>(commits: I, cap: usize) -> AuthorCommitCounts
where
    I: IntoIterator<Item = &'a CommitInfo>,
{
    let mut counts = CountTable::new();
    for commit in commits.into_iter().take(cap) {
        counts.add(commit.author_label(), 1);
    }
    counts
}

/// Total commits for every branch of the repository: one entry per listed branch.
///
/// Issues one commit-count request per branch after the branch listing.
#[instrument(skip(client), fields(repo = %client.repository()))]
pub async fn branch_commit_counts(client: &dyn RepoDataClient) -> Result<BranchCommitCounts> {
    let branches = client.list_branches().await?;
    let mut counts = CountTable::new();
    for branch in &branches {
        let total = client.commit_count(&branch.name).await?;
        counts.set(&branch.name, total);
    }
    info!(
        branches = counts.len(),
        commits = counts.total(),
        "step: branch commit counts built"
    );
    Ok(counts)
}

/// Commits per author among the first `cap` commits of `branch`.
#[instrument(skip(client), fields(repo = %client.repository()))]
pub async fn author_commit_counts(
    client: &dyn RepoDataClient,
    branch: &str,
    cap: usize,
) -> Result<AuthorCommitCounts> {
    let commits = client.recent_commits(branch, cap).await?;
    let counts = tally_authors(&commits, cap);
    info!(
        branch = %branch,
        examined = counts.total(),
        authors = counts.len(),
        "step: author commit counts built"
    );
    Ok(counts)
}
