//! GitHub client configuration, loaded from env: TOKEN_G (or GITHUB_TOKEN), REPO_NAME, GITHUB_API_URL,
//! COMMIT_SCAN_LIMIT, CONTRIBUTORS_LIMIT.

use anyhow::Result;
use std::env;
use std::fmt;
use std::str::FromStr;

use crate::error::RepoError;

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
/// Commits examined per author chart.
pub const DEFAULT_COMMIT_SCAN_LIMIT: usize = 100;
pub const DEFAULT_CONTRIBUTORS_LIMIT: usize = 5;

/// Fully qualified repository identifier (`owner/name`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl FromStr for RepoId {
    type Err = RepoError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.split_once('/') {
            Some((owner, name))
                if !owner.is_empty()
                    && !name.is_empty()
                    && !name.contains('/')
                    && !trimmed.contains(char::is_whitespace) =>
            {
                Ok(Self {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(RepoError::InvalidRepository(s.to_string())),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[derive(Debug, Clone)]
pub struct GithubConfig {
    /// TOKEN_G or GITHUB_TOKEN
    pub token: String,
    /// REPO_NAME
    pub repository: RepoId,
    /// GITHUB_API_URL; GitHub Enterprise or a test server
    pub api_url: String,
    /// COMMIT_SCAN_LIMIT; cap on commits examined for the per-author chart
    pub commit_scan_limit: usize,
    /// CONTRIBUTORS_LIMIT; contributors listed by the summary
    pub contributors_limit: usize,
}

impl GithubConfig {
    /// Builds config for `repository` with default URL and limits.
    pub fn new(token: String, repository: RepoId) -> Self {
        Self {
            token,
            repository,
            api_url: DEFAULT_GITHUB_API_URL.to_string(),
            commit_scan_limit: DEFAULT_COMMIT_SCAN_LIMIT,
            contributors_limit: DEFAULT_CONTRIBUTORS_LIMIT,
        }
    }

    /// Loads from environment variables. TOKEN_G (or GITHUB_TOKEN) and REPO_NAME are required.
    pub fn from_env() -> Result<Self> {
        let token = env::var("TOKEN_G")
            .or_else(|_| env::var("GITHUB_TOKEN"))
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("TOKEN_G (or GITHUB_TOKEN) not set"))?;
        let repo_name =
            env::var("REPO_NAME").map_err(|_| anyhow::anyhow!("REPO_NAME not set"))?;
        let repository: RepoId = repo_name.parse()?;
        let api_url = env::var("GITHUB_API_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string());
        let commit_scan_limit = limit_from_env("COMMIT_SCAN_LIMIT", DEFAULT_COMMIT_SCAN_LIMIT)?;
        let contributors_limit =
            limit_from_env("CONTRIBUTORS_LIMIT", DEFAULT_CONTRIBUTORS_LIMIT)?;

        Ok(Self {
            token,
            repository,
            api_url,
            commit_scan_limit,
            contributors_limit,
        })
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_commit_scan_limit(mut self, limit: usize) -> Self {
        self.commit_scan_limit = limit;
        self
    }

    /// Validate config (API URL must parse, scan limit must be positive).
    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.api_url).is_err() {
            anyhow::bail!("GITHUB_API_URL is not a valid URL: {}", self.api_url);
        }
        if self.commit_scan_limit == 0 {
            anyhow::bail!("COMMIT_SCAN_LIMIT must be at least 1");
        }
        Ok(())
    }
}

/// Unset or blank gives `default`; anything else must be a non-negative integer.
fn limit_from_env(key: &str, default: usize) -> Result<usize> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("{} must be a non-negative integer, got {:?}", key, value)),
        _ => Ok(default),
    }
}
