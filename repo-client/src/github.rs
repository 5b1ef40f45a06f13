//! GitHub REST implementation of [`RepoDataClient`].
//!
//! # External interactions
//!
//! - `GET /repos/{owner}/{repo}/branches` (paged)
//! - `GET /repos/{owner}/{repo}/commits?sha=<branch>` (paged; `per_page=1` + `Link` header for totals)
//! - `GET /repos/{owner}/{repo}`
//! - `GET /repos/{owner}/{repo}/contributors`
//!
//! Every call is a single blocking-from-the-caller's-view request with reqwest's default timeouts;
//! nothing is retried.

use async_trait::async_trait;
use repochart_core::mask_token;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, LINK, USER_AGENT};
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, info, instrument, warn};

use crate::config::{GithubConfig, RepoId};
use crate::error::RepoError;
use crate::models::{
    ApiErrorPayload, Branch, BranchPayload, CommitInfo, CommitPayload, Contributor,
    ContributorPayload, RepositoryInfo, RepositoryPayload,
};
use crate::{link, RepoDataClient, Result};

/// Largest page GitHub serves.
pub const PAGE_SIZE: usize = 100;
/// Hard cap on branch pages fetched (`MAX_BRANCH_PAGES * PAGE_SIZE` branches).
pub const MAX_BRANCH_PAGES: usize = 10;

const API_VERSION: &str = "2022-11-28";
/// Longest error text kept from a response body.
pub const MAX_ERROR_MESSAGE_CHARS: usize = 200;

#[derive(Debug, Clone)]
pub struct GithubClient {
    http: Client,
    api_url: String,
    repository: RepoId,
}

impl GithubClient {
    /// Creates a client for `config.repository`. An empty token sends unauthenticated requests.
    pub fn new(config: &GithubConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(API_VERSION),
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("repochart/", env!("CARGO_PKG_VERSION"))),
        );
        if !config.token.is_empty() {
            let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token))
                .map_err(|_| RepoError::Config("token contains invalid characters".to_string()))?;
            auth.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth);
        }

        let http = Client::builder().default_headers(headers).build()?;

        info!(
            repo = %config.repository,
            api_url = %config.api_url,
            token = %mask_token(&config.token),
            "GitHub client created"
        );

        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            repository: config.repository.clone(),
        })
    }

    fn repo_url(&self, tail: &str) -> String {
        format!(
            "{}/repos/{}/{}{}",
            self.api_url, self.repository.owner, self.repository.name, tail
        )
    }

    /// Sends a GET and maps non-success statuses to [`RepoError`].
    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<Response> {
        debug!(url = %url, query = ?query, "GitHub request");
        let response = self.http.get(url).query(query).send().await?;
        check_status(response).await
    }
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let rate_exhausted = response
        .headers()
        .get("x-ratelimit-remaining")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim() == "0")
        .unwrap_or(false);
    let is_html = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("html"));
    let body = response.text().await.unwrap_or_default();
    let message = error_message(status, &body, is_html);

    warn!(status = status.as_u16(), message = %message, "GitHub API error");

    Err(match status {
        StatusCode::NOT_FOUND | StatusCode::UNPROCESSABLE_ENTITY => RepoError::NotFound(message),
        StatusCode::UNAUTHORIZED => RepoError::Unauthorized(message),
        StatusCode::TOO_MANY_REQUESTS => RepoError::RateLimited(message),
        StatusCode::FORBIDDEN if rate_exhausted => RepoError::RateLimited(message),
        other => RepoError::Api {
            status: other.as_u16(),
            message,
        },
    })
}

/// Error text for a failed response: the JSON `message` field, else the plain body, cut to
/// [`MAX_ERROR_MESSAGE_CHARS`]. HTML pages and empty bodies give the status reason instead.
fn error_message(status: StatusCode, body: &str, is_html: bool) -> String {
    let text = match serde_json::from_str::<ApiErrorPayload>(body) {
        Ok(payload) => payload.message,
        Err(_) => body.trim().to_string(),
    };
    if text.is_empty() || is_html || text.starts_with('<') {
        return status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
    }
    truncate_chars(&text, MAX_ERROR_MESSAGE_CHARS)
}

fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_string(),
    }
}

#[async_trait]
impl RepoDataClient for GithubClient {
    fn repository(&self) -> &RepoId {
        &self.repository
    }

    #[instrument(skip(self), fields(repo = %self.repository))]
    async fn list_branches(&self) -> Result<Vec<Branch>> {
        let url = self.repo_url("/branches");
        let mut branches = Vec::new();

        for page in 1..=MAX_BRANCH_PAGES {
            let response = self
                .get(
                    &url,
                    &[("per_page", PAGE_SIZE.to_string()), ("page", page.to_string())],
                )
                .await?;
            let batch: Vec<BranchPayload> = response.json().await?;
            let fetched = batch.len();
            branches.extend(batch.into_iter().map(Branch::from));

            if fetched < PAGE_SIZE {
                break;
            }
            if page == MAX_BRANCH_PAGES {
                warn!(
                    branches = branches.len(),
                    "Branch list truncated at page cap"
                );
            }
        }

        info!(branches = branches.len(), "Branches listed");
        Ok(branches)
    }

    #[instrument(skip(self), fields(repo = %self.repository))]
    async fn commit_count(&self, branch: &str) -> Result<u64> {
        let response = self
            .get(
                &self.repo_url("/commits"),
                &[("sha", branch.to_string()), ("per_page", "1".to_string())],
            )
            .await?;

        let last = response
            .headers()
            .get(LINK)
            .and_then(|v| v.to_str().ok())
            .and_then(link::last_page);

        let total = match last {
            Some(total) => total,
            None => {
                // Single page: the body holds every commit there is (0 or 1).
                let items: Vec<serde_json::Value> = response.json().await?;
                items.len() as u64
            }
        };

        debug!(branch = %branch, total, "Commit count resolved");
        Ok(total)
    }

    #[instrument(skip(self), fields(repo = %self.repository))]
    async fn recent_commits(&self, branch: &str, limit: usize) -> Result<Vec<CommitInfo>> {
        let url = self.repo_url("/commits");
        let per_page = limit.min(PAGE_SIZE);
        let mut commits: Vec<CommitInfo> = Vec::with_capacity(limit.min(PAGE_SIZE));
        let mut page = 1usize;

        while commits.len() < limit {
            let response = self
                .get(
                    &url,
                    &[
                        ("sha", branch.to_string()),
                        ("per_page", per_page.to_string()),
                        ("page", page.to_string()),
                    ],
                )
                .await?;
            let batch: Vec<CommitPayload> = response.json().await?;
            let fetched = batch.len();
            commits.extend(batch.into_iter().map(CommitInfo::from));

            if fetched < per_page {
                break;
            }
            page += 1;
        }
        commits.truncate(limit);

        info!(branch = %branch, commits = commits.len(), limit, "Commits fetched");
        Ok(commits)
    }

    #[instrument(skip(self), fields(repo = %self.repository))]
    async fn repository_info(&self) -> Result<RepositoryInfo> {
        let response = self.get(&self.repo_url(""), &[]).await?;
        let payload: RepositoryPayload = response.json().await?;
        Ok(payload.into())
    }

    #[instrument(skip(self), fields(repo = %self.repository))]
    async fn top_contributors(&self, limit: usize) -> Result<Vec<Contributor>> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let response = self
            .get(
                &self.repo_url("/contributors"),
                &[("per_page", limit.min(PAGE_SIZE).to_string())],
            )
            .await?;
        // Empty repositories answer 204 without a body.
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(Vec::new());
        }
        let payload: Vec<ContributorPayload> = response.json().await?;
        Ok(payload
            .into_iter()
            .take(limit)
            .map(Contributor::from)
            .collect())
    }
}
