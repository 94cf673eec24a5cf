//! GitHub REST client and typed response records.
//!
//! Response payloads are decoded into explicit records at this boundary;
//! rendering code downstream never inspects raw JSON. Records with no user
//! attached (deleted accounts) deserialize with `user: None` and are
//! skipped by the collector.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Default GitHub REST API endpoint.
pub const GITHUB_API_URL: &str = "https://api.github.com";

const SERVICE: &str = "github";
const PAGE_SIZE: usize = 100;
const USER_AGENT: &str = concat!("readme-manager/", env!("CARGO_PKG_VERSION"));

/// A GitHub user as it appears in issue, comment, and reaction payloads.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub login: String,
    pub avatar_url: String,
}

/// An issue, trimmed to the fields the endorsement renderer needs.
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub html_url: String,
    pub user: Option<User>,
}

/// A comment on an issue.
#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    pub user: Option<User>,
}

/// A reaction on an issue.
#[derive(Debug, Clone, Deserialize)]
pub struct Reaction {
    pub user: Option<User>,
}

/// Minimal GitHub REST client.
///
/// The token is read by the caller and passed in; do not log it.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl GithubClient {
    pub fn new(token: String) -> Self {
        Self::with_base_url(token, GITHUB_API_URL.to_string())
    }

    /// Creates a client against a non-default endpoint, for tests and
    /// GitHub Enterprise installs.
    pub fn with_base_url(token: String, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Lists all open issues in a repository, following pagination.
    pub async fn open_issues(&self, owner: &str, repo: &str) -> Result<Vec<Issue>> {
        let path = format!("/repos/{owner}/{repo}/issues");
        self.get_paginated(&path, &[("state", "open")]).await
    }

    /// Lists all comments on an issue.
    pub async fn issue_comments(&self, owner: &str, repo: &str, number: u64) -> Result<Vec<Comment>> {
        let path = format!("/repos/{owner}/{repo}/issues/{number}/comments");
        self.get_paginated(&path, &[]).await
    }

    /// Lists all reactions on an issue.
    pub async fn issue_reactions(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<Vec<Reaction>> {
        let path = format!("/repos/{owner}/{repo}/issues/{number}/reactions");
        self.get_paginated(&path, &[]).await
    }

    async fn get_paginated<T: DeserializeOwned>(
        &self,
        path: &str,
        base_query: &[(&str, &str)],
    ) -> Result<Vec<T>> {
        let mut out = Vec::new();
        let mut page = 1usize;

        loop {
            let per_page = PAGE_SIZE.to_string();
            let page_s = page.to_string();
            let mut query: Vec<(&str, &str)> = base_query.to_vec();
            query.push(("per_page", &per_page));
            query.push(("page", &page_s));

            let batch: Vec<T> = self.get_json(path, &query).await?;
            let batch_len = batch.len();
            out.extend(batch);

            if batch_len < PAGE_SIZE {
                return Ok(out);
            }
            page += 1;
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "github request");

        let resp = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .query(query)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status {
                service: SERVICE,
                status: status.as_u16(),
                url,
            });
        }

        Ok(resp.json().await?)
    }
}
