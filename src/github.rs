use crate::error::{HarvestError, Result};
use crate::pagination::{drain_pages, PageLimits, PAGE_SIZE};
use crate::transport::{HttpConfig, Transport};
use crate::types::{RateLimitStatus, RepoDetail, SearchResponse, UserDetail, UserSummary};
use serde::de::DeserializeOwned;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Hard upper bound on repositories collected per user. Bounds the cost of
/// fanning out over potentially thousands of users.
pub const REPO_CAP: usize = 500;

pub struct GitHubClient {
    transport: Transport,
    base_url: Url,
}

impl GitHubClient {
    pub fn new(config: &HttpConfig, base_url: Url) -> Result<Self> {
        Ok(GitHubClient {
            transport: Transport::new(config)?,
            base_url,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    /// Send a GET and parse the JSON body, raising non-2xx statuses as
    /// `HttpFailure`.
    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = self.endpoint(path);
        let response = self.transport.get(&url, query).await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HarvestError::HttpFailure { status, url, body });
        }

        Ok(response.json::<T>().await?)
    }

    /// Advisory credential check against the rate-limit endpoint.
    pub async fn check_rate_limit(&self) -> Result<RateLimitStatus> {
        self.get_json("rate_limit", &[]).await
    }

    /// Walk every page of the user search, best-effort. A failed page ends
    /// the walk with whatever was already accumulated.
    pub async fn search_users(&self, query: &str) -> Vec<UserSummary> {
        drain_pages(
            |page| async move {
                let params = [
                    ("q", query.to_string()),
                    ("per_page", PAGE_SIZE.to_string()),
                    ("page", page.to_string()),
                ];
                let response: SearchResponse = self.get_json("search/users", &params).await?;
                Ok(response.items)
            },
            PageLimits::until_exhausted(),
        )
        .await
    }

    /// Fetch the full detail record for one user.
    pub async fn get_user(&self, login: &str) -> Result<UserDetail> {
        self.get_json(&format!("users/{}", login), &[]).await
    }

    /// Fetch up to `REPO_CAP` repositories for a user, most recently pushed
    /// first, best-effort.
    pub async fn fetch_repositories(&self, login: &str) -> Vec<RepoDetail> {
        drain_pages(
            |page| async move {
                let params = [
                    ("per_page", PAGE_SIZE.to_string()),
                    ("sort", "pushed".to_string()),
                    ("page", page.to_string()),
                ];
                self.get_json::<Vec<RepoDetail>>(&format!("users/{}/repos", login), &params)
                    .await
            },
            PageLimits::capped(REPO_CAP),
        )
        .await
    }
}
