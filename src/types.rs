use chrono::{DateTime, Utc};
use serde::Deserialize;

// GitHub API response structures

/// Envelope returned by the user search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub items: Vec<UserSummary>,
}

/// Minimal identity from search results; only drives further lookups.
#[derive(Debug, Clone, Deserialize)]
pub struct UserSummary {
    pub login: String,
}

/// Full user detail record.
#[derive(Debug, Clone, Deserialize)]
pub struct UserDetail {
    pub login: String,
    pub name: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub hireable: Option<bool>,
    pub bio: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    pub created_at: DateTime<Utc>,
}

/// Per-repository attributes from the user repositories endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoDetail {
    pub full_name: String,
    pub created_at: DateTime<Utc>,
    pub stargazers_count: u32,
    pub watchers_count: u32,
    pub language: Option<String>,
    pub has_projects: bool,
    pub has_wiki: bool,
    pub license: Option<License>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct License {
    pub key: String,
}

/// Response of the rate-limit endpoint, used for the advisory token check.
#[derive(Debug, Deserialize)]
pub struct RateLimitStatus {
    pub rate: RateWindow,
}

#[derive(Debug, Deserialize)]
pub struct RateWindow {
    pub limit: u32,
    pub remaining: u32,
    pub reset: i64,
}
