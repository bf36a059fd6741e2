use crate::types::{RepoDetail, UserDetail};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One row of `users.csv`. Field order is the column order and part of the
/// compatibility contract for downstream consumers.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UserRow {
    pub login: String,
    pub name: String,
    pub company: String,
    pub location: String,
    pub email: String,
    pub hireable: Option<bool>,
    pub bio: String,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    pub created_at: DateTime<Utc>,
}

impl UserRow {
    pub fn from_detail(detail: &UserDetail) -> Self {
        UserRow {
            login: detail.login.clone(),
            name: detail.name.clone().unwrap_or_default(),
            company: clean_company_name(detail.company.as_deref()),
            location: detail.location.clone().unwrap_or_default(),
            email: detail.email.clone().unwrap_or_default(),
            hireable: detail.hireable,
            bio: detail.bio.clone().unwrap_or_default(),
            public_repos: detail.public_repos,
            followers: detail.followers,
            following: detail.following,
            created_at: detail.created_at,
        }
    }
}

/// One row of `repositories.csv`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RepoRow {
    pub login: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
    pub stargazers_count: u32,
    pub watchers_count: u32,
    pub language: String,
    pub has_projects: bool,
    pub has_wiki: bool,
    pub license_name: String,
}

impl RepoRow {
    pub fn new(login: &str, repo: &RepoDetail) -> Self {
        RepoRow {
            login: login.to_string(),
            full_name: repo.full_name.clone(),
            created_at: repo.created_at,
            stargazers_count: repo.stargazers_count,
            watchers_count: repo.watchers_count,
            language: repo.language.clone().unwrap_or_default(),
            has_projects: repo.has_projects,
            has_wiki: repo.has_wiki,
            license_name: repo
                .license
                .as_ref()
                .map(|license| license.key.clone())
                .unwrap_or_default(),
        }
    }
}

/// Normalize a company field: trim, drop one leading `@`, uppercase.
/// Absent input maps to an empty string.
pub fn clean_company_name(raw: Option<&str>) -> String {
    match raw {
        Some(value) => {
            let trimmed = value.trim();
            let stripped = trimmed.strip_prefix('@').unwrap_or(trimmed);
            stripped.to_uppercase()
        }
        None => String::new(),
    }
}
