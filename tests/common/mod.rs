#![allow(dead_code)]

use github_harvester::transport::HttpConfig;
use serde_json::{json, Value};
use std::time::Duration;

/// Transport configuration pointed at a mock server: no real backoff waits,
/// predictable request counts.
pub fn test_config(max_retries: u32) -> HttpConfig {
    let mut config = HttpConfig::new("test-token");
    config.timeout = Duration::from_secs(5);
    config.max_retries = max_retries;
    config.backoff_factor = 0.0;
    config
}

pub fn rate_limit_body() -> String {
    json!({
        "resources": {
            "core": { "limit": 5000, "remaining": 4999, "reset": 1_700_000_000 }
        },
        "rate": { "limit": 5000, "remaining": 4999, "reset": 1_700_000_000 }
    })
    .to_string()
}

pub fn search_body(logins: &[&str]) -> String {
    let items: Vec<Value> = logins.iter().map(|login| json!({ "login": login })).collect();
    json!({
        "total_count": logins.len(),
        "incomplete_results": false,
        "items": items
    })
    .to_string()
}

pub fn user_body(login: &str) -> Value {
    json!({
        "login": login,
        "name": null,
        "company": null,
        "location": null,
        "email": null,
        "hireable": null,
        "bio": null,
        "public_repos": 1,
        "followers": 12,
        "following": 3,
        "created_at": "2015-04-01T10:00:00Z"
    })
}

pub fn repo_body(full_name: &str, license_key: Option<&str>) -> Value {
    json!({
        "full_name": full_name,
        "created_at": "2020-06-15T08:30:00Z",
        "stargazers_count": 42,
        "watchers_count": 42,
        "language": "Rust",
        "has_projects": true,
        "has_wiki": true,
        "license": license_key.map(|key| json!({ "key": key }))
    })
}
