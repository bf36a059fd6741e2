use crate::github::DEFAULT_API_URL;
use crate::transport::{HttpConfig, DEFAULT_BACKOFF_FACTOR, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

#[derive(Parser)]
#[command(name = "github-harvester")]
#[command(about = "Collects GitHub user profiles and repositories for a search filter into CSV datasets")]
#[command(version)]
pub struct Cli {
    /// GitHub personal access token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Base URL of the GitHub API
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: Url,

    /// Location to search users in
    #[arg(long, default_value = "Basel")]
    pub location: String,

    /// Minimum follower count for matched users
    #[arg(long, default_value_t = 10)]
    pub min_followers: u32,

    /// Full search query override (takes precedence over --location / --min-followers)
    #[arg(long)]
    pub query: Option<String>,

    /// Path of the user dataset
    #[arg(long, default_value = "users.csv")]
    pub users_output: PathBuf,

    /// Path of the repository dataset
    #[arg(long, default_value = "repositories.csv")]
    pub repos_output: PathBuf,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Retry budget for transient statuses
    #[arg(long, default_value_t = DEFAULT_MAX_RETRIES)]
    pub max_retries: u32,

    /// Base backoff factor in seconds (delay grows as factor * 2^attempt)
    #[arg(long, default_value_t = DEFAULT_BACKOFF_FACTOR)]
    pub backoff_factor: f64,
}

impl Cli {
    pub fn search_query(&self) -> String {
        match &self.query {
            Some(query) => query.clone(),
            None => format!("location:{} followers:>{}", self.location, self.min_followers),
        }
    }

    pub fn http_config(&self) -> HttpConfig {
        let mut config = HttpConfig::new(self.token.clone());
        config.timeout = Duration::from_secs(self.timeout_secs);
        config.max_retries = self.max_retries;
        config.backoff_factor = self.backoff_factor;
        config
    }
}
