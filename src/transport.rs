use crate::error::{HarvestError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

/// Statuses worth retrying: rate limiting and transient server failures.
pub const RETRYABLE_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_RETRIES: u32 = 5;
pub const DEFAULT_BACKOFF_FACTOR: f64 = 0.3;

const USER_AGENT: &str = concat!("github-harvester/", env!("CARGO_PKG_VERSION"));

/// Everything the transport needs up front. Fields are public so tests
/// can inject short timeouts and zero backoff.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub token: String,
    pub timeout: Duration,
    pub max_retries: u32,
    pub backoff_factor: f64,
    pub user_agent: String,
}

impl HttpConfig {
    pub fn new(token: impl Into<String>) -> Self {
        HttpConfig {
            token: token.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_factor: DEFAULT_BACKOFF_FACTOR,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub backoff_factor: f64,
}

impl RetryPolicy {
    pub fn is_retryable(status: StatusCode) -> bool {
        RETRYABLE_STATUSES.contains(&status.as_u16())
    }

    /// Delay before retry number `attempt` (0-based): factor * 2^attempt.
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        Duration::from_secs_f64(self.backoff_factor * f64::powi(2.0, attempt as i32))
    }
}

pub struct Transport {
    client: Client,
    policy: RetryPolicy,
}

impl Transport {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github.v3+json"));

        let mut auth = HeaderValue::from_str(&format!("token {}", config.token))
            .map_err(|_| HarvestError::Config("token contains invalid header characters".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Transport {
            client,
            policy: RetryPolicy {
                max_retries: config.max_retries,
                backoff_factor: config.backoff_factor,
            },
        })
    }

    /// Issue a GET, retrying transient statuses with exponential backoff.
    ///
    /// Non-retryable error statuses are returned as received so callers can
    /// inspect status and body. Exhausting the retry budget or losing the
    /// connection surfaces `ConnectionFailure`; hitting the request timeout
    /// surfaces `Timeout`.
    pub async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<Response> {
        let mut attempt = 0u32;

        loop {
            let result = self.client.get(url).query(query).send().await;

            match result {
                Ok(response) => {
                    let status = response.status();
                    if !RetryPolicy::is_retryable(status) {
                        return Ok(response);
                    }

                    if attempt >= self.policy.max_retries {
                        return Err(HarvestError::ConnectionFailure {
                            attempts: attempt + 1,
                            reason: format!("retry budget exhausted, last status {}", status),
                        });
                    }

                    let delay = self.policy.backoff_delay(attempt);
                    debug!(%url, %status, attempt, delay_ms = delay.as_millis() as u64, "retrying request");
                    sleep(delay).await;
                    attempt += 1;
                }
                Err(err) if err.is_timeout() => {
                    return Err(HarvestError::Timeout { url: url.to_string() });
                }
                Err(err) => {
                    return Err(HarvestError::ConnectionFailure {
                        attempts: attempt + 1,
                        reason: err.to_string(),
                    });
                }
            }
        }
    }
}
