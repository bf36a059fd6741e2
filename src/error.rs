use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("request timed out: {url}")]
    Timeout { url: String },

    #[error("connection failed after {attempts} attempt(s): {reason}")]
    ConnectionFailure { attempts: u32, reason: String },

    #[error("HTTP {status} from {url}: {body}")]
    HttpFailure {
        status: reqwest::StatusCode,
        url: String,
        body: String,
    },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, HarvestError>;
