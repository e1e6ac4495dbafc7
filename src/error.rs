use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong inside one scrape cycle.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error {status}: {url}")]
    Status { status: StatusCode, url: String },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

impl ScrapeError {
    /// Network and HTTP status failures, as opposed to everything else.
    pub fn is_transport(&self) -> bool {
        matches!(self, ScrapeError::Transport(_) | ScrapeError::Status { .. })
    }
}

impl From<url::ParseError> for ScrapeError {
    fn from(e: url::ParseError) -> Self {
        ScrapeError::Parse(format!("invalid search URL: {}", e))
    }
}
