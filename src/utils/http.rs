use reqwest::{Client, ClientBuilder};
use tracing::{debug, warn};
use url::Url;

use crate::config::Config;
use crate::error::ScrapeError;

pub fn create_client(config: &Config) -> Result<Client, ScrapeError> {
    let mut builder = ClientBuilder::new().user_agent(config.user_agent.as_str());

    // No timeout unless configured: a stalled server stalls the cycle.
    if let Some(timeout) = config.request_timeout() {
        builder = builder.timeout(timeout);
    }

    Ok(builder.build()?)
}

/// Single GET, no retry. Non-2xx responses are errors.
pub async fn fetch_html(client: &Client, url: &Url) -> Result<String, ScrapeError> {
    let response = client.get(url.clone()).send().await?;

    let status = response.status();
    if !status.is_success() {
        warn!("HTTP error {}: {}", status, url);
        return Err(ScrapeError::Status {
            status,
            url: url.to_string(),
        });
    }

    let body = response.text().await?;
    debug!(bytes = body.len(), %url, "Fetched page");
    Ok(body)
}
