use anyhow::Result;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::{error, warn};

use crate::config::Config;
use crate::loader::LoadError;

pub fn create_client(config: &Config) -> Result<Client> {
    let client = ClientBuilder::new()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.request_timeout_seconds))
        .build()?;

    Ok(client)
}

/// Single GET; a non-success status is an error. Failures are not retried.
pub async fn fetch_text(client: &Client, url: &str) -> Result<String, LoadError> {
    let response = client.get(url).send().await.map_err(|e| {
        error!("Request failed for {}: {}", url, e);
        LoadError::Request(e)
    })?;

    let status = response.status();
    if !status.is_success() {
        warn!("HTTP error {}: {}", status, url);
        return Err(LoadError::Status(status));
    }

    Ok(response.text().await?)
}
