// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::ApiConfig;
use crate::utils::display_path;

/// Create a configured asynchronous HTTP client.
pub fn create_async_client(config: &ApiConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Fetch a URL and return the body, failing on non-success status.
pub async fn fetch_text(client: &reqwest::Client, url: &Url) -> Result<String> {
    log::debug!("GET {}", url);
    let response = client.get(url.clone()).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(AppError::status(display_path(url), status.as_u16()));
    }
    Ok(response.text().await?)
}

/// Fetch a URL and decode the JSON body.
pub async fn fetch_json<T: DeserializeOwned>(client: &reqwest::Client, url: &Url) -> Result<T> {
    let text = fetch_text(client, url).await?;
    Ok(serde_json::from_str(&text)?)
}
