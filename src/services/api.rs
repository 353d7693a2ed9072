//! Hostel API client
//!
//! This service owns the HTTP client, sends one request per call and turns
//! the response envelope into a typed payload or an error. It never retries
//! and never touches view state; callers own that.

use std::time::Instant;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;
use crate::config::settings::ApiConfig;
use crate::utils::errors::{HostelMateError, Result};
use crate::utils::logging;
use super::endpoints::Endpoint;
use super::envelope;

/// Low-level fetcher shared by every dashboard
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new ApiClient from configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(HostelMateError::Http)?;

        Self::with_client(client, &config.base_url)
    }

    /// Build around an existing reqwest client
    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        // A trailing slash keeps any path prefix when joining endpoint paths.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };

        Ok(Self {
            client,
            base_url: Url::parse(&normalized)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint path against the base URL
    pub fn url_for(&self, endpoint: &Endpoint) -> Result<Url> {
        Ok(self.base_url.join(endpoint.path.trim_start_matches('/'))?)
    }

    /// Perform one call and decode the envelope into `T`
    pub async fn call<B, T>(&self, endpoint: &Endpoint, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url_for(endpoint)?;
        debug!(endpoint = endpoint.name, url = %url, "Sending API request");

        let started = Instant::now();
        let result = self.send(endpoint, url, body).await;
        logging::log_api_call(
            endpoint.name,
            started.elapsed().as_millis() as u64,
            result.is_ok(),
        );

        result
    }

    async fn send<B, T>(&self, endpoint: &Endpoint, url: Url, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .request(endpoint.method.into(), url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    HostelMateError::Transport("request timed out".to_string())
                } else if e.is_connect() {
                    HostelMateError::Transport("hostel API unavailable".to_string())
                } else {
                    HostelMateError::Http(e)
                }
            })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(HostelMateError::Http)?;

        // The envelope is authoritative even on error statuses; only fall
        // back to the status line when the body is not an envelope.
        let decoded = serde_json::from_slice::<Value>(&bytes)
            .map_err(|e| HostelMateError::MalformedResponse(e.to_string()))
            .and_then(envelope::decode::<T>);

        match decoded {
            Err(HostelMateError::MalformedResponse(_)) if !status.is_success() => {
                Err(HostelMateError::Transport(format!("HTTP {}", status)))
            }
            other => other,
        }
    }
}
