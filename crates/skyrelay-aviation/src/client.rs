//! aviationstack HTTP client.

use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://api.aviationstack.com/v1";

/// Connection settings for the provider, fixed at startup.
#[derive(Debug, Clone)]
pub struct AviationStackConfig {
    pub base_url: String,
    /// Sent as the `access_key` query parameter. Blank keys count as unset.
    pub access_key: Option<String>,
    /// Per-request timeout; `None` waits for the provider indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for AviationStackConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_key: None,
            timeout: None,
        }
    }
}

/// HTTP client for the aviationstack API.
///
/// Every failure is logged and reported to the caller as `None`; errors never
/// escape this type.
#[derive(Debug, Clone)]
pub struct AviationStackClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) access_key: Option<String>,
}

impl AviationStackClient {
    pub fn new(config: &AviationStackConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            access_key: config
                .access_key
                .as_deref()
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(str::to_string),
        })
    }

    pub fn has_access_key(&self) -> bool {
        self.access_key.is_some()
    }

    pub(crate) fn resource_url(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url, resource.trim_start_matches('/'))
    }

    /// GET `{base_url}/{resource}` with `params` plus the access key.
    ///
    /// Returns the parsed body unmodified, or `None` if the key is missing,
    /// the request fails, the provider answers with a non-2xx status, or the
    /// body is not JSON. No request is made without a key.
    pub async fn fetch(&self, resource: &str, params: &[(&str, String)]) -> Option<Value> {
        let Some(access_key) = self.access_key.as_deref() else {
            tracing::error!(
                "Error: AVIATION_STACK_API_KEY not configured; skipping request for '{}'",
                resource
            );
            return None;
        };

        match self.try_fetch(resource, params, access_key).await {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::error!("Error fetching aviation data from '{}': {:#}", resource, e);
                None
            }
        }
    }

    async fn try_fetch(
        &self,
        resource: &str,
        params: &[(&str, String)],
        access_key: &str,
    ) -> Result<Value> {
        let url = self.resource_url(resource);
        tracing::debug!("GET {} ({} params)", url, params.len());

        // Strip URLs from reqwest errors: the query string carries the key.
        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("access_key", access_key)])
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Request failed")?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("Provider responded with {}", status));
        }

        response
            .json::<Value>()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to parse provider response")
    }
}
