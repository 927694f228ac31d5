//! Low-level HTTP client — `DeliveryHttp`.
//!
//! Builds authenticated GET requests against the resolved project base URL,
//! executes them, and triages the response status before deserialization.
//! Internal to the crate — `DeliveryClient` wraps this.

use crate::error::{DeliveryError, KenticoError};

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Low-level HTTP client for the Delivery API.
///
/// Holds one `reqwest::Client`, built at construction and reused across all
/// calls. Never reconfigured afterwards.
pub struct DeliveryHttp {
    base_url: String,
    client: Client,
    /// Bearer key for preview mode. NEVER exposed publicly.
    preview_api_key: Option<String>,
}

impl std::fmt::Debug for DeliveryHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeliveryHttp")
            .field("base_url", &self.base_url)
            .field(
                "preview_api_key",
                &self.preview_api_key.as_ref().map(|_| "<redacted>"),
            )
            .finish_non_exhaustive()
    }
}

impl DeliveryHttp {
    pub(crate) fn new(
        base_url: String,
        preview_api_key: Option<String>,
    ) -> Result<Self, DeliveryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            preview_api_key,
        })
    }

    /// Execute `GET {base_url}/{path}?{params}` and deserialize the body as `T`.
    ///
    /// Status triage, in order:
    /// - `>= 500` — server error, body not parsed
    /// - `400..500` — body parsed as the API error payload
    /// - otherwise — body parsed as `T`
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, DeliveryError> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(%url, "dispatching Delivery API request");

        let mut req = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json");
        if let Some(key) = &self.preview_api_key {
            req = req.header(AUTHORIZATION, format!("Bearer {}", key));
        }
        if !params.is_empty() {
            req = req.query(params);
        }

        let resp = req.send().await?;
        let status = resp.status().as_u16();

        if status >= 500 {
            return Err(DeliveryError::Server { status });
        }
        if status >= 400 {
            let body = resp.text().await.unwrap_or_default();
            let error = serde_json::from_str::<KenticoError>(&body)
                .unwrap_or_else(|_| KenticoError::from_raw_body(body));
            return Err(DeliveryError::Api { status, error });
        }

        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
