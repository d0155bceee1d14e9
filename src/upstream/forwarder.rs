//! Outbound call to the prediction API.

use std::fmt;
use std::time::{Duration, Instant};

use axum::body::Bytes;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;

use crate::config::UpstreamConfig;
use crate::observability::metrics;
use crate::record::HealthRecord;
use crate::upstream::error::ForwardError;

const JSON: &str = "application/json";

/// Sends health records to one fixed upstream endpoint.
///
/// Holds no per-request state; share it behind an `Arc`.
#[derive(Clone)]
pub struct UpstreamForwarder {
    client: Client,
    url: String,
    auth_token: String,
}

impl fmt::Debug for UpstreamForwarder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstreamForwarder")
            .field("url", &self.url)
            .field("auth_token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl UpstreamForwarder {
    /// Build a forwarder with its own HTTP client.
    pub fn new(config: &UpstreamConfig) -> Result<Self, ForwardError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(ForwardError::Build)?;
        Ok(Self::with_client(client, config))
    }

    /// Build a forwarder around an existing client.
    pub fn with_client(client: Client, config: &UpstreamConfig) -> Self {
        Self {
            client,
            url: config.url.clone(),
            auth_token: config.auth_token.clone(),
        }
    }

    /// Upstream URL the records are sent to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// POST the record and return the upstream body on success.
    pub async fn forward(&self, record: &HealthRecord) -> Result<Bytes, ForwardError> {
        let payload = serde_json::to_vec(record).map_err(ForwardError::Serialize)?;

        let request = self
            .client
            .post(&self.url)
            .header(AUTHORIZATION, self.auth_token.as_str())
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON)
            .body(payload)
            .build()
            .map_err(ForwardError::Build)?;

        let start = Instant::now();
        let response = self
            .client
            .execute(request)
            .await
            .map_err(ForwardError::Request)?;

        let status = response.status();
        let body = response.bytes().await.map_err(ForwardError::ReadBody)?;
        metrics::record_upstream(status.as_u16(), start);

        tracing::debug!(
            status = status.as_u16(),
            bytes = body.len(),
            "Upstream responded"
        );

        if status.as_u16() >= 400 {
            return Err(ForwardError::Upstream {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(body)
    }
}
