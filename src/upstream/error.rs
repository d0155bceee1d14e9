//! Forwarding error definitions.

use thiserror::Error;

/// Errors that can occur while forwarding a record upstream.
#[derive(Debug, Error)]
pub enum ForwardError {
    /// The record could not be converted to JSON.
    #[error("json marshal error: {0}")]
    Serialize(serde_json::Error),

    /// The outbound request or HTTP client could not be constructed.
    #[error("request creation error: {0}")]
    Build(reqwest::Error),

    /// Connection, DNS, TLS or timeout failure reaching the upstream.
    #[error("request failed: {0}")]
    Request(reqwest::Error),

    /// The upstream response body could not be read to the end.
    #[error("response read error: {0}")]
    ReadBody(reqwest::Error),

    /// The upstream answered with status 400 or above.
    #[error("api error (status {status}): {body}")]
    Upstream { status: u16, body: String },
}

impl ForwardError {
    /// Short label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ForwardError::Serialize(_) => "serialize",
            ForwardError::Build(_) => "build",
            ForwardError::Request(_) => "request",
            ForwardError::ReadBody(_) => "read_body",
            ForwardError::Upstream { .. } => "upstream",
        }
    }
}
