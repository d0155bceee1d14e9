//! Configuration schema definitions.

use std::fmt;
use std::net::SocketAddr;

/// Prediction endpoint used when `UPSTREAM_URL` is not set.
pub const DEFAULT_UPSTREAM_URL: &str = "https://apiml.labhub.online/api/v1/predict/hba1c";

/// Root configuration for the gateway.
#[derive(Debug, Clone, Default)]
pub struct GatewayConfig {
    /// Inbound listener settings.
    pub listener: ListenerConfig,

    /// Outbound prediction API settings.
    pub upstream: UpstreamConfig,

    /// Logging and metrics settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Upstream prediction API configuration.
#[derive(Clone)]
pub struct UpstreamConfig {
    /// Absolute URL the health record is POSTed to.
    pub url: String,

    /// Value sent verbatim in the `Authorization` header.
    pub auth_token: String,

    /// Overall request timeout. `None` keeps the transport defaults.
    pub timeout_secs: Option<u64>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_UPSTREAM_URL.to_string(),
            auth_token: String::new(),
            timeout_secs: None,
        }
    }
}

// Keeps the credential out of startup logs.
impl fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("url", &self.url)
            .field("auth_token", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Observability configuration.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    pub log_level: String,

    /// Prometheus exporter bind address; the exporter is off when `None`.
    pub metrics_address: Option<SocketAddr>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_address: None,
        }
    }
}
