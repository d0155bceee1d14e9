//! Configuration validation.
//!
//! Semantic checks that clap cannot express. Returns all validation errors,
//! not just the first, so a misconfigured deployment is fixed in one pass.

use std::net::SocketAddr;

use reqwest::header::HeaderValue;
use thiserror::Error;
use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("API_AUTH_TOKEN is required")]
    MissingAuthToken,

    #[error("API_AUTH_TOKEN is not a valid header value")]
    InvalidAuthToken,

    #[error("upstream URL {0:?} is not an absolute http(s) URL")]
    InvalidUpstreamUrl(String),

    #[error("bind address {0:?} is not a socket address")]
    InvalidBindAddress(String),

    #[error("upstream timeout must be greater than zero")]
    ZeroTimeout,

    #[error("upstream timeout {0:?} is not a whole number of seconds")]
    InvalidTimeout(String),

    #[error("metrics address {0:?} is not a socket address")]
    InvalidMetricsAddress(String),
}

/// Validate a fully assembled configuration.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let token = &config.upstream.auth_token;
    if token.trim().is_empty() {
        errors.push(ValidationError::MissingAuthToken);
    } else if HeaderValue::from_str(token).is_err() {
        errors.push(ValidationError::InvalidAuthToken);
    }

    match Url::parse(&config.upstream.url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {}
        _ => errors.push(ValidationError::InvalidUpstreamUrl(config.upstream.url.clone())),
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.upstream.timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
