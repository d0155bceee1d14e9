//! Configuration loading from the process environment.
//!
//! Every setting is read from an environment variable and may also be given
//! as a long flag, which takes precedence.

use std::ffi::OsString;
use std::net::SocketAddr;

use clap::Parser;
use thiserror::Error;

use crate::config::schema::{GatewayConfig, ListenerConfig, ObservabilityConfig, UpstreamConfig};
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0}")]
    Args(#[from] clap::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

const DEFAULT_BIND_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "8080";

#[derive(Debug, Parser)]
#[command(name = "health-gateway")]
#[command(about = "Forwards health-metric queries to the prediction API", long_about = None)]
struct GatewayArgs {
    /// Credential sent in the upstream Authorization header.
    #[arg(long, env = "API_AUTH_TOKEN", hide_env_values = true)]
    auth_token: Option<String>,

    /// Inbound listening port [default: 8080].
    #[arg(long, env = "PORT")]
    port: Option<String>,

    /// Inbound listening host [default: 0.0.0.0].
    #[arg(long, env = "BIND_HOST")]
    bind_host: Option<String>,

    /// Prediction endpoint receiving the forwarded record.
    #[arg(long, env = "UPSTREAM_URL")]
    upstream_url: Option<String>,

    /// Upstream request timeout in seconds.
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS")]
    upstream_timeout_secs: Option<String>,

    /// Default log level when RUST_LOG is unset [default: info].
    #[arg(long, env = "LOG_LEVEL")]
    log_level: Option<String>,

    /// Bind address for the Prometheus exporter.
    #[arg(long, env = "METRICS_ADDRESS")]
    metrics_address: Option<String>,
}

/// A variable that is set but empty counts as unset.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl GatewayArgs {
    /// Apply defaults and parse the typed settings, collecting parse failures.
    fn into_config(self) -> (GatewayConfig, Vec<ValidationError>) {
        let mut errors = Vec::new();
        let defaults = GatewayConfig::default();

        let timeout_secs = non_empty(self.upstream_timeout_secs).and_then(|raw| {
            raw.trim()
                .parse::<u64>()
                .map_err(|_| errors.push(ValidationError::InvalidTimeout(raw.clone())))
                .ok()
        });

        let metrics_address = non_empty(self.metrics_address).and_then(|raw| {
            raw.trim()
                .parse::<SocketAddr>()
                .map_err(|_| errors.push(ValidationError::InvalidMetricsAddress(raw.clone())))
                .ok()
        });

        let host = non_empty(self.bind_host).unwrap_or_else(|| DEFAULT_BIND_HOST.to_string());
        let port = non_empty(self.port).unwrap_or_else(|| DEFAULT_PORT.to_string());

        let config = GatewayConfig {
            listener: ListenerConfig {
                bind_address: format!("{}:{}", host, port),
            },
            upstream: UpstreamConfig {
                url: non_empty(self.upstream_url).unwrap_or(defaults.upstream.url),
                auth_token: non_empty(self.auth_token).unwrap_or_default(),
                timeout_secs,
            },
            observability: ObservabilityConfig {
                log_level: non_empty(self.log_level).unwrap_or(defaults.observability.log_level),
                metrics_address,
            },
        };
        (config, errors)
    }
}

/// Load and validate configuration from the process environment and arguments.
pub fn load_config() -> Result<GatewayConfig, ConfigError> {
    load_config_from(std::env::args_os())
}

/// Load and validate configuration from an explicit argument list.
///
/// Environment variables still fill in any flag that is not given.
pub fn load_config_from<I, T>(args: I) -> Result<GatewayConfig, ConfigError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let (config, mut errors) = GatewayArgs::try_parse_from(args)?.into_config();
    if let Err(invalid) = validate_config(&config) {
        errors.extend(invalid);
    }
    if errors.is_empty() {
        Ok(config)
    } else {
        Err(ConfigError::Validation(errors))
    }
}
