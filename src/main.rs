//! Health Metrics Gateway
//!
//! A single-route HTTP gateway built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────────┐
//!                    │                  HEALTH GATEWAY                   │
//!                    │                                                   │
//!   GET /api/forward │  ┌─────────┐    ┌──────────┐    ┌─────────────┐   │
//!   ?uid=..&age=..   │  │  http   │───▶│  record  │───▶│  upstream   │───┼──▶ Prediction
//!   ─────────────────┼─▶│ handler │    │ decoder  │    │  forwarder  │   │    API (POST)
//!                    │  └────┬────┘    └──────────┘    └──────┬──────┘   │
//!   200 body / 405 / │       │                                │          │
//!   500              │       ◀────────── body or error ───────┘          │
//!   ◀────────────────┼───────┘                                           │
//!                    │                                                   │
//!                    │  config · observability · lifecycle               │
//!                    └──────────────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;

use health_gateway::config::{self, ConfigError};
use health_gateway::observability::{logging, metrics};
use health_gateway::{HttpServer, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match config::load_config() {
        Ok(config) => config,
        Err(ConfigError::Args(e)) => e.exit(),
        Err(e) => {
            eprintln!("health-gateway: {}", e);
            std::process::exit(2);
        }
    };

    logging::init_logging(&config.observability);

    tracing::info!("health-gateway v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.url,
        upstream_timeout_secs = ?config.upstream.timeout_secs,
        "Configuration loaded"
    );

    if let Some(addr) = config.observability.metrics_address {
        if let Err(e) = metrics::init_metrics(addr) {
            tracing::error!(error = %e, "Failed to start metrics exporter");
        }
    }

    let listener = match TcpListener::bind(&config.listener.bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(
                bind_address = %config.listener.bind_address,
                error = %e,
                "Failed to bind listener"
            );
            return Err(e.into());
        }
    };

    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    // Signals drive shutdown; the coordinator only has to outlive the server.
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
