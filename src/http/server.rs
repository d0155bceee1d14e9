//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the forward and health routes
//! - Wire up middleware (request ID, tracing)
//! - Serve on a bound listener with graceful shutdown

use std::sync::Arc;

use axum::{
    body::Body,
    http::{HeaderName, Request},
    routing::{any, get},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::GatewayConfig;
use crate::http::handlers::{forward_handler, health_handler};
use crate::lifecycle::shutdown::wait_for_shutdown;
use crate::upstream::{ForwardError, UpstreamForwarder};

/// Route accepting health-metric queries.
pub const FORWARD_PATH: &str = "/api/forward";

/// Liveness probe route.
pub const HEALTH_PATH: &str = "/health";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub forwarder: Arc<UpstreamForwarder>,
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, ForwardError> {
        let forwarder = UpstreamForwarder::new(&config.upstream)?;
        Ok(Self::with_forwarder(config, forwarder))
    }

    /// Create a server around a pre-built forwarder.
    pub fn with_forwarder(config: GatewayConfig, forwarder: UpstreamForwarder) -> Self {
        let state = AppState {
            forwarder: Arc::new(forwarder),
        };
        Self {
            router: Self::build_router(state),
            config,
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        let x_request_id = HeaderName::from_static("x-request-id");

        let middleware = ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .extensions()
                        .get::<RequestId>()
                        .and_then(|id| id.header_value().to_str().ok())
                        .unwrap_or("unknown");
                    tracing::info_span!(
                        "request",
                        request_id = %request_id,
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                }),
            )
            .layer(PropagateRequestIdLayer::new(x_request_id));

        // `any` so HEAD and friends reach the handler and get a 405
        // instead of axum's implicit GET fallback.
        Router::new()
            .route(FORWARD_PATH, any(forward_handler))
            .route(HEALTH_PATH, get(health_handler))
            .with_state(state)
            .layer(middleware)
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(wait_for_shutdown(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The router, for serving through a custom transport or in tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}
