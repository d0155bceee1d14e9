//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_requests_total` (counter): inbound requests by method, status
//! - `gateway_request_duration_seconds` (histogram): inbound latency by method
//! - `gateway_forward_errors_total` (counter): forwarding failures by kind
//! - `gateway_upstream_duration_seconds` (histogram): upstream latency by status

use std::net::SocketAddr;
use std::time::Instant;

use axum::http::Method;
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener.
///
/// Must be called from within the Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Label for a request method. Extension methods share one label.
pub fn method_label(method: &Method) -> &'static str {
    match method.as_str() {
        "GET" => "GET",
        "HEAD" => "HEAD",
        "POST" => "POST",
        "PUT" => "PUT",
        "DELETE" => "DELETE",
        "PATCH" => "PATCH",
        "OPTIONS" => "OPTIONS",
        "CONNECT" => "CONNECT",
        "TRACE" => "TRACE",
        _ => "other",
    }
}

/// Record one completed inbound request.
pub fn record_request(method: &Method, status: u16, start: Instant) {
    let method = method_label(method);
    counter!(
        "gateway_requests_total",
        "method" => method,
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("gateway_request_duration_seconds", "method" => method)
        .record(start.elapsed().as_secs_f64());
}

/// Record a failed forward attempt.
pub fn record_forward_error(kind: &'static str) {
    counter!("gateway_forward_errors_total", "kind" => kind).increment(1);
}

/// Record upstream round-trip time, body read included.
pub fn record_upstream(status: u16, start: Instant) {
    histogram!("gateway_upstream_duration_seconds", "status" => status.to_string())
        .record(start.elapsed().as_secs_f64());
}
