//! Request handlers.

use std::time::Instant;

use axum::{
    extract::{RawQuery, State},
    http::{HeaderMap, Method},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::http::response;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::record;

/// Decode the query into a health record and relay the prediction.
pub async fn forward_handler(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    let start_time = Instant::now();
    let request_id = headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    if method != Method::GET {
        tracing::debug!(request_id = %request_id, method = %method, "Method not allowed");
        metrics::record_request(&method, 405, start_time);
        return response::method_not_allowed();
    }

    let record = record::decode_query_string(query.as_deref().unwrap_or_default());

    match state.forwarder.forward(&record).await {
        Ok(body) => {
            tracing::debug!(request_id = %request_id, bytes = body.len(), "Forwarded record");
            metrics::record_request(&method, 200, start_time);
            response::relay_json(body)
        }
        Err(e) => {
            tracing::error!(
                request_id = %request_id,
                upstream = %state.forwarder.url(),
                error = %e,
                "Forwarding error"
            );
            metrics::record_forward_error(e.kind());
            metrics::record_request(&method, 500, start_time);
            response::internal_error()
        }
    }
}

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
}

/// Liveness probe. Does not contact the upstream.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthStatus { status: "ok" })
}
