//! Caller-facing responses.
//!
//! Forwarding failures collapse into one fixed 500 so callers never see
//! upstream diagnostics.

use axum::{
    body::Bytes,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

pub const METHOD_NOT_ALLOWED_BODY: &str = "Method not allowed";
pub const INTERNAL_ERROR_BODY: &str = "Internal Server Error";

/// 200 with the upstream body relayed byte for byte.
pub fn relay_json(body: Bytes) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

/// 405 for anything other than GET on the forward route.
pub fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "GET")],
        METHOD_NOT_ALLOWED_BODY,
    )
        .into_response()
}

/// Generic 500 for every forwarding failure.
pub fn internal_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response()
}
