//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request-id + trace middleware)
//!     → handlers.rs (method check, decode query, forward)
//!     → upstream::UpstreamForwarder
//!     → response.rs (200 relay / 405 / 500)
//!     → Send to client
//! ```

pub mod handlers;
pub mod response;
pub mod server;

pub use server::{AppState, HttpServer, FORWARD_PATH, HEALTH_PATH};
