//! Health Metrics Gateway Library
//!
//! Accepts lab values as query parameters on `GET /api/forward`, assembles a
//! [`HealthRecord`] and relays it to the prediction API.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod record;
pub mod upstream;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use record::HealthRecord;
pub use upstream::{ForwardError, UpstreamForwarder};
