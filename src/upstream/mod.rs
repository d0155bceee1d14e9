//! Upstream prediction API subsystem.
//!
//! # Data Flow
//! ```text
//! HealthRecord
//!     → serde_json (payload bytes)
//!     → forwarder.rs (POST with Authorization / JSON headers)
//!     → upstream status >= 400? → ForwardError::Upstream
//!     → raw response body, unmodified
//! ```
//!
//! # Design Decisions
//! - One attempt per request, no retries
//! - The full body is read before the status is inspected
//! - The response body is relayed without being parsed

pub mod error;
pub mod forwarder;

pub use error::ForwardError;
pub use forwarder::UpstreamForwarder;
