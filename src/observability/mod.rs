//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handlers / forwarder produce:
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout log stream
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - The x-request-id header is attached to every request span
//! - Upstream error bodies are logged, never returned to callers
//! - Metric updates are no-ops until an exporter is installed

pub mod logging;
pub mod metrics;
