//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! environment variables / CLI flags
//!     → loader.rs (clap parse, env fallback)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!     → handed to HttpServer::new at wiring time
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; there is no reload
//! - The upstream credential has no built-in default
//! - Validation reports every problem, not just the first

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_config_from, ConfigError};
pub use schema::{GatewayConfig, ListenerConfig, ObservabilityConfig, UpstreamConfig};
pub use validation::{validate_config, ValidationError};
