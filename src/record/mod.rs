//! Health record subsystem.
//!
//! # Data Flow
//! ```text
//! raw query string ("uid=p1&age=45&wbc=6.2")
//!     → query.rs (form-urlencoded split → QueryValues)
//!     → decoder.rs (key lookup table → typed setters)
//!     → HealthRecord (fully populated, immutable)
//!     → schema.rs serde impl → JSON payload for the upstream
//! ```
//!
//! # Design Decisions
//! - Decoding never fails; malformed numbers keep the field default
//! - The record is rebuilt per request and never stored

pub mod decoder;
pub mod query;
pub mod schema;

pub use decoder::{decode, decode_query_string};
pub use query::{parse_query, QueryValues};
pub use schema::{HealthRecord, DEFAULT_UID};
