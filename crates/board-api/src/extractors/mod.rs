//! Request extractors
//!
//! Provides the JSON payload extractor enforcing the content-type and
//! body-format rules shared by every mutating endpoint.

pub mod payload;

pub use payload::{parse_payload, JsonPayload};
