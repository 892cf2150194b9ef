//! HTTP services for bandwise.
//!
//! Exposes the evaluation, progress chart, and health endpoints over
//! [`axum`]. Request handling delegates to [`bandwise_core`]; this crate
//! owns request validation and the mapping of failures to HTTP responses.

pub mod api;
pub mod error;
