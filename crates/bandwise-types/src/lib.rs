//! # bandwise-types
//!
//! Core type definitions for the bandwise proficiency scoring service.
//!
//! This crate is the foundation of the dependency graph -- all other
//! bandwise crates depend on it. It contains:
//!
//! - **[`error`]** -- [`BandwiseError`] shared error type
//! - **[`config`]** -- Configuration schema (server, nlp, chart)
//! - **[`evaluation`]** -- Criteria, feedback records, proficiency tiers
//! - **[`progress`]** -- Progress chart request/response bodies

pub mod config;
pub mod error;
pub mod evaluation;
pub mod progress;

pub use error::{BandwiseError, Result};
