//! # bandwise-core
//!
//! Scoring engine for the bandwise service.
//!
//! - [`scoring`] -- criteria aggregation into a band score
//! - [`feedback`] -- static feedback table keyed by band score
//! - [`nlp`] -- language models and the rule-based sentence segmenter
//! - [`classifier`] -- proficiency tier from average sentence length
//! - [`evaluate`] -- the full evaluation pipeline
//! - [`progress`] -- band score history charts rendered to PNG

pub mod classifier;
pub mod error;
pub mod evaluate;
pub mod feedback;
pub mod nlp;
pub mod progress;
pub mod scoring;

pub use error::{CoreError, Result};
pub use evaluate::Evaluator;
pub use progress::ProgressRenderer;
