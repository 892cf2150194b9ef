//! CLI command implementations for `bandwise`.
//!
//! - [`serve`] -- HTTP API server.
//! - [`model`] -- Language model installation and inspection.
//! - [`config_cmd`] -- Resolved configuration display.

pub mod config_cmd;
pub mod model;
pub mod serve;

use bandwise_core::nlp::ModelStore;
use bandwise_types::config::Config;

/// Model store rooted at the configured models directory.
pub fn model_store(config: &Config) -> ModelStore {
    ModelStore::new(config.nlp.models_path())
}
