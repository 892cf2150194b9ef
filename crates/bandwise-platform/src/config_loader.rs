//! Configuration file discovery and loading.
//!
//! The discovery order is:
//! 1. `BANDWISE_CONFIG` environment variable (path).
//! 2. `~/.bandwise/config.json`
//! 3. If none found, defaults.
//!
//! After the file is parsed, `BANDWISE_NLP_MODEL` and `BANDWISE_DEBUG`
//! override the corresponding fields.

use std::path::{Path, PathBuf};

use bandwise_types::config::Config;
use bandwise_types::error::{BandwiseError, Result};

use crate::env::Environment;

/// Env var naming an explicit config file.
pub const CONFIG_ENV: &str = "BANDWISE_CONFIG";
/// Env var overriding `nlp.model`.
pub const MODEL_ENV: &str = "BANDWISE_NLP_MODEL";
/// Env var overriding `server.debug`.
pub const DEBUG_ENV: &str = "BANDWISE_DEBUG";

/// Discover the config file path.
///
/// The `BANDWISE_CONFIG` path is returned even if it does not exist; the
/// loader decides how to treat a missing file. The home-directory candidate
/// is only returned when it exists.
pub fn discover_config_path(env: &dyn Environment, home_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(env_path) = env.get_var(CONFIG_ENV) {
        return Some(PathBuf::from(env_path));
    }

    let candidate = home_dir?.join(".bandwise").join("config.json");
    candidate.exists().then_some(candidate)
}

/// Load the configuration.
///
/// An explicit `config_override` that does not exist is an error. A
/// discovered path that does not exist falls back to defaults with a
/// warning.
pub async fn load_config(env: &dyn Environment, config_override: Option<&Path>) -> Result<Config> {
    let mut config = match config_override {
        Some(path) => {
            if !tokio::fs::try_exists(path).await.unwrap_or(false) {
                return Err(BandwiseError::ConfigNotFound {
                    path: path.display().to_string(),
                });
            }
            read_config_file(path).await?
        }
        None => match discover_config_path(env, dirs::home_dir()) {
            Some(path) if tokio::fs::try_exists(&path).await.unwrap_or(false) => {
                read_config_file(&path).await?
            }
            Some(path) => {
                tracing::warn!(
                    path = %path.display(),
                    "config path does not exist, using defaults"
                );
                Config::default()
            }
            None => {
                tracing::info!("no config file found, using defaults");
                Config::default()
            }
        },
    };

    apply_env_overrides(&mut config, env)?;
    config.validate()?;
    Ok(config)
}

async fn read_config_file(path: &Path) -> Result<Config> {
    tracing::debug!(path = %path.display(), "loading config file");
    let contents = tokio::fs::read_to_string(path).await?;
    let config = serde_json::from_str(&contents).map_err(|e| BandwiseError::ConfigInvalid {
        reason: format!("failed to parse {}: {e}", path.display()),
    })?;
    Ok(config)
}

/// Apply environment overrides on top of file-based configuration.
pub fn apply_env_overrides(config: &mut Config, env: &dyn Environment) -> Result<()> {
    if let Some(model) = env.get_var(MODEL_ENV).filter(|m| !m.trim().is_empty()) {
        tracing::debug!(model = %model, "nlp model overridden from environment");
        config.nlp.model = model;
    }

    if let Some(raw) = env.get_var(DEBUG_ENV) {
        config.server.debug = parse_bool(&raw).ok_or_else(|| BandwiseError::ConfigInvalid {
            reason: format!("{DEBUG_ENV} must be a boolean, got {raw:?}"),
        })?;
    }

    Ok(())
}

/// Parse the usual spellings of a boolean flag.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
