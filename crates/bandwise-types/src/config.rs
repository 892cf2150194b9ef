//! Configuration schema types.
//!
//! All structs accept both `snake_case` and `camelCase` field names in JSON
//! via `#[serde(alias)]`. Unknown fields are silently ignored for forward
//! compatibility, and every section falls back to its defaults when absent.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{BandwiseError, Result};

// ── Root config ──────────────────────────────────────────────────────────

/// Root configuration for the bandwise service.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Sentence segmentation model settings.
    #[serde(default)]
    pub nlp: NlpConfig,

    /// Progress chart rendering settings.
    #[serde(default)]
    pub chart: ChartConfig,
}

impl Config {
    /// Check semantic constraints that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.nlp.model.trim().is_empty() {
            return Err(BandwiseError::ConfigInvalid {
                reason: "nlp.model must not be empty".into(),
            });
        }
        if self.chart.width < MIN_CHART_SIDE || self.chart.height < MIN_CHART_SIDE {
            return Err(BandwiseError::ConfigInvalid {
                reason: format!(
                    "chart dimensions must be at least {MIN_CHART_SIDE}x{MIN_CHART_SIDE}, got {}x{}",
                    self.chart.width, self.chart.height
                ),
            });
        }
        Ok(())
    }
}

/// Expand a leading `~/` to the user's home directory.
pub fn expand_home(raw: &str) -> PathBuf {
    if let Some(rest) = raw.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(raw)
}

// ── Server ───────────────────────────────────────────────────────────────

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address.
    #[serde(default = "default_host")]
    pub host: String,

    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Debug mode: verbose logging.
    #[serde(default)]
    pub debug: bool,

    /// Allowed CORS origins. Empty means permissive.
    #[serde(default, alias = "corsOrigins")]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".into()
}
fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: false,
            cors_origins: Vec::new(),
        }
    }
}

// ── NLP ──────────────────────────────────────────────────────────────────

/// Default language model identifier.
pub const DEFAULT_MODEL: &str = "en_core";

/// Sentence segmentation model configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NlpConfig {
    /// Language model identifier.
    #[serde(default = "default_model")]
    pub model: String,

    /// Directory holding installed model definitions.
    #[serde(default = "default_models_dir", alias = "modelsDir")]
    pub models_dir: String,

    /// Install a missing model from the built-in catalogue on startup.
    #[serde(default = "default_true", alias = "autoInstall")]
    pub auto_install: bool,
}

fn default_model() -> String {
    DEFAULT_MODEL.into()
}
fn default_models_dir() -> String {
    "~/.bandwise/models".into()
}
fn default_true() -> bool {
    true
}

impl NlpConfig {
    /// The models directory with `~/` expanded.
    pub fn models_path(&self) -> PathBuf {
        expand_home(&self.models_dir)
    }
}

impl Default for NlpConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            models_dir: default_models_dir(),
            auto_install: true,
        }
    }
}

// ── Chart ────────────────────────────────────────────────────────────────

const MIN_CHART_SIDE: u32 = 64;

/// Progress chart configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Image width in pixels.
    #[serde(default = "default_chart_width")]
    pub width: u32,

    /// Image height in pixels.
    #[serde(default = "default_chart_height")]
    pub height: u32,

    /// TrueType font used for the title and axis labels. When unset, a
    /// few well-known system locations are searched.
    #[serde(default, alias = "fontPath")]
    pub font_path: Option<String>,
}

fn default_chart_width() -> u32 {
    640
}
fn default_chart_height() -> u32 {
    480
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_chart_width(),
            height: default_chart_height(),
            font_path: None,
        }
    }
}
