//! `bandwise config` -- display resolved configuration.
//!
//! # Examples
//!
//! ```text
//! bandwise config show
//! bandwise config show --config ./bandwise.json
//! ```

use bandwise_types::config::Config;

/// Display the resolved configuration as formatted JSON.
pub fn config_show(config: &Config) {
    match serde_json::to_string_pretty(config) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("error: failed to serialize config: {e}"),
    }
}
