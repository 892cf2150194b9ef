//! `bandwise model` -- manage the models directory.
//!
//! # Examples
//!
//! ```text
//! bandwise model install
//! bandwise model install xx_generic
//! bandwise model show
//! bandwise model show en_core
//! ```

use anyhow::Context;
use bandwise_core::CoreError;
use bandwise_core::nlp::model::BUILTIN_MODELS;
use bandwise_types::config::Config;

use super::model_store;

/// Install `name` (or the configured model) from the built-in catalogue.
pub fn install(config: &Config, name: Option<&str>) -> anyhow::Result<()> {
    let name = name.unwrap_or(&config.nlp.model);
    let path = model_store(config)
        .install(name)
        .with_context(|| {
            format!(
                "failed to install model '{name}' (available: {})",
                BUILTIN_MODELS.join(", ")
            )
        })?;
    println!("installed {name} -> {}", path.display());
    Ok(())
}

/// Print an installed model as JSON, or list installed models.
pub fn show(config: &Config, name: Option<&str>) -> anyhow::Result<()> {
    let store = model_store(config);

    let Some(name) = name else {
        let installed = store.installed()?;
        println!("models directory: {}", store.root().display());
        println!("configured model: {}", config.nlp.model);
        if installed.is_empty() {
            println!("no models installed");
        } else {
            for model in installed {
                let marker = if model == config.nlp.model { "*" } else { " " };
                println!("{marker} {model}");
            }
        }
        return Ok(());
    };

    match store.load(name) {
        Ok(model) => {
            println!("{}", serde_json::to_string_pretty(&model)?);
            Ok(())
        }
        Err(CoreError::ModelNotFound { .. }) => {
            anyhow::bail!("model '{name}' is not installed; run `bandwise model install {name}`")
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &std::path::Path) -> Config {
        let mut config = Config::default();
        config.nlp.models_dir = dir.display().to_string();
        config
    }

    #[test]
    fn install_configured_model() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        install(&config, None).unwrap();
        assert!(dir.path().join("en_core.json").exists());
        show(&config, Some("en_core")).unwrap();
        show(&config, None).unwrap();
    }

    #[test]
    fn install_unknown_model_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = install(&config_in(dir.path()), Some("klingon")).unwrap_err();
        assert!(err.to_string().contains("klingon"));
    }

    #[test]
    fn show_missing_model_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = show(&config_in(dir.path()), Some("en_core")).unwrap_err();
        assert!(err.to_string().contains("not installed"));
    }

    #[test]
    fn list_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        show(&config_in(dir.path().join("missing").as_path()), None).unwrap();
    }
}
