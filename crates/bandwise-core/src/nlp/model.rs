//! Language model definitions and the on-disk model store.
//!
//! A model is a small JSON document stored as `<models_dir>/<name>.json`.
//! Startup calls [`ModelStore::load_or_install`]: it tries to load the named
//! model and, if the file is missing, writes the built-in definition of the
//! same name and loads that.

use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{CoreError, Result};

/// Language model definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageModel {
    /// Identifier, also the file stem in the models directory.
    pub name: String,

    /// BCP 47 language tag, or `"xx"` for language-independent models.
    pub language: String,

    pub version: String,

    /// Lowercase abbreviations (without the trailing period) after which a
    /// full stop does not end a sentence.
    #[serde(default)]
    pub abbreviations: Vec<String>,
}

const EN_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "etc", "e.g", "i.e", "cf",
    "approx", "dept", "est", "fig", "inc", "ltd", "co", "corp", "no", "vol", "jan", "feb", "mar",
    "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
];

/// Names of the models that can be installed without a file on disk.
pub const BUILTIN_MODELS: &[&str] = &["en_core", "xx_generic"];

impl LanguageModel {
    /// Built-in definition for `name`, if one exists.
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "en_core" => Some(Self {
                name: name.into(),
                language: "en".into(),
                version: "1.0.0".into(),
                abbreviations: EN_ABBREVIATIONS.iter().map(|s| (*s).to_string()).collect(),
            }),
            "xx_generic" => Some(Self {
                name: name.into(),
                language: "xx".into(),
                version: "1.0.0".into(),
                abbreviations: Vec::new(),
            }),
            _ => None,
        }
    }

    /// Normalized abbreviation set.
    pub fn abbreviation_set(&self) -> BTreeSet<String> {
        self.abbreviations
            .iter()
            .map(|a| a.trim().trim_end_matches('.').to_lowercase())
            .filter(|a| !a.is_empty())
            .collect()
    }
}

/// Directory of installed language models.
#[derive(Debug, Clone)]
pub struct ModelStore {
    root: PathBuf,
}

impl ModelStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File path for `name`. Fails for names that could escape the store.
    pub fn path_for(&self, name: &str) -> Result<PathBuf> {
        validate_name(name)?;
        Ok(self.root.join(format!("{name}.json")))
    }

    /// Load an installed model.
    pub fn load(&self, name: &str) -> Result<LanguageModel> {
        let path = self.path_for(name)?;
        let contents = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(CoreError::ModelNotFound { name: name.into() });
            }
            Err(e) => return Err(e.into()),
        };

        let model: LanguageModel =
            serde_json::from_str(&contents).map_err(|e| CoreError::ModelLoad {
                name: name.into(),
                reason: e.to_string(),
            })?;

        if model.name != name {
            return Err(CoreError::ModelLoad {
                name: name.into(),
                reason: format!("file declares model {:?}", model.name),
            });
        }

        debug!(model = %name, path = %path.display(), "language model loaded");
        Ok(model)
    }

    /// Write the built-in definition of `name` into the store.
    pub fn install(&self, name: &str) -> Result<PathBuf> {
        let path = self.path_for(name)?;
        let model =
            LanguageModel::builtin(name).ok_or_else(|| CoreError::ModelNotFound { name: name.into() })?;

        let json = serde_json::to_string_pretty(&model).map_err(|e| CoreError::ModelLoad {
            name: name.into(),
            reason: e.to_string(),
        })?;

        let write = || -> std::io::Result<()> {
            std::fs::create_dir_all(&self.root)?;
            std::fs::write(&path, json)
        };
        write().map_err(|source| CoreError::ModelInstall {
            name: name.into(),
            source,
        })?;

        info!(model = %name, path = %path.display(), "language model installed");
        Ok(path)
    }

    /// Load `name`, installing the built-in definition first if it is
    /// missing and `auto_install` is set.
    pub fn load_or_install(&self, name: &str, auto_install: bool) -> Result<LanguageModel> {
        match self.load(name) {
            Err(CoreError::ModelNotFound { .. }) if auto_install => {
                info!(model = %name, "language model not installed, installing");
                self.install(name)?;
                self.load(name)
            }
            other => other,
        }
    }

    /// Names of installed models, sorted.
    pub fn installed(&self) -> Result<Vec<String>> {
        let entries = match std::fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json")
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

fn validate_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
        && !name.starts_with('.');
    if valid {
        Ok(())
    } else {
        Err(CoreError::ModelLoad {
            name: name.into(),
            reason: "model names may only contain letters, digits, '_', '-' and '.'".into(),
        })
    }
}
