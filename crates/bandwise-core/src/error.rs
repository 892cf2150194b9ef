//! Core error types.

use thiserror::Error;

/// Errors produced by the scoring engine.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The requested language model is neither installed nor built in.
    #[error("language model not found: {name}")]
    ModelNotFound { name: String },

    /// A model file exists but could not be used.
    #[error("failed to load language model {name}: {reason}")]
    ModelLoad { name: String, reason: String },

    /// Writing a model definition to the models directory failed.
    #[error("failed to install language model {name}: {source}")]
    ModelInstall {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// Sentence segmentation failed.
    #[error("segmentation failed: {0}")]
    Segmentation(String),

    /// Chart rendering or PNG encoding failed.
    #[error("render failed: {0}")]
    Render(String),

    /// Underlying I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for results in this crate.
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CoreError::ModelNotFound {
            name: "fr_core".into(),
        };
        assert_eq!(err.to_string(), "language model not found: fr_core");

        let err = CoreError::ModelLoad {
            name: "en_core".into(),
            reason: "bad json".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to load language model en_core: bad json"
        );

        let err = CoreError::Render("buffer too small".into());
        assert_eq!(err.to_string(), "render failed: buffer too small");
    }

    #[test]
    fn install_error_keeps_source() {
        use std::error::Error as _;
        let err = CoreError::ModelInstall {
            name: "en_core".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        };
        assert!(err.to_string().contains("read-only"));
        assert!(err.source().is_some());
    }
}
