use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("cannot open model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("model artifact is not valid json: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("invalid model artifact: {0}")]
    Invalid(String),

    #[error("model expects {expected} features, got {actual}")]
    FeatureCount { expected: usize, actual: usize },

    #[error("expected a {expected} artifact, found {actual}")]
    WrongKind {
        expected: &'static str,
        actual: &'static str,
    },
}
