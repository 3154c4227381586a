use railrisk_data::DataError;
use railrisk_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid literal for {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{0}")]
    Usage(String),
}

/// Anything that stops a command from producing its report.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("cannot render report: {0}")]
    Render(#[from] serde_json::Error),
}
