use healthcoach_core::CoreError;
use thiserror::Error;

/// Errors raised by the compression pipeline
#[derive(Error, Debug)]
pub enum CompressError {
    #[error("raw input is empty; size reduction is undefined")]
    EmptyInput,

    #[error(transparent)]
    Input(#[from] CoreError),

    #[error("failed to measure compressed output: {0}")]
    Serialize(#[from] serde_json::Error),
}
