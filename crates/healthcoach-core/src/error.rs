use crate::Category;
use thiserror::Error;

/// Errors raised while reading health documents and configuration
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("health document must be a JSON object of category lists")]
    InvalidDocument,

    #[error("invalid timestamp: {0:?}")]
    InvalidTimestamp(String),

    #[error("malformed {category} record: {reason}")]
    MalformedRecord { category: Category, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
