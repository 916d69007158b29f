//! Error types for the document store

use thiserror::Error;

/// Document store errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid document id '{id}': {reason}")]
    InvalidId { id: String, reason: String },

    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] bson::ser::Error),
}

impl StoreError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

#[cfg(feature = "mongo")]
impl From<mongodb::error::Error> for StoreError {
    fn from(e: mongodb::error::Error) -> Self {
        Self::Backend(e.to_string())
    }
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
