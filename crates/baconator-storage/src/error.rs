//! Storage error types

use baconator_core::ErrorKind;
use thiserror::Error;

/// Result type alias for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Storage-specific error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// The graph rejected the operation; state is unchanged
    #[error(transparent)]
    Graph(#[from] baconator_core::Error),

    #[error("Lock error: {0}")]
    Lock(String),
}

impl StorageError {
    /// Kind of the underlying graph error, if this is one
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Graph(err) => Some(err.kind()),
            Self::Lock(_) => None,
        }
    }
}
