//! Journal export error types.

use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur during journal export.
#[derive(Debug, Error)]
pub enum JournalError {
    /// The ledger store failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

impl JournalError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::Storage(_) => 500,
        }
    }
}
