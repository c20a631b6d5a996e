//! WIP report error types.
//!
//! Per-project calculation faults never surface here; they are carried as
//! explicit markers on the affected [`WipRow`](super::types::WipRow) so one
//! project cannot abort the whole report.

use thiserror::Error;

use crate::store::StoreError;

/// Errors that can abort WIP report generation.
#[derive(Debug, Error)]
pub enum WipError {
    /// The ledger store itself failed; no report could be produced.
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

impl WipError {
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
