//! Posting error types.
//!
//! All posting failures are local, recoverable conditions reported to the
//! caller as typed values; none are fatal to the process.

use costbook_shared::types::{AccountingPeriodVuid, PostedRecordVuid, TransactionVuid};
use thiserror::Error;

use super::types::TransactionKind;
use crate::store::StoreError;

/// Errors that can occur during posting and reversal.
#[derive(Debug, Error)]
pub enum PostingError {
    /// The transaction type string is outside the enumerated set.
    #[error("Invalid transaction type: {0}")]
    InvalidTransactionType(String),

    /// The transaction source could not resolve the transaction.
    #[error("Transaction not found: {kind} {transaction_vuid}")]
    TransactionNotFound {
        /// Which variant was requested.
        kind: TransactionKind,
        /// The source transaction identity.
        transaction_vuid: TransactionVuid,
    },

    /// An active posted record already references this transaction.
    #[error("Transaction already posted: {kind} {transaction_vuid}")]
    DuplicatePosting {
        /// Which variant was posted.
        kind: TransactionKind,
        /// The source transaction identity.
        transaction_vuid: TransactionVuid,
    },

    /// The accounting period is closed, no posting allowed.
    #[error("Accounting period {0} is closed, no posting allowed")]
    PeriodClosed(AccountingPeriodVuid),

    /// Posted record not found.
    #[error("Posted record not found: {0}")]
    RecordNotFound(PostedRecordVuid),

    /// The record has already been reversed; there is no un-reverse.
    #[error("Posted record {0} is already reversed")]
    AlreadyReversed(PostedRecordVuid),

    /// Storage failure.
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

impl PostingError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTransactionType(_) => "INVALID_TRANSACTION_TYPE",
            Self::TransactionNotFound { .. } => "TRANSACTION_NOT_FOUND",
            Self::DuplicatePosting { .. } => "DUPLICATE_POSTING",
            Self::PeriodClosed(_) => "PERIOD_CLOSED",
            Self::RecordNotFound(_) => "RECORD_NOT_FOUND",
            Self::AlreadyReversed(_) => "ALREADY_REVERSED",
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - validation errors
            Self::InvalidTransactionType(_) | Self::PeriodClosed(_) => 400,

            // 404 Not Found
            Self::TransactionNotFound { .. } | Self::RecordNotFound(_) => 404,

            // 409 Conflict - idempotency violations
            Self::DuplicatePosting { .. } | Self::AlreadyReversed(_) => 409,

            // 500 Internal Server Error
            Self::Storage(_) => 500,
        }
    }
}
