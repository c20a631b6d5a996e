//! Posting engine for Costbook.
//!
//! Converts heterogeneous source transactions (AP invoices, project
//! billings, labor costs, project expenses) into immutable posted records
//! tied to an accounting period, and supports flag-style reversal.
//!
//! # Modules
//!
//! - `types` - Posted record domain types and the snapshot constructor
//! - `error` - Posting-specific error types
//! - `engine` - Post and reverse operations

pub mod engine;
pub mod error;
pub mod types;

#[cfg(test)]
mod snapshot_props;

pub use engine::PostingEngine;
pub use error::PostingError;
pub use types::{
    PostedRecord, PostedRecordLineItem, PostedRecordWithLines, SourceTransaction,
    SourceTransactionLine, TransactionKind, DEFAULT_POSTED_BY,
};
