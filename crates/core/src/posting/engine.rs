//! Posting engine: converts source transactions into immutable ledger
//! entries and flags them reversed.

use chrono::Utc;
use costbook_shared::types::{PostedRecordVuid, TransactionVuid};

use super::error::PostingError;
use super::types::{PostedRecordWithLines, TransactionKind, DEFAULT_POSTED_BY};
use crate::store::{LedgerStore, StoreError, TransactionSource};

/// Posting engine over explicit store handles.
///
/// Each call executes as one transactional unit of work against the ledger
/// store; the engine itself holds no mutable state.
pub struct PostingEngine<S, T> {
    store: S,
    source: T,
}

impl<S, T> PostingEngine<S, T>
where
    S: LedgerStore,
    T: TransactionSource,
{
    /// Creates a posting engine.
    pub const fn new(store: S, source: T) -> Self {
        Self { store, source }
    }

    /// Posts a source transaction into the ledger.
    ///
    /// Snapshots the transaction's header fields and every line item into a
    /// new [`PostedRecord`](super::types::PostedRecord), created atomically
    /// with its line items. `posted_by` defaults to `"System"`.
    ///
    /// # Errors
    ///
    /// - [`PostingError::TransactionNotFound`] when the source cannot
    ///   resolve the transaction
    /// - [`PostingError::PeriodClosed`] when the ledger knows the target
    ///   period and it is closed
    /// - [`PostingError::DuplicatePosting`] when an active posted record
    ///   already references this transaction
    /// - [`PostingError::Storage`] on backend failure, with nothing written
    pub async fn post(
        &self,
        kind: TransactionKind,
        transaction_vuid: TransactionVuid,
        posted_by: Option<&str>,
    ) -> Result<PostedRecordVuid, PostingError> {
        let posted_by = posted_by.unwrap_or(DEFAULT_POSTED_BY);

        let source = self
            .source
            .fetch_transaction(kind, transaction_vuid)
            .await?
            .ok_or(PostingError::TransactionNotFound {
                kind,
                transaction_vuid,
            })?;

        // Period records are provisioned by an external workflow; an
        // unknown period is not an error, a closed one is.
        if let Some(period) = self
            .store
            .fetch_period(source.accounting_period_vuid)
            .await?
        {
            if !period.allows_posting() {
                return Err(PostingError::PeriodClosed(period.vuid));
            }
        }

        if self
            .store
            .find_active_for_source(kind, transaction_vuid)
            .await?
            .is_some()
        {
            return Err(PostingError::DuplicatePosting {
                kind,
                transaction_vuid,
            });
        }

        let posted = PostedRecordWithLines::snapshot(&source, posted_by, Utc::now());
        let vuid = posted.record.vuid;

        match self.store.insert_posted(posted).await {
            Ok(()) => Ok(vuid),
            // Racing posters: the store's uniqueness constraint closes the
            // window between the guard query and the insert.
            Err(StoreError::DuplicateKey(_)) => Err(PostingError::DuplicatePosting {
                kind,
                transaction_vuid,
            }),
            Err(err) => Err(err.into()),
        }
    }

    /// Reverses a posted record.
    ///
    /// Reversal is a flag, not an offsetting entry: the record's snapshot
    /// fields and line items are untouched, only `reversed_by`/`reversed_at`
    /// transition from null to set, exactly once.
    ///
    /// # Errors
    ///
    /// - [`PostingError::RecordNotFound`] when the record does not exist
    /// - [`PostingError::AlreadyReversed`] when it was reversed before; the
    ///   original reversal fields are left unchanged
    pub async fn reverse(
        &self,
        vuid: PostedRecordVuid,
        reversed_by: &str,
    ) -> Result<(), PostingError> {
        let affected = self
            .store
            .mark_reversed(vuid, reversed_by, Utc::now())
            .await?;

        if affected > 0 {
            return Ok(());
        }

        // Zero rows affected: either the record is missing or the
        // conditional update lost to an earlier reversal.
        match self.store.find_posted(vuid).await? {
            Some(_) => Err(PostingError::AlreadyReversed(vuid)),
            None => Err(PostingError::RecordNotFound(vuid)),
        }
    }
}
