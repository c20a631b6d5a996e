//! Storage ports for the posting core.
//!
//! The engine, aggregator and exporter each receive explicit store handles
//! at construction; there is no process-wide singleton. The database crate
//! implements [`LedgerStore`] over SeaORM; [`memory::MemoryLedgerStore`]
//! backs tests and prototyping. `TransactionSource` and `ProjectStore` are
//! owned by external CRUD collaborators and only consumed here.

pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use costbook_shared::types::{
    AccountingPeriodVuid, PostedRecordVuid, ProjectVuid, TransactionVuid,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::period::AccountingPeriod;
use crate::posting::types::{PostedRecordWithLines, SourceTransaction, TransactionKind};

pub use memory::{MemoryLedgerStore, MemoryProjectStore, MemoryTransactionSource};

/// Errors surfaced by storage backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend failed (connection, statement, transaction).
    #[error("storage backend error: {0}")]
    Backend(String),

    /// A uniqueness constraint was violated.
    #[error("unique constraint violated: {0}")]
    DuplicateKey(String),
}

/// Contract-level financials of a project, read by the WIP aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFinancials {
    /// The project.
    pub project_vuid: ProjectVuid,
    /// Total contract amount for the project.
    pub total_contract_amount: Decimal,
}

/// Durable storage of posted records, keyed by accounting period and project.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Persists a posted record with all its line items as one atomic unit.
    ///
    /// A failure partway must leave no partial record behind.
    async fn insert_posted(&self, posted: PostedRecordWithLines) -> Result<(), StoreError>;

    /// Loads a posted record with its line items.
    async fn find_posted(
        &self,
        vuid: PostedRecordVuid,
    ) -> Result<Option<PostedRecordWithLines>, StoreError>;

    /// Finds the active (non-reversed) posted record for a source
    /// transaction, if one exists. Backs the duplicate-posting guard.
    async fn find_active_for_source(
        &self,
        kind: TransactionKind,
        transaction_vuid: TransactionVuid,
    ) -> Result<Option<PostedRecordVuid>, StoreError>;

    /// Sets the reversal fields on a record, only if it is still active.
    ///
    /// Must be an atomic conditional update; returns the number of records
    /// affected (0 when the record is missing or already reversed).
    async fn mark_reversed(
        &self,
        vuid: PostedRecordVuid,
        reversed_by: &str,
        reversed_at: DateTime<Utc>,
    ) -> Result<u64, StoreError>;

    /// Lists every posted record (reversed included) for a period, with
    /// line items, in stable posting order.
    async fn list_for_period(
        &self,
        accounting_period_vuid: AccountingPeriodVuid,
    ) -> Result<Vec<PostedRecordWithLines>, StoreError>;

    /// Loads an accounting period, if known to the ledger.
    async fn fetch_period(
        &self,
        vuid: AccountingPeriodVuid,
    ) -> Result<Option<AccountingPeriod>, StoreError>;
}

#[async_trait]
impl<T> LedgerStore for std::sync::Arc<T>
where
    T: LedgerStore + ?Sized,
{
    async fn insert_posted(&self, posted: PostedRecordWithLines) -> Result<(), StoreError> {
        (**self).insert_posted(posted).await
    }

    async fn find_posted(
        &self,
        vuid: PostedRecordVuid,
    ) -> Result<Option<PostedRecordWithLines>, StoreError> {
        (**self).find_posted(vuid).await
    }

    async fn find_active_for_source(
        &self,
        kind: TransactionKind,
        transaction_vuid: TransactionVuid,
    ) -> Result<Option<PostedRecordVuid>, StoreError> {
        (**self).find_active_for_source(kind, transaction_vuid).await
    }

    async fn mark_reversed(
        &self,
        vuid: PostedRecordVuid,
        reversed_by: &str,
        reversed_at: DateTime<Utc>,
    ) -> Result<u64, StoreError> {
        (**self).mark_reversed(vuid, reversed_by, reversed_at).await
    }

    async fn list_for_period(
        &self,
        accounting_period_vuid: AccountingPeriodVuid,
    ) -> Result<Vec<PostedRecordWithLines>, StoreError> {
        (**self).list_for_period(accounting_period_vuid).await
    }

    async fn fetch_period(
        &self,
        vuid: AccountingPeriodVuid,
    ) -> Result<Option<AccountingPeriod>, StoreError> {
        (**self).fetch_period(vuid).await
    }
}

/// External collaborator resolving draft transactions for posting.
#[async_trait]
pub trait TransactionSource: Send + Sync {
    /// Fetches the uniform view of a source transaction.
    async fn fetch_transaction(
        &self,
        kind: TransactionKind,
        vuid: TransactionVuid,
    ) -> Result<Option<SourceTransaction>, StoreError>;
}

#[async_trait]
impl<T> TransactionSource for std::sync::Arc<T>
where
    T: TransactionSource + ?Sized,
{
    async fn fetch_transaction(
        &self,
        kind: TransactionKind,
        vuid: TransactionVuid,
    ) -> Result<Option<SourceTransaction>, StoreError> {
        (**self).fetch_transaction(kind, vuid).await
    }
}

/// External collaborator exposing project contract financials.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Fetches the financials of a project.
    async fn fetch_project(
        &self,
        vuid: ProjectVuid,
    ) -> Result<Option<ProjectFinancials>, StoreError>;
}

#[async_trait]
impl<T> ProjectStore for std::sync::Arc<T>
where
    T: ProjectStore + ?Sized,
{
    async fn fetch_project(
        &self,
        vuid: ProjectVuid,
    ) -> Result<Option<ProjectFinancials>, StoreError> {
        (**self).fetch_project(vuid).await
    }
}
