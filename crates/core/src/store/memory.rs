//! In-memory implementations of the storage ports.
//!
//! Used by the test suites and for prototyping without a database. All
//! maps are `BTreeMap`s keyed by VUID; since VUIDs are UUID v7
//! (time-ordered), iteration yields insertion order deterministically.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use costbook_shared::types::{
    AccountingPeriodVuid, PostedRecordVuid, ProjectVuid, TransactionVuid,
};

use super::{LedgerStore, ProjectFinancials, ProjectStore, StoreError, TransactionSource};
use crate::period::AccountingPeriod;
use crate::posting::types::{PostedRecordWithLines, SourceTransaction, TransactionKind};

/// Thread-safe in-memory ledger store.
#[derive(Debug, Default)]
pub struct MemoryLedgerStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    records: BTreeMap<PostedRecordVuid, PostedRecordWithLines>,
    periods: BTreeMap<AccountingPeriodVuid, AccountingPeriod>,
}

impl MemoryLedgerStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an accounting period.
    pub fn put_period(&self, period: AccountingPeriod) {
        let mut inner = self.inner.lock().expect("ledger store lock poisoned");
        inner.periods.insert(period.vuid, period);
    }

    /// Returns the number of stored posted records.
    #[must_use]
    pub fn record_count(&self) -> usize {
        let inner = self.inner.lock().expect("ledger store lock poisoned");
        inner.records.len()
    }
}

#[async_trait]
impl LedgerStore for MemoryLedgerStore {
    async fn insert_posted(&self, posted: PostedRecordWithLines) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().expect("ledger store lock poisoned");
        // Mirror the partial unique index on active (kind, transaction_vuid).
        let duplicate = inner.records.values().any(|existing| {
            existing.record.is_active()
                && existing.record.transaction_kind == posted.record.transaction_kind
                && existing.record.transaction_vuid == posted.record.transaction_vuid
        });
        if duplicate {
            return Err(StoreError::DuplicateKey(format!(
                "active posting for {} {}",
                posted.record.transaction_kind, posted.record.transaction_vuid
            )));
        }
        inner.records.insert(posted.record.vuid, posted);
        Ok(())
    }

    async fn find_posted(
        &self,
        vuid: PostedRecordVuid,
    ) -> Result<Option<PostedRecordWithLines>, StoreError> {
        let inner = self.inner.lock().expect("ledger store lock poisoned");
        Ok(inner.records.get(&vuid).cloned())
    }

    async fn find_active_for_source(
        &self,
        kind: TransactionKind,
        transaction_vuid: TransactionVuid,
    ) -> Result<Option<PostedRecordVuid>, StoreError> {
        let inner = self.inner.lock().expect("ledger store lock poisoned");
        Ok(inner
            .records
            .values()
            .find(|posted| {
                posted.record.is_active()
                    && posted.record.transaction_kind == kind
                    && posted.record.transaction_vuid == transaction_vuid
            })
            .map(|posted| posted.record.vuid))
    }

    async fn mark_reversed(
        &self,
        vuid: PostedRecordVuid,
        reversed_by: &str,
        reversed_at: DateTime<Utc>,
    ) -> Result<u64, StoreError> {
        let mut inner = self.inner.lock().expect("ledger store lock poisoned");
        match inner.records.get_mut(&vuid) {
            Some(posted) if posted.record.is_active() => {
                posted.record.reversed_by = Some(reversed_by.to_string());
                posted.record.reversed_at = Some(reversed_at);
                Ok(1)
            }
            _ => Ok(0),
        }
    }

    async fn list_for_period(
        &self,
        accounting_period_vuid: AccountingPeriodVuid,
    ) -> Result<Vec<PostedRecordWithLines>, StoreError> {
        let inner = self.inner.lock().expect("ledger store lock poisoned");
        Ok(inner
            .records
            .values()
            .filter(|posted| posted.record.accounting_period_vuid == accounting_period_vuid)
            .cloned()
            .collect())
    }

    async fn fetch_period(
        &self,
        vuid: AccountingPeriodVuid,
    ) -> Result<Option<AccountingPeriod>, StoreError> {
        let inner = self.inner.lock().expect("ledger store lock poisoned");
        Ok(inner.periods.get(&vuid).cloned())
    }
}

/// In-memory transaction source.
#[derive(Debug, Default)]
pub struct MemoryTransactionSource {
    transactions: Mutex<BTreeMap<(TransactionKind, TransactionVuid), SourceTransaction>>,
}

impl MemoryTransactionSource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a source transaction.
    pub fn put_transaction(&self, transaction: SourceTransaction) {
        let mut transactions = self
            .transactions
            .lock()
            .expect("transaction source lock poisoned");
        transactions.insert((transaction.kind, transaction.vuid), transaction);
    }
}

#[async_trait]
impl TransactionSource for MemoryTransactionSource {
    async fn fetch_transaction(
        &self,
        kind: TransactionKind,
        vuid: TransactionVuid,
    ) -> Result<Option<SourceTransaction>, StoreError> {
        let transactions = self
            .transactions
            .lock()
            .expect("transaction source lock poisoned");
        Ok(transactions.get(&(kind, vuid)).cloned())
    }
}

/// In-memory project store.
#[derive(Debug, Default)]
pub struct MemoryProjectStore {
    projects: Mutex<BTreeMap<ProjectVuid, ProjectFinancials>>,
}

impl MemoryProjectStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a project's financials.
    pub fn put_project(&self, financials: ProjectFinancials) {
        let mut projects = self.projects.lock().expect("project store lock poisoned");
        projects.insert(financials.project_vuid, financials);
    }
}

#[async_trait]
impl ProjectStore for MemoryProjectStore {
    async fn fetch_project(
        &self,
        vuid: ProjectVuid,
    ) -> Result<Option<ProjectFinancials>, StoreError> {
        let projects = self.projects.lock().expect("project store lock poisoned");
        Ok(projects.get(&vuid).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::period::PeriodStatus;
    use crate::posting::types::SourceTransactionLine;
    use costbook_shared::types::{CostCodeVuid, CostTypeVuid};
    use rust_decimal_macros::dec;

    fn sample_posted(period: AccountingPeriodVuid) -> PostedRecordWithLines {
        let source = SourceTransaction {
            kind: TransactionKind::LaborCost,
            vuid: TransactionVuid::new(),
            project_vuid: ProjectVuid::new(),
            accounting_period_vuid: period,
            reference_number: Some("LC-7".to_string()),
            description: None,
            total_amount: dec!(1250.00),
            lines: vec![SourceTransactionLine {
                cost_code_vuid: CostCodeVuid::new(),
                cost_type_vuid: CostTypeVuid::new(),
                description: None,
                quantity: dec!(25),
                unit_cost: dec!(50.00),
                total_cost: dec!(1250.00),
            }],
        };
        PostedRecordWithLines::snapshot(&source, "System", Utc::now())
    }

    #[tokio::test]
    async fn test_insert_and_find_roundtrip() {
        let store = MemoryLedgerStore::new();
        let posted = sample_posted(AccountingPeriodVuid::new());
        let vuid = posted.record.vuid;

        store.insert_posted(posted.clone()).await.unwrap();
        let found = store.find_posted(vuid).await.unwrap().unwrap();
        assert_eq!(found, posted);
    }

    #[tokio::test]
    async fn test_insert_rejects_active_duplicate() {
        let store = MemoryLedgerStore::new();
        let period = AccountingPeriodVuid::new();
        let first = sample_posted(period);
        let mut second = sample_posted(period);
        second.record.transaction_vuid = first.record.transaction_vuid;

        store.insert_posted(first).await.unwrap();
        let err = store.insert_posted(second).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateKey(_)));
    }

    #[tokio::test]
    async fn test_mark_reversed_is_one_shot() {
        let store = MemoryLedgerStore::new();
        let posted = sample_posted(AccountingPeriodVuid::new());
        let vuid = posted.record.vuid;
        store.insert_posted(posted).await.unwrap();

        let now = Utc::now();
        assert_eq!(store.mark_reversed(vuid, "jdoe", now).await.unwrap(), 1);
        assert_eq!(store.mark_reversed(vuid, "mallory", now).await.unwrap(), 0);

        let found = store.find_posted(vuid).await.unwrap().unwrap();
        assert_eq!(found.record.reversed_by.as_deref(), Some("jdoe"));
    }

    #[tokio::test]
    async fn test_mark_reversed_missing_record_affects_zero() {
        let store = MemoryLedgerStore::new();
        let affected = store
            .mark_reversed(PostedRecordVuid::new(), "jdoe", Utc::now())
            .await
            .unwrap();
        assert_eq!(affected, 0);
    }

    #[tokio::test]
    async fn test_list_for_period_scopes_by_period() {
        let store = MemoryLedgerStore::new();
        let period_a = AccountingPeriodVuid::new();
        let period_b = AccountingPeriodVuid::new();
        store.insert_posted(sample_posted(period_a)).await.unwrap();
        store.insert_posted(sample_posted(period_a)).await.unwrap();
        store.insert_posted(sample_posted(period_b)).await.unwrap();

        assert_eq!(store.list_for_period(period_a).await.unwrap().len(), 2);
        assert_eq!(store.list_for_period(period_b).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_period() {
        let store = MemoryLedgerStore::new();
        let period = AccountingPeriod {
            vuid: AccountingPeriodVuid::new(),
            month: 6,
            year: 2026,
            status: PeriodStatus::Open,
        };
        store.put_period(period.clone());

        let found = store.fetch_period(period.vuid).await.unwrap().unwrap();
        assert_eq!(found.month, 6);
        assert!(store
            .fetch_period(AccountingPeriodVuid::new())
            .await
            .unwrap()
            .is_none());
    }
}
