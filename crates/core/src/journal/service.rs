//! Journal export service.
//!
//! Pure projections over the ledger store: the "export" is a formatted
//! read, never a call to a third-party system, and nothing here mutates
//! stored records.

use chrono::Utc;
use costbook_shared::types::AccountingPeriodVuid;

use super::error::JournalError;
use super::types::{JournalEntry, JournalPreview, JournalPreviewEntry, JournalReport};
use crate::posting::types::{PostedRecord, PostedRecordWithLines};
use crate::store::LedgerStore;

/// Renders non-reversed posted records as journal entries with full lines.
#[must_use]
pub fn build_entries(posted: Vec<PostedRecordWithLines>) -> Vec<JournalEntry> {
    posted
        .into_iter()
        .filter(|entry| entry.record.is_active())
        .map(|entry| JournalEntry {
            posted_record_vuid: entry.record.vuid,
            transaction_kind: entry.record.transaction_kind,
            reference_number: entry.record.reference_number,
            description: entry.record.description,
            total_amount: entry.record.total_amount,
            posted_by: entry.record.posted_by,
            posted_at: entry.record.posted_at,
            line_items: entry.line_items,
        })
        .collect()
}

/// Renders non-reversed posted records with lines collapsed to a count.
#[must_use]
pub fn build_preview_entries(posted: Vec<PostedRecordWithLines>) -> Vec<JournalPreviewEntry> {
    posted
        .into_iter()
        .filter(|entry| entry.record.is_active())
        .map(|entry| JournalPreviewEntry {
            posted_record_vuid: entry.record.vuid,
            transaction_kind: entry.record.transaction_kind,
            reference_number: entry.record.reference_number,
            description: entry.record.description,
            total_amount: entry.record.total_amount,
            posted_by: entry.record.posted_by,
            posted_at: entry.record.posted_at,
            line_item_count: entry.line_items.len(),
        })
        .collect()
}

/// Journal exporter over an explicit ledger store handle.
pub struct JournalExporter<S> {
    store: S,
}

impl<S> JournalExporter<S>
where
    S: LedgerStore,
{
    /// Creates a journal exporter.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Exports the journal-entry document for an accounting period.
    ///
    /// Selects all non-reversed posted records for the period, each with
    /// its full line-item detail.
    pub async fn export_journal(
        &self,
        accounting_period_vuid: AccountingPeriodVuid,
    ) -> Result<JournalReport, JournalError> {
        let posted = self.store.list_for_period(accounting_period_vuid).await?;

        Ok(JournalReport {
            accounting_period_vuid,
            generated_at: Utc::now(),
            entries: build_entries(posted),
        })
    }

    /// Previews the journal for an accounting period.
    ///
    /// Same selection as [`Self::export_journal`], with line items
    /// collapsed to a count - the lighter read for UI listing.
    pub async fn preview_journal(
        &self,
        accounting_period_vuid: AccountingPeriodVuid,
    ) -> Result<JournalPreview, JournalError> {
        let posted = self.store.list_for_period(accounting_period_vuid).await?;

        Ok(JournalPreview {
            accounting_period_vuid,
            generated_at: Utc::now(),
            entries: build_preview_entries(posted),
        })
    }

    /// Lists every posted record for a period, reversed ones included.
    ///
    /// Audit/display listing: reversal state is part of the audit trail,
    /// so nothing is filtered here.
    pub async fn list_posted_records(
        &self,
        accounting_period_vuid: AccountingPeriodVuid,
    ) -> Result<Vec<PostedRecord>, JournalError> {
        let posted = self.store.list_for_period(accounting_period_vuid).await?;
        Ok(posted.into_iter().map(|entry| entry.record).collect())
    }
}
