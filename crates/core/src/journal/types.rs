//! Journal export data types.

use chrono::{DateTime, Utc};
use costbook_shared::types::{AccountingPeriodVuid, PostedRecordVuid};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::posting::types::{PostedRecordLineItem, TransactionKind};

/// One journal entry rendered from a posted record, with full line detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// The posted record this entry renders.
    pub posted_record_vuid: PostedRecordVuid,
    /// Which transaction variant was posted.
    pub transaction_kind: TransactionKind,
    /// Reference number snapshot.
    pub reference_number: Option<String>,
    /// Description snapshot.
    pub description: Option<String>,
    /// Total amount snapshot.
    pub total_amount: Decimal,
    /// Actor who posted the record.
    pub posted_by: String,
    /// When the record was posted.
    pub posted_at: DateTime<Utc>,
    /// Full line-item detail, in source order.
    pub line_items: Vec<PostedRecordLineItem>,
}

/// Journal-entry document for one accounting period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalReport {
    /// The accounting period the document covers.
    pub accounting_period_vuid: AccountingPeriodVuid,
    /// When the document was generated.
    pub generated_at: DateTime<Utc>,
    /// Non-reversed entries, in posting order.
    pub entries: Vec<JournalEntry>,
}

/// One journal entry with line items collapsed to a count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalPreviewEntry {
    /// The posted record this entry renders.
    pub posted_record_vuid: PostedRecordVuid,
    /// Which transaction variant was posted.
    pub transaction_kind: TransactionKind,
    /// Reference number snapshot.
    pub reference_number: Option<String>,
    /// Description snapshot.
    pub description: Option<String>,
    /// Total amount snapshot.
    pub total_amount: Decimal,
    /// Actor who posted the record.
    pub posted_by: String,
    /// When the record was posted.
    pub posted_at: DateTime<Utc>,
    /// Number of line items on the underlying record.
    pub line_item_count: usize,
}

/// Lightweight journal listing for UI display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalPreview {
    /// The accounting period the listing covers.
    pub accounting_period_vuid: AccountingPeriodVuid,
    /// When the listing was generated.
    pub generated_at: DateTime<Utc>,
    /// Non-reversed entries, in posting order.
    pub entries: Vec<JournalPreviewEntry>,
}
