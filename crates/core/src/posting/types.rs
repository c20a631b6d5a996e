//! Posting domain types.
//!
//! A posted record is an immutable snapshot of a source transaction taken
//! at posting time. Later edits to the source never flow into the ledger;
//! the only mutation a posted record ever sees is the single null-to-set
//! transition of its reversal fields.

use chrono::{DateTime, Utc};
use costbook_shared::types::{
    AccountingPeriodVuid, CostCodeVuid, CostTypeVuid, LineItemVuid, PostedRecordVuid, ProjectVuid,
    TransactionVuid,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::PostingError;

/// Actor recorded when the caller does not identify themselves.
pub const DEFAULT_POSTED_BY: &str = "System";

/// The four source transaction kinds the posting engine accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Accounts-payable invoice from a vendor.
    ApInvoice,
    /// Billing issued against the project's contract.
    ProjectBilling,
    /// Internal labor cost.
    LaborCost,
    /// Direct project expense.
    ProjectExpense,
}

impl TransactionKind {
    /// Returns the snake_case wire name of this kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ApInvoice => "ap_invoice",
            Self::ProjectBilling => "project_billing",
            Self::LaborCost => "labor_cost",
            Self::ProjectExpense => "project_expense",
        }
    }

    /// Returns true if this kind contributes to costs-to-date.
    ///
    /// Billings are the revenue side; everything else is a cost.
    #[must_use]
    pub fn is_cost(&self) -> bool {
        !matches!(self, Self::ProjectBilling)
    }

    /// All kinds, in a stable order.
    #[must_use]
    pub fn all() -> [Self; 4] {
        [
            Self::ApInvoice,
            Self::ProjectBilling,
            Self::LaborCost,
            Self::ProjectExpense,
        ]
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = PostingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ap_invoice" => Ok(Self::ApInvoice),
            "project_billing" => Ok(Self::ProjectBilling),
            "labor_cost" => Ok(Self::LaborCost),
            "project_expense" => Ok(Self::ProjectExpense),
            other => Err(PostingError::InvalidTransactionType(other.to_string())),
        }
    }
}

/// A cost-coded line of a source transaction.
///
/// `total_cost` is stored independently of `quantity * unit_cost`; the
/// source system owns that relationship and the ledger copies it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceTransactionLine {
    /// Cost code classifying what work the line covers.
    pub cost_code_vuid: CostCodeVuid,
    /// Cost type classifying what kind of cost the line is.
    pub cost_type_vuid: CostTypeVuid,
    /// Line description.
    pub description: Option<String>,
    /// Quantity.
    pub quantity: Decimal,
    /// Unit cost.
    pub unit_cost: Decimal,
    /// Total cost as stored by the source system.
    pub total_cost: Decimal,
}

/// Read-only view of a source transaction, handed over by the transaction
/// source collaborator with the reference number already resolved per kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceTransaction {
    /// Which transaction variant this is.
    pub kind: TransactionKind,
    /// Identity of the source record.
    pub vuid: TransactionVuid,
    /// Owning project.
    pub project_vuid: ProjectVuid,
    /// Owning accounting period.
    pub accounting_period_vuid: AccountingPeriodVuid,
    /// Human reference number (invoice/billing/labor-cost/expense number).
    pub reference_number: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Signed total amount, 2 fraction digits.
    pub total_amount: Decimal,
    /// Ordered cost-coded lines.
    pub lines: Vec<SourceTransactionLine>,
}

/// A snapshot of a source line, owned by a posted record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostedRecordLineItem {
    /// Unique identifier.
    pub vuid: LineItemVuid,
    /// Owning posted record.
    pub posted_record_vuid: PostedRecordVuid,
    /// Cost code reference.
    pub cost_code_vuid: CostCodeVuid,
    /// Cost type reference.
    pub cost_type_vuid: CostTypeVuid,
    /// Line description at posting time.
    pub description: Option<String>,
    /// Quantity at posting time.
    pub quantity: Decimal,
    /// Unit cost at posting time.
    pub unit_cost: Decimal,
    /// Total cost at posting time.
    pub total_cost: Decimal,
}

/// An immutable ledger entry created by the posting engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostedRecord {
    /// Unique identifier.
    pub vuid: PostedRecordVuid,
    /// Accounting period the record is posted into.
    pub accounting_period_vuid: AccountingPeriodVuid,
    /// Project the record belongs to.
    pub project_vuid: ProjectVuid,
    /// Which transaction variant was posted.
    pub transaction_kind: TransactionKind,
    /// Weak back-reference to the source transaction, for audit lookup only.
    pub transaction_vuid: TransactionVuid,
    /// Reference number snapshot taken at posting time.
    pub reference_number: Option<String>,
    /// Description snapshot taken at posting time.
    pub description: Option<String>,
    /// Total amount snapshot taken at posting time.
    pub total_amount: Decimal,
    /// Actor who posted the record.
    pub posted_by: String,
    /// When the record was posted.
    pub posted_at: DateTime<Utc>,
    /// Actor who reversed the record, if any.
    pub reversed_by: Option<String>,
    /// When the record was reversed, if ever.
    pub reversed_at: Option<DateTime<Utc>>,
}

impl PostedRecord {
    /// Returns true if the record has not been reversed.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.reversed_at.is_none()
    }
}

/// A posted record together with its owned line items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostedRecordWithLines {
    /// The record header.
    pub record: PostedRecord,
    /// Line item snapshots, in source order.
    pub line_items: Vec<PostedRecordLineItem>,
}

impl PostedRecordWithLines {
    /// Builds the posting-time snapshot of a source transaction.
    ///
    /// Copies the period/project references, reference number, description
    /// and total amount onto a fresh record, and every source line verbatim
    /// onto an owned line item. The source is only read; nothing ties the
    /// snapshot back to it except the audit `transaction_vuid`.
    #[must_use]
    pub fn snapshot(
        source: &SourceTransaction,
        posted_by: &str,
        posted_at: DateTime<Utc>,
    ) -> Self {
        let vuid = PostedRecordVuid::new();

        let line_items = source
            .lines
            .iter()
            .map(|line| PostedRecordLineItem {
                vuid: LineItemVuid::new(),
                posted_record_vuid: vuid,
                cost_code_vuid: line.cost_code_vuid,
                cost_type_vuid: line.cost_type_vuid,
                description: line.description.clone(),
                quantity: line.quantity,
                unit_cost: line.unit_cost,
                total_cost: line.total_cost,
            })
            .collect();

        Self {
            record: PostedRecord {
                vuid,
                accounting_period_vuid: source.accounting_period_vuid,
                project_vuid: source.project_vuid,
                transaction_kind: source.kind,
                transaction_vuid: source.vuid,
                reference_number: source.reference_number.clone(),
                description: source.description.clone(),
                total_amount: source.total_amount,
                posted_by: posted_by.to_string(),
                posted_at,
                reversed_by: None,
                reversed_at: None,
            },
            line_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    fn two_line_invoice() -> SourceTransaction {
        SourceTransaction {
            kind: TransactionKind::ApInvoice,
            vuid: TransactionVuid::new(),
            project_vuid: ProjectVuid::new(),
            accounting_period_vuid: AccountingPeriodVuid::new(),
            reference_number: Some("INV-1042".to_string()),
            description: Some("Concrete pour, level 2".to_string()),
            total_amount: dec!(400.00),
            lines: vec![
                SourceTransactionLine {
                    cost_code_vuid: CostCodeVuid::new(),
                    cost_type_vuid: CostTypeVuid::new(),
                    description: Some("Formwork labor".to_string()),
                    quantity: dec!(2),
                    unit_cost: dec!(50.00),
                    total_cost: dec!(100.00),
                },
                SourceTransactionLine {
                    cost_code_vuid: CostCodeVuid::new(),
                    cost_type_vuid: CostTypeVuid::new(),
                    description: Some("Ready-mix".to_string()),
                    quantity: dec!(1),
                    unit_cost: dec!(300.00),
                    total_cost: dec!(300.00),
                },
            ],
        }
    }

    #[test]
    fn test_kind_parse_all() {
        for kind in TransactionKind::all() {
            assert_eq!(TransactionKind::from_str(kind.as_str()).unwrap(), kind);
        }
    }

    #[test]
    fn test_kind_parse_unknown() {
        let err = TransactionKind::from_str("unknown_type").unwrap_err();
        assert!(matches!(err, PostingError::InvalidTransactionType(s) if s == "unknown_type"));
    }

    #[test]
    fn test_kind_cost_partition() {
        assert!(TransactionKind::ApInvoice.is_cost());
        assert!(TransactionKind::LaborCost.is_cost());
        assert!(TransactionKind::ProjectExpense.is_cost());
        assert!(!TransactionKind::ProjectBilling.is_cost());
    }

    #[test]
    fn test_snapshot_copies_header_and_lines() {
        let source = two_line_invoice();
        let posted = PostedRecordWithLines::snapshot(&source, "jdoe", Utc::now());

        assert_eq!(posted.record.transaction_kind, TransactionKind::ApInvoice);
        assert_eq!(posted.record.transaction_vuid, source.vuid);
        assert_eq!(posted.record.project_vuid, source.project_vuid);
        assert_eq!(
            posted.record.accounting_period_vuid,
            source.accounting_period_vuid
        );
        assert_eq!(posted.record.reference_number, source.reference_number);
        assert_eq!(posted.record.total_amount, dec!(400.00));
        assert_eq!(posted.record.posted_by, "jdoe");
        assert!(posted.record.is_active());

        assert_eq!(posted.line_items.len(), 2);
        for (line, source_line) in posted.line_items.iter().zip(&source.lines) {
            assert_eq!(line.posted_record_vuid, posted.record.vuid);
            assert_eq!(line.cost_code_vuid, source_line.cost_code_vuid);
            assert_eq!(line.cost_type_vuid, source_line.cost_type_vuid);
            assert_eq!(line.description, source_line.description);
            assert_eq!(line.quantity, source_line.quantity);
            assert_eq!(line.unit_cost, source_line.unit_cost);
            assert_eq!(line.total_cost, source_line.total_cost);
        }
    }

    #[test]
    fn test_snapshot_is_isolated_from_source_edits() {
        let mut source = two_line_invoice();
        let posted = PostedRecordWithLines::snapshot(&source, "jdoe", Utc::now());

        // Edit the source after posting; the snapshot must not move.
        source.total_amount = dec!(999.99);
        source.reference_number = Some("INV-9999".to_string());
        source.lines[0].quantity = dec!(50);
        source.lines.pop();

        assert_eq!(posted.record.total_amount, dec!(400.00));
        assert_eq!(posted.record.reference_number.as_deref(), Some("INV-1042"));
        assert_eq!(posted.line_items.len(), 2);
        assert_eq!(posted.line_items[0].quantity, dec!(2));
    }

    #[test]
    fn test_snapshot_preserves_line_order() {
        let source = two_line_invoice();
        let posted = PostedRecordWithLines::snapshot(&source, "jdoe", Utc::now());
        assert_eq!(
            posted.line_items[0].description.as_deref(),
            Some("Formwork labor")
        );
        assert_eq!(posted.line_items[1].description.as_deref(), Some("Ready-mix"));
    }
}
