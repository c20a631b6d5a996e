//! Property-based tests for the posting-time snapshot.
//!
//! The snapshot must copy a source transaction verbatim, for any shape of
//! source, and must never start out reversed.

use chrono::Utc;
use costbook_shared::types::{
    AccountingPeriodVuid, CostCodeVuid, CostTypeVuid, ProjectVuid, TransactionVuid,
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::posting::types::{
    PostedRecordWithLines, SourceTransaction, SourceTransactionLine, TransactionKind,
};

/// Strategy for generating monetary amounts (signed, 2 fraction digits).
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_00i64..1_000_000_00i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for generating transaction kinds.
fn arb_kind() -> impl Strategy<Value = TransactionKind> {
    prop_oneof![
        Just(TransactionKind::ApInvoice),
        Just(TransactionKind::ProjectBilling),
        Just(TransactionKind::LaborCost),
        Just(TransactionKind::ProjectExpense),
    ]
}

/// Strategy for generating optional short strings.
fn arb_text() -> impl Strategy<Value = Option<String>> {
    prop_oneof![Just(None), "[a-zA-Z0-9 -]{1,40}".prop_map(Some)]
}

fn arb_line() -> impl Strategy<Value = SourceTransactionLine> {
    (
        any::<u128>(),
        any::<u128>(),
        arb_text(),
        arb_amount(),
        arb_amount(),
        arb_amount(),
    )
        .prop_map(
            |(code, kind, description, quantity, unit_cost, total_cost)| SourceTransactionLine {
                cost_code_vuid: CostCodeVuid::from_uuid(Uuid::from_u128(code)),
                cost_type_vuid: CostTypeVuid::from_uuid(Uuid::from_u128(kind)),
                description,
                quantity,
                unit_cost,
                // Deliberately independent of quantity * unit_cost: the
                // source system owns that relationship.
                total_cost,
            },
        )
}

fn arb_source() -> impl Strategy<Value = SourceTransaction> {
    (
        arb_kind(),
        arb_text(),
        arb_text(),
        arb_amount(),
        prop::collection::vec(arb_line(), 0..8),
    )
        .prop_map(
            |(kind, reference_number, description, total_amount, lines)| SourceTransaction {
                kind,
                vuid: TransactionVuid::new(),
                project_vuid: ProjectVuid::new(),
                accounting_period_vuid: AccountingPeriodVuid::new(),
                reference_number,
                description,
                total_amount,
                lines,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every header field of the snapshot matches the source.
    #[test]
    fn prop_snapshot_header_matches_source(source in arb_source()) {
        let posted = PostedRecordWithLines::snapshot(&source, "System", Utc::now());

        prop_assert_eq!(posted.record.transaction_kind, source.kind);
        prop_assert_eq!(posted.record.transaction_vuid, source.vuid);
        prop_assert_eq!(posted.record.project_vuid, source.project_vuid);
        prop_assert_eq!(
            posted.record.accounting_period_vuid,
            source.accounting_period_vuid
        );
        prop_assert_eq!(&posted.record.reference_number, &source.reference_number);
        prop_assert_eq!(&posted.record.description, &source.description);
        prop_assert_eq!(posted.record.total_amount, source.total_amount);
    }

    /// Line items are copied verbatim, one per source line, in order.
    #[test]
    fn prop_snapshot_lines_verbatim(source in arb_source()) {
        let posted = PostedRecordWithLines::snapshot(&source, "System", Utc::now());

        prop_assert_eq!(posted.line_items.len(), source.lines.len());
        for (line, source_line) in posted.line_items.iter().zip(&source.lines) {
            prop_assert_eq!(line.posted_record_vuid, posted.record.vuid);
            prop_assert_eq!(line.cost_code_vuid, source_line.cost_code_vuid);
            prop_assert_eq!(line.cost_type_vuid, source_line.cost_type_vuid);
            prop_assert_eq!(&line.description, &source_line.description);
            prop_assert_eq!(line.quantity, source_line.quantity);
            prop_assert_eq!(line.unit_cost, source_line.unit_cost);
            prop_assert_eq!(line.total_cost, source_line.total_cost);
        }
    }

    /// A fresh snapshot is always active with both reversal fields null.
    #[test]
    fn prop_snapshot_starts_active(source in arb_source(), actor in "[a-z]{1,12}") {
        let posted = PostedRecordWithLines::snapshot(&source, &actor, Utc::now());

        prop_assert!(posted.record.is_active());
        prop_assert!(posted.record.reversed_by.is_none());
        prop_assert!(posted.record.reversed_at.is_none());
        prop_assert_eq!(posted.record.posted_by, actor);
    }
}
