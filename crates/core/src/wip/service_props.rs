//! Property-based tests for the WIP formulas.

use costbook_shared::types::money::percent_of;
use costbook_shared::types::{AccountingPeriodVuid, ProjectVuid, TransactionVuid};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::posting::types::{PostedRecord, TransactionKind};
use crate::store::ProjectFinancials;
use crate::wip::service::compute_project_wip;

/// Strategy for signed monetary amounts (2 fraction digits).
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_00i64..1_000_000_00i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for non-negative contract amounts.
fn arb_contract() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000_00i64).prop_map(|n| Decimal::new(n, 2))
}

fn arb_kind() -> impl Strategy<Value = TransactionKind> {
    prop_oneof![
        Just(TransactionKind::ApInvoice),
        Just(TransactionKind::ProjectBilling),
        Just(TransactionKind::LaborCost),
        Just(TransactionKind::ProjectExpense),
    ]
}

fn make_record(
    kind: TransactionKind,
    project_vuid: ProjectVuid,
    total_amount: Decimal,
) -> PostedRecord {
    PostedRecord {
        vuid: costbook_shared::types::PostedRecordVuid::new(),
        accounting_period_vuid: AccountingPeriodVuid::new(),
        project_vuid,
        transaction_kind: kind,
        transaction_vuid: TransactionVuid::new(),
        reference_number: None,
        description: None,
        total_amount,
        posted_by: "System".to_string(),
        posted_at: chrono::Utc::now(),
        reversed_by: None,
        reversed_at: None,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Costs and billings partition the records by kind: every amount lands
    /// in exactly one bucket, and the buckets sum the right subsets.
    #[test]
    fn prop_cost_billing_partition(
        entries in prop::collection::vec((arb_kind(), arb_amount()), 0..20),
        contract in arb_contract(),
    ) {
        let project = ProjectVuid::new();
        let records: Vec<PostedRecord> = entries
            .iter()
            .map(|(kind, amount)| make_record(*kind, project, *amount))
            .collect();
        let financials = ProjectFinancials {
            project_vuid: project,
            total_contract_amount: contract,
        };

        let row = compute_project_wip(&financials, &records);

        let expected_costs: Decimal = entries
            .iter()
            .filter(|(kind, _)| *kind != TransactionKind::ProjectBilling)
            .map(|(_, amount)| *amount)
            .sum();
        let expected_billings: Decimal = entries
            .iter()
            .filter(|(kind, _)| *kind == TransactionKind::ProjectBilling)
            .map(|(_, amount)| *amount)
            .sum();

        prop_assert_eq!(row.costs_to_date, expected_costs);
        prop_assert_eq!(row.project_billings_total, expected_billings);
    }

    /// over_under_billing is exactly billings minus recognized revenue.
    /// The formula is asserted, not a sign: the value may be negative.
    #[test]
    fn prop_over_under_is_billings_minus_revenue(
        entries in prop::collection::vec((arb_kind(), arb_amount()), 0..20),
        contract in arb_contract(),
    ) {
        let project = ProjectVuid::new();
        let records: Vec<PostedRecord> = entries
            .iter()
            .map(|(kind, amount)| make_record(*kind, project, *amount))
            .collect();
        let financials = ProjectFinancials {
            project_vuid: project,
            total_contract_amount: contract,
        };

        let row = compute_project_wip(&financials, &records);

        prop_assert_eq!(
            row.over_under_billing,
            row.project_billings_total - row.revenue_recognized
        );
        // Under the billed-amount recognition rule these coincide.
        prop_assert_eq!(row.revenue_recognized, row.project_billings_total);
    }

    /// percent_complete follows the period-local formula, and is zero for a
    /// zero-value contract.
    #[test]
    fn prop_percent_complete_formula(
        entries in prop::collection::vec((arb_kind(), arb_amount()), 0..20),
        contract in arb_contract(),
    ) {
        let project = ProjectVuid::new();
        let records: Vec<PostedRecord> = entries
            .iter()
            .map(|(kind, amount)| make_record(*kind, project, *amount))
            .collect();
        let financials = ProjectFinancials {
            project_vuid: project,
            total_contract_amount: contract,
        };

        let row = compute_project_wip(&financials, &records);

        let expected = percent_of(row.costs_to_date, contract).unwrap_or(Decimal::ZERO);
        prop_assert_eq!(row.percent_complete, expected);
        if contract == Decimal::ZERO {
            prop_assert_eq!(row.percent_complete, Decimal::ZERO);
        }
    }

    /// The contract amount is passed through untouched.
    #[test]
    fn prop_contract_amount_passthrough(contract in arb_contract()) {
        let project = ProjectVuid::new();
        let financials = ProjectFinancials {
            project_vuid: project,
            total_contract_amount: contract,
        };

        let row = compute_project_wip(&financials, &[]);
        prop_assert_eq!(row.total_contract_amount, contract);
        prop_assert!(row.error.is_none());
    }
}
