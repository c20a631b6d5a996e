//! Work-in-progress aggregation.
//!
//! Scans posted, non-reversed records for an accounting period and rolls
//! them up into per-project percent-complete and billing-vs-cost metrics.
//!
//! Two formulas here are deliberate carryovers from the legacy reporting
//! rules and must not be "corrected" without a stakeholder decision:
//! revenue is recognized strictly at billed amount (not percent-complete
//! times contract value), and percent-complete is computed from
//! period-scoped costs, not costs since project inception.

use std::collections::BTreeMap;

use chrono::Utc;
use costbook_shared::types::{AccountingPeriodVuid, ProjectVuid};
use rust_decimal::Decimal;

use super::error::WipError;
use super::types::{WipReport, WipRow};
use crate::posting::types::{PostedRecord, TransactionKind};
use crate::store::{LedgerStore, ProjectFinancials, ProjectStore};

/// Computes one project's WIP row from its active posted records.
#[must_use]
pub fn compute_project_wip(financials: &ProjectFinancials, records: &[PostedRecord]) -> WipRow {
    let costs_to_date: Decimal = records
        .iter()
        .filter(|record| record.transaction_kind.is_cost())
        .map(|record| record.total_amount)
        .sum();

    let project_billings_total: Decimal = records
        .iter()
        .filter(|record| record.transaction_kind == TransactionKind::ProjectBilling)
        .map(|record| record.total_amount)
        .sum();

    // Recognized strictly at billed amount.
    let revenue_recognized = project_billings_total;

    let percent_complete =
        costbook_shared::types::money::percent_of(costs_to_date, financials.total_contract_amount)
            .unwrap_or(Decimal::ZERO);

    let over_under_billing = project_billings_total - revenue_recognized;

    WipRow {
        project_vuid: financials.project_vuid,
        total_contract_amount: financials.total_contract_amount,
        costs_to_date,
        project_billings_total,
        revenue_recognized,
        percent_complete,
        over_under_billing,
        error: None,
    }
}

/// WIP aggregator over explicit store handles.
pub struct WipAggregator<S, P> {
    store: S,
    projects: P,
}

impl<S, P> WipAggregator<S, P>
where
    S: LedgerStore,
    P: ProjectStore,
{
    /// Creates a WIP aggregator.
    pub const fn new(store: S, projects: P) -> Self {
        Self { store, projects }
    }

    /// Computes the WIP report for an accounting period.
    ///
    /// Reversed records are excluded. Projects whose financials cannot be
    /// resolved get a zeroed row with an explicit error marker instead of
    /// aborting the report.
    ///
    /// # Errors
    ///
    /// Returns [`WipError::Storage`] only when the ledger store itself
    /// fails to list the period's records.
    pub async fn compute_wip(
        &self,
        accounting_period_vuid: AccountingPeriodVuid,
    ) -> Result<WipReport, WipError> {
        let posted = self.store.list_for_period(accounting_period_vuid).await?;

        let mut by_project: BTreeMap<ProjectVuid, Vec<PostedRecord>> = BTreeMap::new();
        for entry in posted {
            if entry.record.is_active() {
                by_project
                    .entry(entry.record.project_vuid)
                    .or_default()
                    .push(entry.record);
            }
        }

        let mut rows = Vec::with_capacity(by_project.len());
        for (project_vuid, records) in by_project {
            let row = match self.projects.fetch_project(project_vuid).await {
                Ok(Some(financials)) => compute_project_wip(&financials, &records),
                Ok(None) => WipRow::faulted(project_vuid, "project not found"),
                Err(err) => WipRow::faulted(project_vuid, err.to_string()),
            };
            rows.push(row);
        }

        Ok(WipReport {
            accounting_period_vuid,
            generated_at: Utc::now(),
            rows,
        })
    }
}
