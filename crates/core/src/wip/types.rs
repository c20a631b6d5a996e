//! WIP report data types.

use chrono::{DateTime, Utc};
use costbook_shared::types::{AccountingPeriodVuid, ProjectVuid};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-project work-in-progress metrics for one accounting period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WipRow {
    /// The project.
    pub project_vuid: ProjectVuid,
    /// Total contract amount, passed through from the project store.
    pub total_contract_amount: Decimal,
    /// Sum of posted cost-side amounts (AP invoices, labor, expenses).
    pub costs_to_date: Decimal,
    /// Sum of posted project billings.
    pub project_billings_total: Decimal,
    /// Revenue recognized for the period.
    pub revenue_recognized: Decimal,
    /// Period costs as a percentage of contract value, 2 fraction digits.
    pub percent_complete: Decimal,
    /// Billings minus recognized revenue. May be negative.
    pub over_under_billing: Decimal,
    /// Set when this project's metrics could not be computed; the metric
    /// fields are zeroed rather than trustworthy.
    pub error: Option<String>,
}

impl WipRow {
    /// Builds a zeroed row carrying an explicit error marker.
    #[must_use]
    pub fn faulted(project_vuid: ProjectVuid, reason: impl Into<String>) -> Self {
        Self {
            project_vuid,
            total_contract_amount: Decimal::ZERO,
            costs_to_date: Decimal::ZERO,
            project_billings_total: Decimal::ZERO,
            revenue_recognized: Decimal::ZERO,
            percent_complete: Decimal::ZERO,
            over_under_billing: Decimal::ZERO,
            error: Some(reason.into()),
        }
    }
}

/// Work-in-progress report for one accounting period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WipReport {
    /// The accounting period the report covers.
    pub accounting_period_vuid: AccountingPeriodVuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// One row per project with posted activity in the period,
    /// in project order.
    pub rows: Vec<WipRow>,
}
