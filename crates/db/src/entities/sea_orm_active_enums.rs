//! Active enum definitions mapped to Postgres enum types.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Posting status of an accounting period.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "period_status")]
pub enum PeriodStatus {
    /// Period accepts new postings.
    #[sea_orm(string_value = "open")]
    Open,
    /// Period is closed to posting.
    #[sea_orm(string_value = "closed")]
    Closed,
}

/// Kind of source transaction a posted record was created from.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "transaction_kind")]
pub enum TransactionKind {
    /// Accounts-payable invoice.
    #[sea_orm(string_value = "ap_invoice")]
    ApInvoice,
    /// Owner billing.
    #[sea_orm(string_value = "project_billing")]
    ProjectBilling,
    /// Labor cost record.
    #[sea_orm(string_value = "labor_cost")]
    LaborCost,
    /// Project expense.
    #[sea_orm(string_value = "project_expense")]
    ProjectExpense,
}
