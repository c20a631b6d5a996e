//! `SeaORM` Entity for the posted_records table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::TransactionKind;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "posted_records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub vuid: Uuid,
    pub accounting_period_vuid: Uuid,
    pub project_vuid: Uuid,
    pub transaction_kind: TransactionKind,
    pub transaction_vuid: Uuid,
    pub reference_number: Option<String>,
    pub description: Option<String>,
    pub total_amount: Decimal,
    pub posted_by: String,
    pub posted_at: DateTimeWithTimeZone,
    pub reversed_by: Option<String>,
    pub reversed_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::accounting_periods::Entity",
        from = "Column::AccountingPeriodVuid",
        to = "super::accounting_periods::Column::Vuid"
    )]
    AccountingPeriods,
    #[sea_orm(has_many = "super::posted_record_line_items::Entity")]
    PostedRecordLineItems,
}

impl Related<super::accounting_periods::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccountingPeriods.def()
    }
}

impl Related<super::posted_record_line_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PostedRecordLineItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
