//! `SeaORM` Entity for the accounting_periods table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::PeriodStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "accounting_periods")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub vuid: Uuid,
    pub month: i32,
    pub year: i32,
    pub status: PeriodStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::posted_records::Entity")]
    PostedRecords,
}

impl Related<super::posted_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PostedRecords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
