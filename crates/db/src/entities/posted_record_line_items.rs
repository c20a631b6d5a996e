//! `SeaORM` Entity for the posted_record_line_items table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "posted_record_line_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub vuid: Uuid,
    pub posted_record_vuid: Uuid,
    pub cost_code_vuid: Uuid,
    pub cost_type_vuid: Uuid,
    pub description: Option<String>,
    pub quantity: Decimal,
    pub unit_cost: Decimal,
    pub total_cost: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::posted_records::Entity",
        from = "Column::PostedRecordVuid",
        to = "super::posted_records::Column::Vuid"
    )]
    PostedRecords,
}

impl Related<super::posted_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PostedRecords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
