//! `SeaORM` entity definitions for the posted-record ledger.

pub mod accounting_periods;
pub mod posted_record_line_items;
pub mod posted_records;
pub mod sea_orm_active_enums;
