//! `SeaORM`-backed ledger store.
//!
//! Implements the core storage port over Postgres. The active-source
//! uniqueness is also enforced here by a partial unique index, so a
//! concurrent duplicate insert surfaces as a unique-constraint violation
//! rather than a second active row.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set, SqlErr, TransactionTrait,
};

use costbook_core::period::{AccountingPeriod, PeriodStatus};
use costbook_core::posting::types::{
    PostedRecord, PostedRecordLineItem, PostedRecordWithLines, TransactionKind,
};
use costbook_core::store::{LedgerStore, StoreError};
use costbook_shared::types::{
    AccountingPeriodVuid, CostCodeVuid, CostTypeVuid, LineItemVuid, PostedRecordVuid, ProjectVuid,
    TransactionVuid,
};

use crate::entities::{accounting_periods, posted_record_line_items, posted_records};
use crate::entities::sea_orm_active_enums;

/// Ledger store backed by a `SeaORM` connection pool.
#[derive(Debug, Clone)]
pub struct SeaOrmLedgerStore {
    db: DatabaseConnection,
}

impl SeaOrmLedgerStore {
    /// Creates a new ledger store.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn map_db_err(err: DbErr) -> StoreError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message)) => StoreError::DuplicateKey(message),
        _ => StoreError::Backend(err.to_string()),
    }
}

fn kind_to_db(kind: TransactionKind) -> sea_orm_active_enums::TransactionKind {
    match kind {
        TransactionKind::ApInvoice => sea_orm_active_enums::TransactionKind::ApInvoice,
        TransactionKind::ProjectBilling => sea_orm_active_enums::TransactionKind::ProjectBilling,
        TransactionKind::LaborCost => sea_orm_active_enums::TransactionKind::LaborCost,
        TransactionKind::ProjectExpense => sea_orm_active_enums::TransactionKind::ProjectExpense,
    }
}

fn kind_from_db(kind: sea_orm_active_enums::TransactionKind) -> TransactionKind {
    match kind {
        sea_orm_active_enums::TransactionKind::ApInvoice => TransactionKind::ApInvoice,
        sea_orm_active_enums::TransactionKind::ProjectBilling => TransactionKind::ProjectBilling,
        sea_orm_active_enums::TransactionKind::LaborCost => TransactionKind::LaborCost,
        sea_orm_active_enums::TransactionKind::ProjectExpense => TransactionKind::ProjectExpense,
    }
}

fn record_to_active_model(record: &PostedRecord) -> posted_records::ActiveModel {
    posted_records::ActiveModel {
        vuid: Set(record.vuid.into_inner()),
        accounting_period_vuid: Set(record.accounting_period_vuid.into_inner()),
        project_vuid: Set(record.project_vuid.into_inner()),
        transaction_kind: Set(kind_to_db(record.transaction_kind)),
        transaction_vuid: Set(record.transaction_vuid.into_inner()),
        reference_number: Set(record.reference_number.clone()),
        description: Set(record.description.clone()),
        total_amount: Set(record.total_amount),
        posted_by: Set(record.posted_by.clone()),
        posted_at: Set(record.posted_at.fixed_offset()),
        reversed_by: Set(record.reversed_by.clone()),
        reversed_at: Set(record.reversed_at.map(|at| at.fixed_offset())),
    }
}

fn line_to_active_model(line: &PostedRecordLineItem) -> posted_record_line_items::ActiveModel {
    posted_record_line_items::ActiveModel {
        vuid: Set(line.vuid.into_inner()),
        posted_record_vuid: Set(line.posted_record_vuid.into_inner()),
        cost_code_vuid: Set(line.cost_code_vuid.into_inner()),
        cost_type_vuid: Set(line.cost_type_vuid.into_inner()),
        description: Set(line.description.clone()),
        quantity: Set(line.quantity),
        unit_cost: Set(line.unit_cost),
        total_cost: Set(line.total_cost),
    }
}

fn line_from_model(model: posted_record_line_items::Model) -> PostedRecordLineItem {
    PostedRecordLineItem {
        vuid: LineItemVuid::from_uuid(model.vuid),
        posted_record_vuid: PostedRecordVuid::from_uuid(model.posted_record_vuid),
        cost_code_vuid: CostCodeVuid::from_uuid(model.cost_code_vuid),
        cost_type_vuid: CostTypeVuid::from_uuid(model.cost_type_vuid),
        description: model.description,
        quantity: model.quantity,
        unit_cost: model.unit_cost,
        total_cost: model.total_cost,
    }
}

fn record_from_model(
    model: posted_records::Model,
    lines: Vec<posted_record_line_items::Model>,
) -> PostedRecordWithLines {
    PostedRecordWithLines {
        record: PostedRecord {
            vuid: PostedRecordVuid::from_uuid(model.vuid),
            accounting_period_vuid: AccountingPeriodVuid::from_uuid(model.accounting_period_vuid),
            project_vuid: ProjectVuid::from_uuid(model.project_vuid),
            transaction_kind: kind_from_db(model.transaction_kind),
            transaction_vuid: TransactionVuid::from_uuid(model.transaction_vuid),
            reference_number: model.reference_number,
            description: model.description,
            total_amount: model.total_amount,
            posted_by: model.posted_by,
            posted_at: model.posted_at.to_utc(),
            reversed_by: model.reversed_by,
            reversed_at: model.reversed_at.map(|at| at.to_utc()),
        },
        line_items: lines.into_iter().map(line_from_model).collect(),
    }
}

fn period_from_model(model: accounting_periods::Model) -> Result<AccountingPeriod, StoreError> {
    // The schema CHECK keeps month in 1..=12; a negative value here is
    // data corruption and must not be masked as month 0.
    let month = u32::try_from(model.month).map_err(|_| {
        StoreError::Backend(format!(
            "accounting period {} has invalid month {}",
            model.vuid, model.month
        ))
    })?;

    Ok(AccountingPeriod {
        vuid: AccountingPeriodVuid::from_uuid(model.vuid),
        month,
        year: model.year,
        status: match model.status {
            sea_orm_active_enums::PeriodStatus::Open => PeriodStatus::Open,
            sea_orm_active_enums::PeriodStatus::Closed => PeriodStatus::Closed,
        },
    })
}

#[async_trait]
impl LedgerStore for SeaOrmLedgerStore {
    async fn insert_posted(&self, posted: PostedRecordWithLines) -> Result<(), StoreError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        record_to_active_model(&posted.record)
            .insert(&txn)
            .await
            .map_err(map_db_err)?;
        for line in &posted.line_items {
            line_to_active_model(line)
                .insert(&txn)
                .await
                .map_err(map_db_err)?;
        }

        txn.commit().await.map_err(map_db_err)?;

        tracing::debug!(
            posted_record_vuid = %posted.record.vuid,
            transaction_kind = %posted.record.transaction_kind,
            line_items = posted.line_items.len(),
            "posted record persisted"
        );
        Ok(())
    }

    async fn find_posted(
        &self,
        vuid: PostedRecordVuid,
    ) -> Result<Option<PostedRecordWithLines>, StoreError> {
        let Some(model) = posted_records::Entity::find_by_id(vuid.into_inner())
            .one(&self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let lines = posted_record_line_items::Entity::find()
            .filter(posted_record_line_items::Column::PostedRecordVuid.eq(vuid.into_inner()))
            .order_by_asc(posted_record_line_items::Column::Vuid)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(Some(record_from_model(model, lines)))
    }

    async fn find_active_for_source(
        &self,
        kind: TransactionKind,
        transaction_vuid: TransactionVuid,
    ) -> Result<Option<PostedRecordVuid>, StoreError> {
        let found = posted_records::Entity::find()
            .filter(posted_records::Column::TransactionKind.eq(kind_to_db(kind)))
            .filter(posted_records::Column::TransactionVuid.eq(transaction_vuid.into_inner()))
            .filter(posted_records::Column::ReversedAt.is_null())
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.map(|model| PostedRecordVuid::from_uuid(model.vuid)))
    }

    async fn mark_reversed(
        &self,
        vuid: PostedRecordVuid,
        reversed_by: &str,
        reversed_at: DateTime<Utc>,
    ) -> Result<u64, StoreError> {
        // The is_null filter makes the null-to-set transition atomic: a
        // second reversal matches zero rows instead of overwriting.
        let result = posted_records::Entity::update_many()
            .col_expr(
                posted_records::Column::ReversedBy,
                Expr::value(reversed_by),
            )
            .col_expr(
                posted_records::Column::ReversedAt,
                Expr::value(reversed_at.fixed_offset()),
            )
            .filter(posted_records::Column::Vuid.eq(vuid.into_inner()))
            .filter(posted_records::Column::ReversedAt.is_null())
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected > 0 {
            tracing::info!(posted_record_vuid = %vuid, reversed_by, "posted record reversed");
        }
        Ok(result.rows_affected)
    }

    async fn list_for_period(
        &self,
        accounting_period_vuid: AccountingPeriodVuid,
    ) -> Result<Vec<PostedRecordWithLines>, StoreError> {
        // Record vuids are UUIDv7, so ordering by vuid is posting order.
        let rows = posted_records::Entity::find()
            .filter(
                posted_records::Column::AccountingPeriodVuid
                    .eq(accounting_period_vuid.into_inner()),
            )
            .find_with_related(posted_record_line_items::Entity)
            .order_by_asc(posted_records::Column::Vuid)
            .order_by_asc(posted_record_line_items::Column::Vuid)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|(model, lines)| record_from_model(model, lines))
            .collect())
    }

    async fn fetch_period(
        &self,
        vuid: AccountingPeriodVuid,
    ) -> Result<Option<AccountingPeriod>, StoreError> {
        let model = accounting_periods::Entity::find_by_id(vuid.into_inner())
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        model.map(period_from_model).transpose()
    }
}

#[cfg(test)]
#[path = "ledger_tests.rs"]
mod tests;
