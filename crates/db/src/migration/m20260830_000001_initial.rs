//! Initial schema for the posting ledger.
//!
//! Creates accounting periods, posted records, and posted record line
//! items, with the partial unique index that enforces one active posting
//! per source transaction.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(INITIAL_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            "DROP TABLE IF EXISTS posted_record_line_items CASCADE;
             DROP TABLE IF EXISTS posted_records CASCADE;
             DROP TABLE IF EXISTS accounting_periods CASCADE;
             DROP TYPE IF EXISTS transaction_kind;
             DROP TYPE IF EXISTS period_status;",
        )
        .await?;
        Ok(())
    }
}

const INITIAL_SQL: &str = r"
CREATE TYPE period_status AS ENUM ('open', 'closed');
CREATE TYPE transaction_kind AS ENUM ('ap_invoice', 'project_billing', 'labor_cost', 'project_expense');

-- Accounting periods (month/year buckets that postings are scoped to)
CREATE TABLE accounting_periods (
    vuid UUID PRIMARY KEY,
    month INTEGER NOT NULL CHECK (month BETWEEN 1 AND 12),
    year INTEGER NOT NULL,
    status period_status NOT NULL DEFAULT 'open',
    CONSTRAINT uq_accounting_periods_month_year UNIQUE (month, year)
);

-- Immutable posting snapshots
CREATE TABLE posted_records (
    vuid UUID PRIMARY KEY,
    accounting_period_vuid UUID NOT NULL REFERENCES accounting_periods(vuid),
    project_vuid UUID NOT NULL,
    transaction_kind transaction_kind NOT NULL,
    transaction_vuid UUID NOT NULL,
    reference_number VARCHAR(100),
    description TEXT,
    total_amount NUMERIC(15, 2) NOT NULL,
    posted_by VARCHAR(255) NOT NULL,
    posted_at TIMESTAMPTZ NOT NULL,
    reversed_by VARCHAR(255),
    reversed_at TIMESTAMPTZ,
    CONSTRAINT chk_reversal_pair CHECK ((reversed_by IS NULL) = (reversed_at IS NULL))
);

CREATE TABLE posted_record_line_items (
    vuid UUID PRIMARY KEY,
    posted_record_vuid UUID NOT NULL REFERENCES posted_records(vuid) ON DELETE CASCADE,
    cost_code_vuid UUID NOT NULL,
    cost_type_vuid UUID NOT NULL,
    description TEXT,
    quantity NUMERIC(15, 4) NOT NULL,
    unit_cost NUMERIC(15, 2) NOT NULL,
    total_cost NUMERIC(15, 2) NOT NULL
);

-- Index for period-scoped reporting (WIP, journal export)
CREATE INDEX idx_posted_records_period ON posted_records(accounting_period_vuid);

-- Index for per-project cost aggregation
CREATE INDEX idx_posted_records_project ON posted_records(project_vuid);

-- At most one ACTIVE posting per source transaction; reversed rows are
-- excluded so a transaction can be re-posted after reversal
CREATE UNIQUE INDEX uq_posted_records_active_source
    ON posted_records(transaction_kind, transaction_vuid)
    WHERE reversed_at IS NULL;

-- Index for line lookup by parent record
CREATE INDEX idx_line_items_record ON posted_record_line_items(posted_record_vuid);
";
