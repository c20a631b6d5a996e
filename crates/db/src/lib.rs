//! Database layer with `SeaORM` entities and the ledger store.
//!
//! This crate provides:
//! - `SeaORM` entity definitions for the posted-record ledger
//! - The [`SeaOrmLedgerStore`] implementation of the core storage port
//! - The schema migration

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::SeaOrmLedgerStore;

use costbook_shared::config::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Establishes a pooled connection to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections);

    Database::connect(options).await
}
