//! Repository implementations for data access.
//!
//! Repositories implement the storage ports defined in the core crate,
//! hiding the `SeaORM` implementation details from the rest of the
//! application.

pub mod ledger;

pub use ledger::SeaOrmLedgerStore;
