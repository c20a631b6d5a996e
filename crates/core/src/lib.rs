//! Core business logic for Costbook.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All domain types, the posting engine, and the derived
//! reports live here; persistence sits behind the port traits in [`store`].
//!
//! # Modules
//!
//! - `period` - Accounting period types and posting rules
//! - `posting` - Posting engine: transaction snapshots and reversal
//! - `store` - Storage ports and the in-memory ledger store
//! - `wip` - Work-in-progress / percent-complete aggregation
//! - `journal` - Journal entry export and preview

pub mod journal;
pub mod period;
pub mod posting;
pub mod store;
pub mod wip;
