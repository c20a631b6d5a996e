//! Work-in-progress reporting.
//!
//! # Modules
//!
//! - `types` - WIP report rows and report envelope
//! - `error` - WIP-specific error types
//! - `service` - Per-project formulas and the period aggregator

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::WipError;
pub use service::{compute_project_wip, WipAggregator};
pub use types::{WipReport, WipRow};
