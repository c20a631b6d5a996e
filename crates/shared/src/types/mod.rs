//! Common types used across the application.

pub mod money;
pub mod vuid;

pub use vuid::*;
