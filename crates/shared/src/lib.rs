//! Shared types, rounding rules, and configuration for Costbook.
//!
//! This crate provides common building blocks used across all other crates:
//! - Typed VUIDs for type-safe entity references
//! - Monetary rounding rules (banker's rounding, 2 fraction digits)
//! - Configuration management
//! - Tracing initialization for binaries

pub mod config;
pub mod telemetry;
pub mod types;

pub use config::AppConfig;
