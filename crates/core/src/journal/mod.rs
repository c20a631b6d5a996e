//! Journal entry export and preview.
//!
//! # Modules
//!
//! - `types` - Journal document and preview types
//! - `error` - Journal-specific error types
//! - `service` - Export, preview, and audit listing

pub mod error;
pub mod service;
pub mod types;

pub use error::JournalError;
pub use service::JournalExporter;
pub use types::{JournalEntry, JournalPreview, JournalPreviewEntry, JournalReport};
