//! Accounting period types.
//!
//! An accounting period is a month/year bucket that scopes which
//! transactions may be posted and reported together. Period lifecycle
//! (open/close) is administered by an external workflow; the posting core
//! only reads the status.

use costbook_shared::types::AccountingPeriodVuid;
use serde::{Deserialize, Serialize};

/// Status of an accounting period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodStatus {
    /// Period is open for posting.
    Open,
    /// Period is closed, no new postings allowed.
    Closed,
}

/// A monthly accounting period.
///
/// At most one period exists per (month, year); the storage layer enforces
/// this with a unique index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountingPeriod {
    /// Unique identifier.
    pub vuid: AccountingPeriodVuid,
    /// Calendar month (1-12).
    pub month: u32,
    /// Calendar year.
    pub year: i32,
    /// Current status.
    pub status: PeriodStatus,
}

impl AccountingPeriod {
    /// Returns true if transactions can be posted to this period.
    #[must_use]
    pub fn allows_posting(&self) -> bool {
        self.status == PeriodStatus::Open
    }

    /// Returns a human-readable period name (e.g. "March 2026").
    #[must_use]
    pub fn display_name(&self) -> String {
        let month = match self.month {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            12 => "December",
            _ => "Unknown",
        };
        format!("{month} {}", self.year)
    }
}
