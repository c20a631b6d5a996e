//! Typed VUIDs for type-safe entity references.
//!
//! Every persisted entity is addressed by a VUID (versioned unique
//! identifier, a UUID on the wire). Typed wrappers prevent accidentally
//! passing a `ProjectVuid` where a `TransactionVuid` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed VUID wrappers.
macro_rules! typed_vuid {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random VUID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates a VUID from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

typed_vuid!(ProjectVuid, "Unique identifier for a project.");
typed_vuid!(
    AccountingPeriodVuid,
    "Unique identifier for an accounting period."
);
typed_vuid!(
    TransactionVuid,
    "Unique identifier for a source transaction (AP invoice, billing, labor cost, expense)."
);
typed_vuid!(PostedRecordVuid, "Unique identifier for a posted record.");
typed_vuid!(
    LineItemVuid,
    "Unique identifier for a posted record line item."
);
typed_vuid!(CostCodeVuid, "Unique identifier for a cost code.");
typed_vuid!(CostTypeVuid, "Unique identifier for a cost type.");
