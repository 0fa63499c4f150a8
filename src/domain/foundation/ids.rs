//! Strongly-typed identifier value objects.
//!
//! Identifiers are store-assigned integers. Wrapping them keeps a `ProjectId`
//! from ever being passed where a `FeedbackId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw store-assigned identifier.
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw identifier.
            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<i64>().map(Self).map_err(|_| {
                    ValidationError::invalid_format($field, format!("'{}' is not a valid id", s))
                })
            }
        }
    };
}

define_id!(
    /// Identifier of a registered project owner.
    UserId,
    "user_id"
);

define_id!(
    /// Identifier of a project.
    ProjectId,
    "project_id"
);

define_id!(
    /// Identifier of a single feedback item.
    FeedbackId,
    "feedback_id"
);

define_id!(
    /// Identifier of a status history (audit) entry.
    HistoryEntryId,
    "history_entry_id"
);
