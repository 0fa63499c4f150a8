//! FeedbackStatus state machine.
//!
//! ```text
//! NEW ──► ACCEPTED ──► RESOLVED
//!  │
//!  └────► REJECTED
//! ```
//!
//! RESOLVED and REJECTED are terminal.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{StateMachine, ValidationError};

/// Triage status of a feedback item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeedbackStatus {
    #[default]
    New,
    Accepted,
    Resolved,
    Rejected,
}

impl FeedbackStatus {
    /// Every variant, in declaration order.
    pub const ALL: [FeedbackStatus; 4] = [
        FeedbackStatus::New,
        FeedbackStatus::Accepted,
        FeedbackStatus::Resolved,
        FeedbackStatus::Rejected,
    ];

    /// Wire and storage value.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackStatus::New => "NEW",
            FeedbackStatus::Accepted => "ACCEPTED",
            FeedbackStatus::Resolved => "RESOLVED",
            FeedbackStatus::Rejected => "REJECTED",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            FeedbackStatus::New => "New",
            FeedbackStatus::Accepted => "Accepted",
            FeedbackStatus::Resolved => "Resolved",
            FeedbackStatus::Rejected => "Rejected",
        }
    }

    /// Entering this status stamps `resolved_at`.
    pub fn closes_feedback(&self) -> bool {
        matches!(self, FeedbackStatus::Resolved | FeedbackStatus::Rejected)
    }

    /// Entering this status requires a non-empty note.
    pub fn requires_note(&self) -> bool {
        matches!(self, FeedbackStatus::Resolved)
    }
}

impl StateMachine for FeedbackStatus {
    fn valid_transitions(&self) -> &'static [Self] {
        use FeedbackStatus::*;
        match self {
            New => &[Accepted, Rejected],
            Accepted => &[Resolved],
            Resolved => &[],
            Rejected => &[],
        }
    }
}

impl fmt::Display for FeedbackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FeedbackStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::invalid_format("status", "Invalid status value"))
    }
}
