//! FeedbackType enum - the closed set of feedback categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Category chosen by the submitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackType {
    Bug,
    Feature,
    Confusion,
    Suggestion,
}

impl FeedbackType {
    /// Every variant, in declaration order.
    pub const ALL: [FeedbackType; 4] = [
        FeedbackType::Bug,
        FeedbackType::Feature,
        FeedbackType::Confusion,
        FeedbackType::Suggestion,
    ];

    /// Wire and storage value.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackType::Bug => "bug",
            FeedbackType::Feature => "feature",
            FeedbackType::Confusion => "confusion",
            FeedbackType::Suggestion => "suggestion",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            FeedbackType::Bug => "Bug",
            FeedbackType::Feature => "Feature",
            FeedbackType::Confusion => "Confusion",
            FeedbackType::Suggestion => "Suggestion",
        }
    }
}

impl fmt::Display for FeedbackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FeedbackType {
    type Err = ValidationError;

    /// Case-insensitive, so `BUG` and `bug` both parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "type",
                    format!("'{}' is not one of bug, feature, confusion, suggestion", s),
                )
            })
    }
}
