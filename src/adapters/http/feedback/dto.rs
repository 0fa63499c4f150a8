//! HTTP DTOs for feedback endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::extract::de;
use crate::domain::feedback::{Feedback, FeedbackStatus, FeedbackType, StatusHistoryEntry};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to move a feedback item to a new status.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStatusRequest {
    /// Wire value; missing or `null` is reported as a validation error.
    #[serde(default, deserialize_with = "de::token")]
    pub status: String,
    #[serde(default, deserialize_with = "de::optional_text")]
    pub note: Option<String>,
}

/// Anonymous submission through a public link.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitFeedbackRequest {
    #[serde(default, rename = "type", deserialize_with = "de::token")]
    pub kind: String,
    #[serde(default, deserialize_with = "de::text_or_blank")]
    pub description: String,
    #[serde(default, deserialize_with = "de::optional_text")]
    pub submitter_email: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Owner's view of a feedback item, with display labels resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub id: i64,
    pub project_id: i64,
    #[serde(rename = "type")]
    pub kind: FeedbackType,
    pub type_label: String,
    pub description: String,
    pub status: FeedbackStatus,
    pub status_label: String,
    pub submitter_email: Option<String>,
    pub created_at: String,
    pub resolved_at: Option<String>,
}

impl From<Feedback> for FeedbackResponse {
    fn from(feedback: Feedback) -> Self {
        Self {
            id: feedback.id.as_i64(),
            project_id: feedback.project_id.as_i64(),
            kind: feedback.kind,
            type_label: feedback.kind.label().to_string(),
            description: feedback.description,
            status: feedback.status,
            status_label: feedback.status.label().to_string(),
            submitter_email: feedback.submitter_email,
            created_at: feedback.created_at.to_rfc3339(),
            resolved_at: feedback.resolved_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// One audit row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntryResponse {
    pub id: i64,
    pub feedback_id: i64,
    pub old_status: FeedbackStatus,
    pub new_status: FeedbackStatus,
    pub note: Option<String>,
    pub changed_at: String,
}

impl From<StatusHistoryEntry> for HistoryEntryResponse {
    fn from(entry: StatusHistoryEntry) -> Self {
        Self {
            id: entry.id.as_i64(),
            feedback_id: entry.feedback_id.as_i64(),
            old_status: entry.old_status,
            new_status: entry.new_status,
            note: entry.note,
            changed_at: entry.changed_at.to_rfc3339(),
        }
    }
}
