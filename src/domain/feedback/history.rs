//! Status history - the append-only audit trail of a feedback item.

use crate::domain::foundation::{FeedbackId, HistoryEntryId, Timestamp};

use super::FeedbackStatus;

/// Note recorded on the synthetic entry written at submission time.
pub const SUBMISSION_NOTE: &str = "Feedback submitted";

/// One persisted status change. Never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusHistoryEntry {
    pub id: HistoryEntryId,
    pub feedback_id: FeedbackId,
    pub old_status: FeedbackStatus,
    pub new_status: FeedbackStatus,
    pub note: Option<String>,
    pub changed_at: Timestamp,
}

/// A status change to append; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStatusHistoryEntry {
    pub feedback_id: FeedbackId,
    pub old_status: FeedbackStatus,
    pub new_status: FeedbackStatus,
    pub note: Option<String>,
    pub changed_at: Timestamp,
}

impl NewStatusHistoryEntry {
    /// The NEW -> NEW entry recorded alongside every submission.
    pub fn submitted(feedback_id: FeedbackId, at: Timestamp) -> Self {
        Self {
            feedback_id,
            old_status: FeedbackStatus::New,
            new_status: FeedbackStatus::New,
            note: Some(SUBMISSION_NOTE.to_string()),
            changed_at: at,
        }
    }

    pub fn into_entry(self, id: HistoryEntryId) -> StatusHistoryEntry {
        StatusHistoryEntry {
            id,
            feedback_id: self.feedback_id,
            old_status: self.old_status,
            new_status: self.new_status,
            note: self.note,
            changed_at: self.changed_at,
        }
    }
}
