//! Feedback aggregate.
//!
//! Feedback is created by an anonymous submission and then triaged by the
//! project owner. Status only moves along the edges of the `FeedbackStatus`
//! transition table, and every change yields a `StatusChange` that the
//! caller must append to the audit trail in the same transaction.

use crate::domain::foundation::{
    FeedbackId, ProjectId, StateMachine, Timestamp, ValidationError,
};

use super::{FeedbackError, FeedbackStatus, FeedbackType, NewStatusHistoryEntry};

/// Feedback aggregate.
///
/// # Invariants
///
/// - `project_id` and `created_at` never change
/// - `description` is non-empty
/// - `resolved_at` is set exactly when `status` is RESOLVED or REJECTED
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub id: FeedbackId,
    pub project_id: ProjectId,
    pub kind: FeedbackType,
    pub description: String,
    pub submitter_email: Option<String>,
    pub status: FeedbackStatus,
    pub created_at: Timestamp,
    pub resolved_at: Option<Timestamp>,
}

impl Feedback {
    /// Moves the feedback to `target`, validating the transition table and
    /// the note requirement before anything is mutated.
    pub fn change_status(
        &mut self,
        target: FeedbackStatus,
        note: Option<String>,
        at: Timestamp,
    ) -> Result<StatusChange, FeedbackError> {
        let next = self.status.transition_to(target)?;

        let note = note
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        if next.requires_note() && note.is_none() {
            return Err(FeedbackError::note_required());
        }

        let old_status = self.status;
        self.status = next;
        if next.closes_feedback() {
            self.resolved_at = Some(at);
        }

        Ok(StatusChange {
            feedback_id: self.id,
            old_status,
            new_status: next,
            note,
            changed_at: at,
        })
    }
}

/// Outcome of a successful status change, to be recorded in history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub feedback_id: FeedbackId,
    pub old_status: FeedbackStatus,
    pub new_status: FeedbackStatus,
    pub note: Option<String>,
    pub changed_at: Timestamp,
}

impl From<StatusChange> for NewStatusHistoryEntry {
    fn from(change: StatusChange) -> Self {
        NewStatusHistoryEntry {
            feedback_id: change.feedback_id,
            old_status: change.old_status,
            new_status: change.new_status,
            note: change.note,
            changed_at: change.changed_at,
        }
    }
}

/// A validated submission; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeedback {
    pub project_id: ProjectId,
    pub kind: FeedbackType,
    pub description: String,
    pub submitter_email: Option<String>,
    pub created_at: Timestamp,
}

impl NewFeedback {
    /// Validates an anonymous submission. Status always starts at NEW.
    pub fn submit(
        project_id: ProjectId,
        kind: FeedbackType,
        description: &str,
        submitter_email: Option<String>,
        created_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ValidationError::empty_field("description"));
        }

        Ok(Self {
            project_id,
            kind,
            description: description.to_string(),
            submitter_email: submitter_email
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty()),
            created_at,
        })
    }

    pub fn into_feedback(self, id: FeedbackId) -> Feedback {
        Feedback {
            id,
            project_id: self.project_id,
            kind: self.kind,
            description: self.description,
            submitter_email: self.submitter_email,
            status: FeedbackStatus::New,
            created_at: self.created_at,
            resolved_at: None,
        }
    }
}
