//! Feedback repository port.
//!
//! Covers both feedback items and their append-only status history, since
//! every history write happens in the same transaction as a feedback write.

use async_trait::async_trait;

use crate::domain::feedback::{Feedback, NewFeedback, NewStatusHistoryEntry, StatusHistoryEntry};
use crate::domain::foundation::{DomainError, FeedbackId, ProjectId};

#[async_trait]
pub trait FeedbackRepository: Send {
    /// Insert a feedback item and return it with its assigned id.
    async fn insert_feedback(&mut self, feedback: NewFeedback) -> Result<Feedback, DomainError>;

    /// Find a feedback item by id.
    async fn find_feedback(&mut self, id: FeedbackId) -> Result<Option<Feedback>, DomainError>;

    /// Find a feedback item and lock it until the transaction ends.
    ///
    /// Concurrent status changes on the same item serialize here.
    async fn find_feedback_for_update(
        &mut self,
        id: FeedbackId,
    ) -> Result<Option<Feedback>, DomainError>;

    /// Persist status and resolved_at of an existing item.
    ///
    /// # Errors
    ///
    /// - `FeedbackNotFound` if the item doesn't exist
    async fn update_feedback(&mut self, feedback: &Feedback) -> Result<(), DomainError>;

    /// All feedback for a project, in submission order.
    async fn list_feedback_by_project(
        &mut self,
        project: ProjectId,
    ) -> Result<Vec<Feedback>, DomainError>;

    /// Append one history entry.
    async fn append_history(
        &mut self,
        entry: NewStatusHistoryEntry,
    ) -> Result<StatusHistoryEntry, DomainError>;

    /// History of one feedback item, in insertion order.
    async fn list_history(
        &mut self,
        feedback: FeedbackId,
    ) -> Result<Vec<StatusHistoryEntry>, DomainError>;
}
