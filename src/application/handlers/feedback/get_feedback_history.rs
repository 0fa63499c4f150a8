//! GetFeedbackHistoryHandler - Audit trail of one feedback item.

use std::sync::Arc;

use crate::domain::feedback::{FeedbackError, StatusHistoryEntry};
use crate::domain::foundation::{FeedbackId, OwnedByUser, UserId};
use crate::ports::UnitOfWork;

#[derive(Debug, Clone)]
pub struct GetFeedbackHistoryQuery {
    pub feedback_id: FeedbackId,
    pub caller_id: UserId,
}

pub struct GetFeedbackHistoryHandler {
    uow: Arc<dyn UnitOfWork>,
}

impl GetFeedbackHistoryHandler {
    pub fn new(uow: Arc<dyn UnitOfWork>) -> Self {
        Self { uow }
    }

    /// Entries in insertion order, oldest first.
    pub async fn handle(
        &self,
        query: GetFeedbackHistoryQuery,
    ) -> Result<Vec<StatusHistoryEntry>, FeedbackError> {
        let mut tx = self.uow.begin().await?;

        let feedback = tx
            .find_feedback(query.feedback_id)
            .await?
            .ok_or(FeedbackError::NotFound(query.feedback_id))?;
        let project = tx
            .find_project(feedback.project_id)
            .await?
            .ok_or(FeedbackError::NotFound(query.feedback_id))?;
        project.check_ownership(query.caller_id)?;

        Ok(tx.list_history(feedback.id).await?)
    }
}
