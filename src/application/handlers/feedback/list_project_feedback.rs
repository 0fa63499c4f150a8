//! ListProjectFeedbackHandler - All feedback of one owned project.

use std::sync::Arc;

use crate::domain::feedback::{Feedback, FeedbackError};
use crate::domain::foundation::{OwnedByUser, ProjectId, UserId};
use crate::ports::UnitOfWork;

#[derive(Debug, Clone)]
pub struct ListProjectFeedbackQuery {
    pub project_id: ProjectId,
    pub caller_id: UserId,
}

pub struct ListProjectFeedbackHandler {
    uow: Arc<dyn UnitOfWork>,
}

impl ListProjectFeedbackHandler {
    pub fn new(uow: Arc<dyn UnitOfWork>) -> Self {
        Self { uow }
    }

    /// Another owner's project is reported as not found, like every project read.
    pub async fn handle(
        &self,
        query: ListProjectFeedbackQuery,
    ) -> Result<Vec<Feedback>, FeedbackError> {
        let mut tx = self.uow.begin().await?;

        let project = tx
            .find_project(query.project_id)
            .await?
            .filter(|p| p.is_owner(query.caller_id))
            .ok_or(FeedbackError::ProjectNotFound)?;

        Ok(tx.list_feedback_by_project(project.id).await?)
    }
}
