//! UpdateFeedbackStatusHandler - Owner triage of a feedback item.
//!
//! The feedback row is locked for the whole transaction, so two concurrent
//! updates serialize and the second one validates its transition against
//! the status the first one left behind.

use std::sync::Arc;

use crate::domain::feedback::{Feedback, FeedbackError, FeedbackStatus, NewStatusHistoryEntry};
use crate::domain::foundation::{FeedbackId, OwnedByUser, UserId};
use crate::ports::{Clock, UnitOfWork};

/// Command to move a feedback item to a new status.
#[derive(Debug, Clone)]
pub struct UpdateFeedbackStatusCommand {
    pub feedback_id: FeedbackId,
    pub caller_id: UserId,
    /// Raw wire value; parsed after the ownership check.
    pub status: String,
    pub note: Option<String>,
}

pub struct UpdateFeedbackStatusHandler {
    uow: Arc<dyn UnitOfWork>,
    clock: Arc<dyn Clock>,
}

impl UpdateFeedbackStatusHandler {
    pub fn new(uow: Arc<dyn UnitOfWork>, clock: Arc<dyn Clock>) -> Self {
        Self { uow, clock }
    }

    pub async fn handle(
        &self,
        cmd: UpdateFeedbackStatusCommand,
    ) -> Result<Feedback, FeedbackError> {
        let mut tx = self.uow.begin().await?;

        // 1. Load and lock
        let mut feedback = tx
            .find_feedback_for_update(cmd.feedback_id)
            .await?
            .ok_or(FeedbackError::NotFound(cmd.feedback_id))?;

        // 2. Authorize - caller must own the parent project
        let project = tx
            .find_project(feedback.project_id)
            .await?
            .ok_or(FeedbackError::NotFound(cmd.feedback_id))?;
        if let Err(e) = project.check_ownership(cmd.caller_id) {
            tracing::warn!(
                feedback_id = %feedback.id,
                caller_id = %cmd.caller_id,
                "Status change rejected: not the project owner"
            );
            return Err(e.into());
        }

        // 3. Parse target
        if cmd.status.trim().is_empty() {
            return Err(FeedbackError::validation("status", "status is required"));
        }
        let target: FeedbackStatus = cmd.status.parse()?;

        // 4. Transition + note rule
        let change = match feedback.change_status(target, cmd.note, self.clock.now()) {
            Ok(change) => change,
            Err(e) => {
                tracing::warn!(
                    feedback_id = %feedback.id,
                    from = %feedback.status,
                    to = %target,
                    "Status change rejected: {}",
                    e
                );
                return Err(e);
            }
        };

        // 5. Persist status and audit row together
        tx.update_feedback(&feedback).await?;
        tx.append_history(NewStatusHistoryEntry::from(change.clone()))
            .await?;
        tx.commit().await?;

        tracing::info!(
            feedback_id = %feedback.id,
            from = %change.old_status,
            to = %change.new_status,
            "Feedback status changed"
        );
        Ok(feedback)
    }
}
