//! SubmitFeedbackHandler - Anonymous submission through a public slug.
//!
//! The feedback row and its synthetic NEW -> NEW history row are written in
//! one transaction: either both exist afterwards or neither does.

use std::sync::Arc;

use crate::domain::feedback::{
    Feedback, FeedbackError, FeedbackType, NewFeedback, NewStatusHistoryEntry,
};
use crate::domain::project::PublicSlug;
use crate::ports::{Clock, UnitOfWork};

/// Raw submission as received from the public form.
///
/// `kind` stays a string so that an unknown slug or a closed window is
/// reported before the payload is judged.
#[derive(Debug, Clone)]
pub struct SubmitFeedbackCommand {
    pub slug: String,
    pub kind: String,
    pub description: String,
    pub submitter_email: Option<String>,
}

pub struct SubmitFeedbackHandler {
    uow: Arc<dyn UnitOfWork>,
    clock: Arc<dyn Clock>,
}

impl SubmitFeedbackHandler {
    pub fn new(uow: Arc<dyn UnitOfWork>, clock: Arc<dyn Clock>) -> Self {
        Self { uow, clock }
    }

    pub async fn handle(&self, cmd: SubmitFeedbackCommand) -> Result<Feedback, FeedbackError> {
        let slug =
            PublicSlug::parse(cmd.slug.as_str()).map_err(|_| FeedbackError::ProjectNotFound)?;

        let mut tx = self.uow.begin().await?;

        // 1. Resolve project
        let project = tx
            .find_project_by_slug(&slug)
            .await?
            .ok_or(FeedbackError::ProjectNotFound)?;

        // 2. Submission window
        let now = self.clock.now();
        if !project.accepts_feedback_at(now) {
            tracing::warn!(
                project_id = %project.id,
                expired_at = %project.expires_at().to_rfc3339(),
                "Submission rejected: window closed"
            );
            return Err(FeedbackError::Expired);
        }

        // 3. Payload
        if cmd.kind.trim().is_empty() || cmd.description.trim().is_empty() {
            return Err(FeedbackError::validation(
                if cmd.kind.trim().is_empty() { "type" } else { "description" },
                "type and description are required",
            ));
        }
        let kind: FeedbackType = cmd.kind.parse()?;
        let new_feedback = NewFeedback::submit(
            project.id,
            kind,
            &cmd.description,
            cmd.submitter_email,
            now,
        )?;

        // 4. Feedback + provenance entry
        let feedback = tx.insert_feedback(new_feedback).await?;
        tx.append_history(NewStatusHistoryEntry::submitted(feedback.id, now))
            .await?;
        tx.commit().await?;

        tracing::info!(
            feedback_id = %feedback.id,
            project_id = %project.id,
            kind = %feedback.kind,
            "Feedback submitted"
        );
        Ok(feedback)
    }
}
