//! DeleteProjectHandler - Command handler for deleting projects.
//!
//! Feedback and history go with the project. The slug stays reserved.

use std::sync::Arc;

use crate::domain::foundation::{OwnedByUser, ProjectId, UserId};
use crate::domain::project::{Project, ProjectError};
use crate::ports::UnitOfWork;

#[derive(Debug, Clone)]
pub struct DeleteProjectCommand {
    pub project_id: ProjectId,
    pub owner_id: UserId,
}

pub struct DeleteProjectHandler {
    uow: Arc<dyn UnitOfWork>,
}

impl DeleteProjectHandler {
    pub fn new(uow: Arc<dyn UnitOfWork>) -> Self {
        Self { uow }
    }

    /// Returns the project as it was just before deletion.
    pub async fn handle(&self, cmd: DeleteProjectCommand) -> Result<Project, ProjectError> {
        let mut tx = self.uow.begin().await?;

        let project = tx
            .find_project(cmd.project_id)
            .await?
            .filter(|p| p.is_owner(cmd.owner_id))
            .ok_or(ProjectError::NotFound(cmd.project_id))?;

        tx.delete_project(project.id).await?;
        tx.commit().await?;

        tracing::info!(project_id = %project.id, "Project deleted");
        Ok(project)
    }
}
