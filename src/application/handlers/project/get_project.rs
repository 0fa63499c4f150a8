//! GetProjectHandler - Query handler for a single owned project.

use std::sync::Arc;

use crate::domain::foundation::{OwnedByUser, ProjectId, UserId};
use crate::domain::project::{Project, ProjectError};
use crate::ports::UnitOfWork;

/// Query for one of the caller's projects.
#[derive(Debug, Clone)]
pub struct GetProjectQuery {
    pub project_id: ProjectId,
    pub owner_id: UserId,
}

pub struct GetProjectHandler {
    uow: Arc<dyn UnitOfWork>,
}

impl GetProjectHandler {
    pub fn new(uow: Arc<dyn UnitOfWork>) -> Self {
        Self { uow }
    }

    /// A project owned by someone else is reported exactly like a missing one.
    pub async fn handle(&self, query: GetProjectQuery) -> Result<Project, ProjectError> {
        let mut tx = self.uow.begin().await?;
        tx.find_project(query.project_id)
            .await?
            .filter(|p| p.is_owner(query.owner_id))
            .ok_or(ProjectError::NotFound(query.project_id))
    }
}
