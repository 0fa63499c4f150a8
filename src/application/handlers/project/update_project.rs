//! UpdateProjectHandler - Command handler for partial project updates.

use std::sync::Arc;

use crate::domain::foundation::{OwnedByUser, ProjectId, UserId};
use crate::domain::project::{Project, ProjectError, ProjectPatch};
use crate::ports::UnitOfWork;

#[derive(Debug, Clone)]
pub struct UpdateProjectCommand {
    pub project_id: ProjectId,
    pub owner_id: UserId,
    pub patch: ProjectPatch,
}

pub struct UpdateProjectHandler {
    uow: Arc<dyn UnitOfWork>,
}

impl UpdateProjectHandler {
    pub fn new(uow: Arc<dyn UnitOfWork>) -> Self {
        Self { uow }
    }

    pub async fn handle(&self, cmd: UpdateProjectCommand) -> Result<Project, ProjectError> {
        let mut tx = self.uow.begin().await?;

        // 1. Load, hiding other owners' projects
        let mut project = tx
            .find_project(cmd.project_id)
            .await?
            .filter(|p| p.is_owner(cmd.owner_id))
            .ok_or(ProjectError::NotFound(cmd.project_id))?;

        // 2. Apply
        project.apply_patch(cmd.patch)?;

        // 3. Persist
        tx.update_project(&project).await?;
        tx.commit().await?;

        tracing::info!(project_id = %project.id, "Project updated");
        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::application::handlers::test_support::{seed_owner, seed_project};
    use crate::domain::project::PublicSlug;

    #[tokio::test]
    async fn only_supplied_fields_change() {
        let store = InMemoryStore::new();
        let owner = seed_owner(&store, "owner@example.com").await;
        let project = seed_project(&store, owner, "AAAAAAAA", 3).await;
        let handler = UpdateProjectHandler::new(Arc::new(store));

        let updated = handler
            .handle(UpdateProjectCommand {
                project_id: project.id,
                owner_id: owner,
                patch: ProjectPatch {
                    feedback_expiry_days: Some(10),
                    description: Some(Some("Now with docs".to_string())),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(updated.name, project.name);
        assert_eq!(updated.feedback_expiry_days, 10);
        assert_eq!(updated.description.as_deref(), Some("Now with docs"));
        assert_eq!(updated.public_slug, PublicSlug::parse("AAAAAAAA").unwrap());
        assert_eq!(updated.created_at, project.created_at);
    }

    #[tokio::test]
    async fn invalid_patch_changes_nothing() {
        let store = InMemoryStore::new();
        let owner = seed_owner(&store, "owner@example.com").await;
        let project = seed_project(&store, owner, "AAAAAAAA", 3).await;
        let handler = UpdateProjectHandler::new(Arc::new(store.clone()));

        let result = handler
            .handle(UpdateProjectCommand {
                project_id: project.id,
                owner_id: owner,
                patch: ProjectPatch {
                    feedback_expiry_days: Some(30),
                    name: Some(" ".to_string()),
                    ..Default::default()
                },
            })
            .await;
        assert!(matches!(result, Err(ProjectError::ValidationFailed { .. })));

        let mut tx = store.begin().await.unwrap();
        let stored = tx.find_project(project.id).await.unwrap().unwrap();
        assert_eq!(stored, project);
    }

    #[tokio::test]
    async fn non_owner_gets_not_found() {
        let store = InMemoryStore::new();
        let owner = seed_owner(&store, "owner@example.com").await;
        let stranger = seed_owner(&store, "stranger@example.com").await;
        let project = seed_project(&store, owner, "AAAAAAAA", 3).await;

        let result = UpdateProjectHandler::new(Arc::new(store))
            .handle(UpdateProjectCommand {
                project_id: project.id,
                owner_id: stranger,
                patch: ProjectPatch::default(),
            })
            .await;

        assert_eq!(result.unwrap_err(), ProjectError::NotFound(project.id));
    }
}
