//! Project repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ProjectId, UserId};
use crate::domain::project::{NewProject, Project, PublicSlug};

/// Persistence for projects and the registry of issued slugs.
///
/// Slugs stay reserved after their project is deleted, so a slug is
/// never handed out twice.
#[async_trait]
pub trait ProjectRepository: Send {
    /// True if the slug has ever been issued.
    async fn slug_exists(&mut self, slug: &PublicSlug) -> Result<bool, DomainError>;

    /// Insert a project, reserving its slug.
    ///
    /// # Errors
    ///
    /// - `Conflict` if the slug was already issued
    /// - `DatabaseError` on persistence failure
    async fn insert_project(&mut self, project: NewProject) -> Result<Project, DomainError>;

    /// Find a project by id, regardless of owner.
    async fn find_project(&mut self, id: ProjectId) -> Result<Option<Project>, DomainError>;

    /// Find a live project by its public slug.
    async fn find_project_by_slug(
        &mut self,
        slug: &PublicSlug,
    ) -> Result<Option<Project>, DomainError>;

    /// All projects owned by a user, in creation order.
    async fn list_projects_by_owner(&mut self, owner: UserId)
        -> Result<Vec<Project>, DomainError>;

    /// Persist the mutable fields of an existing project.
    ///
    /// # Errors
    ///
    /// - `ProjectNotFound` if the project doesn't exist
    async fn update_project(&mut self, project: &Project) -> Result<(), DomainError>;

    /// Delete a project together with its feedback and their history.
    ///
    /// # Errors
    ///
    /// - `ProjectNotFound` if the project doesn't exist
    async fn delete_project(&mut self, id: ProjectId) -> Result<(), DomainError>;
}
