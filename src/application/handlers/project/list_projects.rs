//! ListProjectsHandler - Query handler for the caller's projects.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::project::{Project, ProjectError};
use crate::ports::UnitOfWork;

#[derive(Debug, Clone)]
pub struct ListProjectsQuery {
    pub owner_id: UserId,
}

pub struct ListProjectsHandler {
    uow: Arc<dyn UnitOfWork>,
}

impl ListProjectsHandler {
    pub fn new(uow: Arc<dyn UnitOfWork>) -> Self {
        Self { uow }
    }

    pub async fn handle(&self, query: ListProjectsQuery) -> Result<Vec<Project>, ProjectError> {
        let mut tx = self.uow.begin().await?;
        Ok(tx.list_projects_by_owner(query.owner_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::application::handlers::test_support::{seed_owner, seed_project};

    #[tokio::test]
    async fn lists_only_own_projects_in_creation_order() {
        let store = InMemoryStore::new();
        let owner = seed_owner(&store, "owner@example.com").await;
        let other = seed_owner(&store, "other@example.com").await;
        let first = seed_project(&store, owner, "AAAAAAAA", 3).await;
        seed_project(&store, other, "BBBBBBBB", 3).await;
        let second = seed_project(&store, owner, "CCCCCCCC", 3).await;

        let projects = ListProjectsHandler::new(Arc::new(store))
            .handle(ListProjectsQuery { owner_id: owner })
            .await
            .unwrap();

        assert_eq!(projects, vec![first, second]);
    }
}
