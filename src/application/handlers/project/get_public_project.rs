//! GetPublicProjectHandler - Unauthenticated lookup by public slug.

use std::sync::Arc;

use crate::domain::project::{Project, ProjectError, PublicSlug};
use crate::ports::{Clock, UnitOfWork};

/// Query for the public preview of a project.
#[derive(Debug, Clone)]
pub struct GetPublicProjectQuery {
    pub slug: String,
}

pub struct GetPublicProjectHandler {
    uow: Arc<dyn UnitOfWork>,
    clock: Arc<dyn Clock>,
}

impl GetPublicProjectHandler {
    pub fn new(uow: Arc<dyn UnitOfWork>, clock: Arc<dyn Clock>) -> Self {
        Self { uow, clock }
    }

    /// Resolves a slug regardless of expiry.
    ///
    /// Strings that could never be a slug are simply not found.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Project, ProjectError> {
        let not_found = || ProjectError::SlugNotFound(slug.to_string());
        let slug = PublicSlug::parse(slug).map_err(|_| not_found())?;

        let mut tx = self.uow.begin().await?;
        tx.find_project_by_slug(&slug).await?.ok_or_else(not_found)
    }

    /// The preview shown on the submission page; gone once the window closes.
    pub async fn handle(&self, query: GetPublicProjectQuery) -> Result<Project, ProjectError> {
        let project = self.find_by_slug(&query.slug).await?;
        if !project.accepts_feedback_at(self.clock.now()) {
            tracing::debug!(project_id = %project.id, "Public preview of expired project");
            return Err(ProjectError::Expired);
        }
        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::application::handlers::test_support::{fixed_clock, seed_owner, seed_project};
    use chrono::Duration;

    #[tokio::test]
    async fn slug_round_trips_to_the_same_project() {
        let store = InMemoryStore::new();
        let owner = seed_owner(&store, "owner@example.com").await;
        let project = seed_project(&store, owner, "AbC123xY", 3).await;
        let handler = GetPublicProjectHandler::new(Arc::new(store), fixed_clock());

        assert_eq!(handler.find_by_slug("AbC123xY").await.unwrap(), project);
        for other in ["abc123xy", "AbC123x", "", "AbC123xY/"] {
            assert_eq!(
                handler.find_by_slug(other).await.unwrap_err().code(),
                ProjectError::SlugNotFound(String::new()).code()
            );
        }
    }

    #[tokio::test]
    async fn preview_is_gone_after_expiry() {
        let store = InMemoryStore::new();
        let owner = seed_owner(&store, "owner@example.com").await;
        seed_project(&store, owner, "AAAAAAAA", 1).await;
        let clock = fixed_clock();
        let handler = GetPublicProjectHandler::new(Arc::new(store), clock.clone());

        let query = GetPublicProjectQuery {
            slug: "AAAAAAAA".to_string(),
        };
        assert!(handler.handle(query.clone()).await.is_ok());

        clock.advance(Duration::days(1) + Duration::seconds(1));
        assert_eq!(handler.handle(query).await.unwrap_err(), ProjectError::Expired);
    }
}
