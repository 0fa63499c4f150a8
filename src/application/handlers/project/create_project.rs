//! CreateProjectHandler - Command handler for creating projects.
//!
//! Slug allocation draws a random candidate, pre-checks the registry and
//! inserts. The store's uniqueness constraint is the real guarantee: a
//! conflict at insert or commit means another request won the race, so the
//! whole transaction is discarded and a fresh slug is drawn.
//!
//! Redrawing is bounded by `projects.slug_attempts` (default 64). With 62^8
//! possible slugs that many consecutive collisions does not happen in
//! practice; if it does, the request fails as an infrastructure error (500)
//! rather than looping forever.

use std::sync::Arc;

use crate::config::ProjectsConfig;
use crate::domain::foundation::UserId;
use crate::domain::project::{Project, ProjectDraft, ProjectError};
use crate::ports::{Clock, SlugGenerator, UnitOfWork};

/// Command to create a project.
#[derive(Debug, Clone)]
pub struct CreateProjectCommand {
    pub owner_id: UserId,
    pub name: String,
    pub description: Option<String>,
    pub product_url: Option<String>,
    /// Falls back to the configured default when absent.
    pub feedback_expiry_days: Option<i32>,
}

/// Handler for creating projects.
pub struct CreateProjectHandler {
    uow: Arc<dyn UnitOfWork>,
    slugs: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
    config: ProjectsConfig,
}

impl CreateProjectHandler {
    pub fn new(
        uow: Arc<dyn UnitOfWork>,
        slugs: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
        config: ProjectsConfig,
    ) -> Self {
        Self {
            uow,
            slugs,
            clock,
            config,
        }
    }

    pub async fn handle(&self, cmd: CreateProjectCommand) -> Result<Project, ProjectError> {
        let draft = ProjectDraft::new(
            &cmd.name,
            cmd.description,
            cmd.product_url,
            cmd.feedback_expiry_days
                .unwrap_or(self.config.default_expiry_days),
        )?;

        for attempt in 1..=self.config.slug_attempts {
            let slug = self.slugs.generate();
            let mut tx = self.uow.begin().await?;

            if tx.slug_exists(&slug).await? {
                tracing::debug!(attempt, "Public slug already issued, drawing again");
                continue;
            }

            let new_project = draft.with_slug(cmd.owner_id, slug, self.clock.now());
            let project = match tx.insert_project(new_project).await {
                Ok(project) => project,
                Err(e) if e.is_conflict() => {
                    tracing::debug!(attempt, "Public slug taken concurrently, drawing again");
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            match tx.commit().await {
                Ok(()) => {
                    tracing::info!(
                        project_id = %project.id,
                        owner_id = %project.owner_id,
                        slug = %project.public_slug,
                        "Project created"
                    );
                    return Ok(project);
                }
                Err(e) if e.is_conflict() => {
                    tracing::debug!(attempt, "Public slug taken at commit, drawing again");
                }
                Err(e) => return Err(e.into()),
            }
        }

        tracing::error!(
            attempts = self.config.slug_attempts,
            "Could not allocate a unique public slug"
        );
        Err(ProjectError::infrastructure(
            "could not allocate a unique public slug",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::adapters::slug::{RandomSlugGenerator, ScriptedSlugGenerator};
    use crate::application::handlers::test_support::{fixed_clock, seed_owner, seed_project, t0};
    use crate::domain::project::PublicSlug;

    fn cmd(owner_id: UserId, name: &str) -> CreateProjectCommand {
        CreateProjectCommand {
            owner_id,
            name: name.to_string(),
            description: Some("A widget".to_string()),
            product_url: None,
            feedback_expiry_days: None,
        }
    }

    fn handler(store: &InMemoryStore, slugs: Arc<dyn SlugGenerator>) -> CreateProjectHandler {
        CreateProjectHandler::new(
            Arc::new(store.clone()),
            slugs,
            fixed_clock(),
            ProjectsConfig::default(),
        )
    }

    #[tokio::test]
    async fn creates_project_with_defaults() {
        let store = InMemoryStore::new();
        let owner = seed_owner(&store, "owner@example.com").await;

        let project = handler(&store, Arc::new(RandomSlugGenerator))
            .handle(cmd(owner, "  Widget  "))
            .await
            .unwrap();

        assert_eq!(project.owner_id, owner);
        assert_eq!(project.name, "Widget");
        assert_eq!(project.feedback_expiry_days, 3);
        assert_eq!(project.created_at, t0());
    }

    #[tokio::test]
    async fn empty_name_is_rejected() {
        let store = InMemoryStore::new();
        let owner = seed_owner(&store, "owner@example.com").await;

        let result = handler(&store, Arc::new(RandomSlugGenerator))
            .handle(cmd(owner, "   "))
            .await;

        assert!(matches!(
            result,
            Err(ProjectError::ValidationFailed { ref field, .. }) if field == "name"
        ));
    }

    #[tokio::test]
    async fn expiry_outside_range_is_rejected() {
        let store = InMemoryStore::new();
        let owner = seed_owner(&store, "owner@example.com").await;
        let handler = handler(&store, Arc::new(RandomSlugGenerator));

        for days in [0, 366] {
            let result = handler
                .handle(CreateProjectCommand {
                    feedback_expiry_days: Some(days),
                    ..cmd(owner, "Widget")
                })
                .await;
            assert!(matches!(result, Err(ProjectError::ValidationFailed { .. })));
        }
    }

    #[tokio::test]
    async fn collision_draws_a_new_slug() {
        let store = InMemoryStore::new();
        let owner = seed_owner(&store, "owner@example.com").await;
        seed_project(&store, owner, "TAKEN000", 3).await;

        let taken = PublicSlug::parse("TAKEN000").unwrap();
        let fresh = PublicSlug::parse("FRESH000").unwrap();
        let slugs = ScriptedSlugGenerator::new([taken.clone(), taken, fresh.clone()]);

        let project = handler(&store, Arc::new(slugs))
            .handle(cmd(owner, "Second"))
            .await
            .unwrap();

        assert_eq!(project.public_slug, fresh);
    }

    #[tokio::test]
    async fn default_config_outlasts_a_long_collision_run() {
        let store = InMemoryStore::new();
        let owner = seed_owner(&store, "owner@example.com").await;
        seed_project(&store, owner, "TAKEN000", 3).await;

        let taken = PublicSlug::parse("TAKEN000").unwrap();
        let fresh = PublicSlug::parse("FRESH000").unwrap();
        let slugs =
            ScriptedSlugGenerator::new(std::iter::repeat(taken).take(40).chain([fresh.clone()]));

        let project = handler(&store, Arc::new(slugs))
            .handle(cmd(owner, "Second"))
            .await
            .unwrap();

        assert_eq!(project.public_slug, fresh);
    }

    #[tokio::test]
    async fn gives_up_after_configured_attempts() {
        let store = InMemoryStore::new();
        let owner = seed_owner(&store, "owner@example.com").await;
        seed_project(&store, owner, "TAKEN000", 3).await;

        let taken = PublicSlug::parse("TAKEN000").unwrap();
        let slugs = ScriptedSlugGenerator::new(vec![taken; 3]);
        let handler = CreateProjectHandler::new(
            Arc::new(store.clone()),
            Arc::new(slugs),
            fixed_clock(),
            ProjectsConfig {
                slug_attempts: 3,
                ..Default::default()
            },
        );

        let result = handler.handle(cmd(owner, "Second")).await;

        assert!(matches!(result, Err(ProjectError::Infrastructure(_))));
    }
}
