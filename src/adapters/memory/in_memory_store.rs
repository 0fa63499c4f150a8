//! In-memory store implementing every repository port.
//!
//! Tables are plain maps keyed by id; relations are foreign-key ids and
//! queries, never object references. A transaction takes the store-wide
//! lock, works on a staged copy of the tables and publishes it on commit.
//! Dropping the transaction discards the staged copy.
//!
//! Holding the lock for the whole transaction serializes all transactions,
//! which trivially gives the row-locking behaviour the Postgres adapter
//! gets from `SELECT ... FOR UPDATE`.
//!
//! # Example
//!
//! ```ignore
//! let store = Arc::new(InMemoryStore::new());
//! let handler = SubmitFeedbackHandler::new(store.clone(), clock);
//! handler.handle(cmd).await?;
//! assert_eq!(store.history_count().await, 1);
//! ```

use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::feedback::{Feedback, NewFeedback, NewStatusHistoryEntry, StatusHistoryEntry};
use crate::domain::foundation::{
    DomainError, ErrorCode, FeedbackId, HistoryEntryId, ProjectId, UserId,
};
use crate::domain::project::{NewProject, Project, PublicSlug};
use crate::domain::user::{NewUser, User};
use crate::ports::{
    FeedbackRepository, ProjectRepository, Transaction, UnitOfWork, UserRepository,
};

#[derive(Debug, Clone, Default)]
struct Tables {
    users: BTreeMap<i64, User>,
    projects: BTreeMap<i64, Project>,
    issued_slugs: HashSet<String>,
    feedback: BTreeMap<i64, Feedback>,
    history: BTreeMap<i64, StatusHistoryEntry>,
    last_id: i64,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

/// Arena-style store shared by every handler.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
    fail_history_writes: Arc<AtomicBool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // === Test Helpers ===

    /// Make every subsequent `append_history` fail with a database error.
    pub fn fail_history_writes(&self, fail: bool) {
        self.fail_history_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of committed feedback rows.
    pub async fn feedback_count(&self) -> usize {
        self.tables.lock().await.feedback.len()
    }

    /// Number of committed history rows.
    pub async fn history_count(&self) -> usize {
        self.tables.lock().await.history.len()
    }
}

#[async_trait]
impl UnitOfWork for InMemoryStore {
    async fn begin(&self) -> Result<Box<dyn Transaction>, DomainError> {
        let guard = self.tables.clone().lock_owned().await;
        let staged = guard.clone();
        Ok(Box::new(InMemoryTransaction {
            guard,
            staged,
            fail_history_writes: self.fail_history_writes.load(Ordering::SeqCst),
        }))
    }
}

struct InMemoryTransaction {
    guard: OwnedMutexGuard<Tables>,
    staged: Tables,
    fail_history_writes: bool,
}

#[async_trait]
impl Transaction for InMemoryTransaction {
    async fn commit(self: Box<Self>) -> Result<(), DomainError> {
        let InMemoryTransaction {
            mut guard, staged, ..
        } = *self;
        *guard = staged;
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryTransaction {
    async fn insert_user(&mut self, user: NewUser) -> Result<User, DomainError> {
        if self.staged.users.values().any(|u| u.email == user.email) {
            return Err(DomainError::conflict("email already registered")
                .with_detail("field", "email"));
        }
        let id = self.staged.next_id();
        let user = user.into_user(UserId::new(id));
        self.staged.users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_user_by_email(&mut self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .staged
            .users
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_user_by_id(&mut self, id: UserId) -> Result<Option<User>, DomainError> {
        Ok(self.staged.users.get(&id.as_i64()).cloned())
    }
}

#[async_trait]
impl ProjectRepository for InMemoryTransaction {
    async fn slug_exists(&mut self, slug: &PublicSlug) -> Result<bool, DomainError> {
        Ok(self.staged.issued_slugs.contains(slug.as_str()))
    }

    async fn insert_project(&mut self, project: NewProject) -> Result<Project, DomainError> {
        if !self
            .staged
            .issued_slugs
            .insert(project.public_slug.as_str().to_string())
        {
            return Err(DomainError::conflict("public slug already issued")
                .with_detail("field", "public_slug"));
        }
        let id = self.staged.next_id();
        let project = project.into_project(ProjectId::new(id));
        self.staged.projects.insert(id, project.clone());
        Ok(project)
    }

    async fn find_project(&mut self, id: ProjectId) -> Result<Option<Project>, DomainError> {
        Ok(self.staged.projects.get(&id.as_i64()).cloned())
    }

    async fn find_project_by_slug(
        &mut self,
        slug: &PublicSlug,
    ) -> Result<Option<Project>, DomainError> {
        Ok(self
            .staged
            .projects
            .values()
            .find(|p| &p.public_slug == slug)
            .cloned())
    }

    async fn list_projects_by_owner(
        &mut self,
        owner: UserId,
    ) -> Result<Vec<Project>, DomainError> {
        Ok(self
            .staged
            .projects
            .values()
            .filter(|p| p.owner_id == owner)
            .cloned()
            .collect())
    }

    async fn update_project(&mut self, project: &Project) -> Result<(), DomainError> {
        match self.staged.projects.get_mut(&project.id.as_i64()) {
            Some(stored) => {
                *stored = project.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::ProjectNotFound,
                format!("project {} not found", project.id),
            )),
        }
    }

    async fn delete_project(&mut self, id: ProjectId) -> Result<(), DomainError> {
        if self.staged.projects.remove(&id.as_i64()).is_none() {
            return Err(DomainError::new(
                ErrorCode::ProjectNotFound,
                format!("project {} not found", id),
            ));
        }
        let orphaned: HashSet<FeedbackId> = self
            .staged
            .feedback
            .values()
            .filter(|f| f.project_id == id)
            .map(|f| f.id)
            .collect();
        self.staged.feedback.retain(|_, f| f.project_id != id);
        self.staged
            .history
            .retain(|_, h| !orphaned.contains(&h.feedback_id));
        Ok(())
    }
}

#[async_trait]
impl FeedbackRepository for InMemoryTransaction {
    async fn insert_feedback(&mut self, feedback: NewFeedback) -> Result<Feedback, DomainError> {
        if !self
            .staged
            .projects
            .contains_key(&feedback.project_id.as_i64())
        {
            return Err(DomainError::new(
                ErrorCode::ProjectNotFound,
                format!("project {} not found", feedback.project_id),
            ));
        }
        let id = self.staged.next_id();
        let feedback = feedback.into_feedback(FeedbackId::new(id));
        self.staged.feedback.insert(id, feedback.clone());
        Ok(feedback)
    }

    async fn find_feedback(&mut self, id: FeedbackId) -> Result<Option<Feedback>, DomainError> {
        Ok(self.staged.feedback.get(&id.as_i64()).cloned())
    }

    async fn find_feedback_for_update(
        &mut self,
        id: FeedbackId,
    ) -> Result<Option<Feedback>, DomainError> {
        // The transaction already holds the store-wide lock.
        self.find_feedback(id).await
    }

    async fn update_feedback(&mut self, feedback: &Feedback) -> Result<(), DomainError> {
        match self.staged.feedback.get_mut(&feedback.id.as_i64()) {
            Some(stored) => {
                stored.status = feedback.status;
                stored.resolved_at = feedback.resolved_at;
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::FeedbackNotFound,
                format!("feedback {} not found", feedback.id),
            )),
        }
    }

    async fn list_feedback_by_project(
        &mut self,
        project: ProjectId,
    ) -> Result<Vec<Feedback>, DomainError> {
        Ok(self
            .staged
            .feedback
            .values()
            .filter(|f| f.project_id == project)
            .cloned()
            .collect())
    }

    async fn append_history(
        &mut self,
        entry: NewStatusHistoryEntry,
    ) -> Result<StatusHistoryEntry, DomainError> {
        if self.fail_history_writes {
            return Err(DomainError::database("history table unavailable"));
        }
        if !self
            .staged
            .feedback
            .contains_key(&entry.feedback_id.as_i64())
        {
            return Err(DomainError::new(
                ErrorCode::FeedbackNotFound,
                format!("feedback {} not found", entry.feedback_id),
            ));
        }
        let id = self.staged.next_id();
        let entry = entry.into_entry(HistoryEntryId::new(id));
        self.staged.history.insert(id, entry.clone());
        Ok(entry)
    }

    async fn list_history(
        &mut self,
        feedback: FeedbackId,
    ) -> Result<Vec<StatusHistoryEntry>, DomainError> {
        Ok(self
            .staged
            .history
            .values()
            .filter(|h| h.feedback_id == feedback)
            .cloned()
            .collect())
    }
}
