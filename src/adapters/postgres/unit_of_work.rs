//! PostgreSQL implementation of the UnitOfWork port.
//!
//! A `PgTransaction` wraps one `sqlx::Transaction`; dropping it without
//! `commit` lets sqlx issue the rollback. Postgres aborts a transaction after
//! any failed statement, so callers that retry on `Conflict` must begin a
//! fresh transaction per attempt.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, Row};

use crate::domain::feedback::{
    Feedback, FeedbackStatus, FeedbackType, NewFeedback, NewStatusHistoryEntry, StatusHistoryEntry,
};
use crate::domain::foundation::{
    DomainError, ErrorCode, FeedbackId, HistoryEntryId, ProjectId, Timestamp, UserId,
};
use crate::domain::project::{NewProject, Project, PublicSlug};
use crate::domain::user::{NewUser, User};
use crate::ports::{
    FeedbackRepository, ProjectRepository, Transaction, UnitOfWork, UserRepository,
};

/// PostgreSQL implementation of UnitOfWork.
#[derive(Clone)]
pub struct PgUnitOfWork {
    pool: PgPool,
}

impl PgUnitOfWork {
    /// Creates a new PgUnitOfWork.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UnitOfWork for PgUnitOfWork {
    async fn begin(&self) -> Result<Box<dyn Transaction>, DomainError> {
        let tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("begin transaction", e))?;
        Ok(Box::new(PgTransaction { tx }))
    }
}

/// An open Postgres transaction exposing every repository.
pub struct PgTransaction {
    tx: sqlx::Transaction<'static, Postgres>,
}

#[async_trait]
impl Transaction for PgTransaction {
    async fn commit(self: Box<Self>) -> Result<(), DomainError> {
        self.tx
            .commit()
            .await
            .map_err(|e| db_error("commit transaction", e))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Users
// ════════════════════════════════════════════════════════════════════════════

#[async_trait]
impl UserRepository for PgTransaction {
    async fn insert_user(&mut self, user: NewUser) -> Result<User, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (email, password_hash, created_at)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.created_at.as_datetime())
        .fetch_one(&mut *self.tx)
        .await
        .map_err(|e| db_error("insert user", e))?;

        let id: i64 = get(&row, "id")?;
        Ok(user.into_user(UserId::new(id)))
    }

    async fn find_user_by_email(&mut self, email: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            "SELECT id, email, password_hash, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(|e| db_error("fetch user by email", e))?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn find_user_by_id(&mut self, id: UserId) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            "SELECT id, email, password_hash, created_at FROM users WHERE id = $1",
        )
        .bind(id.as_i64())
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(|e| db_error("fetch user", e))?;

        row.as_ref().map(row_to_user).transpose()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Projects
// ════════════════════════════════════════════════════════════════════════════

const PROJECT_COLUMNS: &str = "id, owner_id, name, description, product_url, public_slug, \
                               feedback_expiry_days, created_at";

#[async_trait]
impl ProjectRepository for PgTransaction {
    async fn slug_exists(&mut self, slug: &PublicSlug) -> Result<bool, DomainError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM public_slugs WHERE slug = $1)")
                .bind(slug.as_str())
                .fetch_one(&mut *self.tx)
                .await
                .map_err(|e| db_error("check slug", e))?;

        Ok(result.0)
    }

    async fn insert_project(&mut self, project: NewProject) -> Result<Project, DomainError> {
        sqlx::query("INSERT INTO public_slugs (slug, issued_at) VALUES ($1, $2)")
            .bind(project.public_slug.as_str())
            .bind(project.created_at.as_datetime())
            .execute(&mut *self.tx)
            .await
            .map_err(|e| db_error("reserve slug", e))?;

        let row = sqlx::query(
            r#"
            INSERT INTO projects (
                owner_id, name, description, product_url, public_slug,
                feedback_expiry_days, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(project.owner_id.as_i64())
        .bind(&project.name)
        .bind(&project.description)
        .bind(&project.product_url)
        .bind(project.public_slug.as_str())
        .bind(project.feedback_expiry_days)
        .bind(project.created_at.as_datetime())
        .fetch_one(&mut *self.tx)
        .await
        .map_err(|e| db_error("insert project", e))?;

        let id: i64 = get(&row, "id")?;
        Ok(project.into_project(ProjectId::new(id)))
    }

    async fn find_project(&mut self, id: ProjectId) -> Result<Option<Project>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM projects WHERE id = $1", PROJECT_COLUMNS))
            .bind(id.as_i64())
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(|e| db_error("fetch project", e))?;

        row.as_ref().map(row_to_project).transpose()
    }

    async fn find_project_by_slug(
        &mut self,
        slug: &PublicSlug,
    ) -> Result<Option<Project>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM projects WHERE public_slug = $1",
            PROJECT_COLUMNS
        ))
        .bind(slug.as_str())
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(|e| db_error("fetch project by slug", e))?;

        row.as_ref().map(row_to_project).transpose()
    }

    async fn list_projects_by_owner(
        &mut self,
        owner: UserId,
    ) -> Result<Vec<Project>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM projects WHERE owner_id = $1 ORDER BY id",
            PROJECT_COLUMNS
        ))
        .bind(owner.as_i64())
        .fetch_all(&mut *self.tx)
        .await
        .map_err(|e| db_error("fetch projects by owner", e))?;

        rows.iter().map(row_to_project).collect()
    }

    async fn update_project(&mut self, project: &Project) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE projects SET
                name = $2,
                description = $3,
                product_url = $4,
                feedback_expiry_days = $5
            WHERE id = $1
            "#,
        )
        .bind(project.id.as_i64())
        .bind(&project.name)
        .bind(&project.description)
        .bind(&project.product_url)
        .bind(project.feedback_expiry_days)
        .execute(&mut *self.tx)
        .await
        .map_err(|e| db_error("update project", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ProjectNotFound,
                format!("Project not found: {}", project.id),
            ));
        }

        Ok(())
    }

    async fn delete_project(&mut self, id: ProjectId) -> Result<(), DomainError> {
        // Feedback and history go with it through ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id.as_i64())
            .execute(&mut *self.tx)
            .await
            .map_err(|e| db_error("delete project", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ProjectNotFound,
                format!("Project not found: {}", id),
            ));
        }

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Feedback and history
// ════════════════════════════════════════════════════════════════════════════

const FEEDBACK_COLUMNS: &str = "id, project_id, type, description, submitter_email, status, \
                                created_at, resolved_at";

#[async_trait]
impl FeedbackRepository for PgTransaction {
    async fn insert_feedback(&mut self, feedback: NewFeedback) -> Result<Feedback, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO feedback (
                project_id, type, description, submitter_email, status, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(feedback.project_id.as_i64())
        .bind(feedback.kind.as_str())
        .bind(&feedback.description)
        .bind(&feedback.submitter_email)
        .bind(FeedbackStatus::New.as_str())
        .bind(feedback.created_at.as_datetime())
        .fetch_one(&mut *self.tx)
        .await
        .map_err(|e| db_error("insert feedback", e))?;

        let id: i64 = get(&row, "id")?;
        Ok(feedback.into_feedback(FeedbackId::new(id)))
    }

    async fn find_feedback(&mut self, id: FeedbackId) -> Result<Option<Feedback>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM feedback WHERE id = $1", FEEDBACK_COLUMNS))
            .bind(id.as_i64())
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(|e| db_error("fetch feedback", e))?;

        row.as_ref().map(row_to_feedback).transpose()
    }

    async fn find_feedback_for_update(
        &mut self,
        id: FeedbackId,
    ) -> Result<Option<Feedback>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM feedback WHERE id = $1 FOR UPDATE",
            FEEDBACK_COLUMNS
        ))
        .bind(id.as_i64())
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(|e| db_error("lock feedback", e))?;

        row.as_ref().map(row_to_feedback).transpose()
    }

    async fn update_feedback(&mut self, feedback: &Feedback) -> Result<(), DomainError> {
        let result = sqlx::query(
            "UPDATE feedback SET status = $2, resolved_at = $3 WHERE id = $1",
        )
        .bind(feedback.id.as_i64())
        .bind(feedback.status.as_str())
        .bind(feedback.resolved_at.as_ref().map(|t| *t.as_datetime()))
        .execute(&mut *self.tx)
        .await
        .map_err(|e| db_error("update feedback", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::FeedbackNotFound,
                format!("Feedback not found: {}", feedback.id),
            ));
        }

        Ok(())
    }

    async fn list_feedback_by_project(
        &mut self,
        project: ProjectId,
    ) -> Result<Vec<Feedback>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM feedback WHERE project_id = $1 ORDER BY id",
            FEEDBACK_COLUMNS
        ))
        .bind(project.as_i64())
        .fetch_all(&mut *self.tx)
        .await
        .map_err(|e| db_error("fetch feedback by project", e))?;

        rows.iter().map(row_to_feedback).collect()
    }

    async fn append_history(
        &mut self,
        entry: NewStatusHistoryEntry,
    ) -> Result<StatusHistoryEntry, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO feedback_status_history (
                feedback_id, old_status, new_status, note, changed_at
            ) VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(entry.feedback_id.as_i64())
        .bind(entry.old_status.as_str())
        .bind(entry.new_status.as_str())
        .bind(&entry.note)
        .bind(entry.changed_at.as_datetime())
        .fetch_one(&mut *self.tx)
        .await
        .map_err(|e| db_error("insert status history", e))?;

        let id: i64 = get(&row, "id")?;
        Ok(entry.into_entry(HistoryEntryId::new(id)))
    }

    async fn list_history(
        &mut self,
        feedback: FeedbackId,
    ) -> Result<Vec<StatusHistoryEntry>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, feedback_id, old_status, new_status, note, changed_at
            FROM feedback_status_history
            WHERE feedback_id = $1
            ORDER BY id
            "#,
        )
        .bind(feedback.as_i64())
        .fetch_all(&mut *self.tx)
        .await
        .map_err(|e| db_error("fetch status history", e))?;

        rows.iter().map(row_to_history).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

/// Maps a sqlx error, turning unique violations into `Conflict`.
fn db_error(action: &str, e: sqlx::Error) -> DomainError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            DomainError::conflict(format!("Failed to {}: duplicate key", action))
                .with_detail("constraint", db.constraint().unwrap_or("unknown"))
        }
        _ => DomainError::database(format!("Failed to {}: {}", action, e)),
    }
}

fn get<'r, T>(row: &'r PgRow, column: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, Postgres> + sqlx::Type<Postgres>,
{
    row.try_get(column)
        .map_err(|e| DomainError::database(format!("Failed to get {}: {}", column, e)))
}

fn get_timestamp(row: &PgRow, column: &str) -> Result<Timestamp, DomainError> {
    let dt: chrono::DateTime<chrono::Utc> = get(row, column)?;
    Ok(Timestamp::from_datetime(dt))
}

fn str_to_status(s: &str) -> Result<FeedbackStatus, DomainError> {
    s.parse()
        .map_err(|_| DomainError::database(format!("Invalid feedback status: {}", s)))
}

fn str_to_type(s: &str) -> Result<FeedbackType, DomainError> {
    s.parse()
        .map_err(|_| DomainError::database(format!("Invalid feedback type: {}", s)))
}

fn row_to_user(row: &PgRow) -> Result<User, DomainError> {
    Ok(User {
        id: UserId::new(get(row, "id")?),
        email: get(row, "email")?,
        password_hash: get(row, "password_hash")?,
        created_at: get_timestamp(row, "created_at")?,
    })
}

fn row_to_project(row: &PgRow) -> Result<Project, DomainError> {
    let slug: String = get(row, "public_slug")?;
    let public_slug = PublicSlug::parse(slug.as_str())
        .map_err(|e| DomainError::database(format!("Invalid public_slug {}: {}", slug, e)))?;

    Ok(Project {
        id: ProjectId::new(get(row, "id")?),
        owner_id: UserId::new(get(row, "owner_id")?),
        name: get(row, "name")?,
        description: get(row, "description")?,
        product_url: get(row, "product_url")?,
        public_slug,
        feedback_expiry_days: get(row, "feedback_expiry_days")?,
        created_at: get_timestamp(row, "created_at")?,
    })
}

fn row_to_feedback(row: &PgRow) -> Result<Feedback, DomainError> {
    let kind: String = get(row, "type")?;
    let status: String = get(row, "status")?;
    let resolved_at: Option<chrono::DateTime<chrono::Utc>> = get(row, "resolved_at")?;

    Ok(Feedback {
        id: FeedbackId::new(get(row, "id")?),
        project_id: ProjectId::new(get(row, "project_id")?),
        kind: str_to_type(&kind)?,
        description: get(row, "description")?,
        submitter_email: get(row, "submitter_email")?,
        status: str_to_status(&status)?,
        created_at: get_timestamp(row, "created_at")?,
        resolved_at: resolved_at.map(Timestamp::from_datetime),
    })
}

fn row_to_history(row: &PgRow) -> Result<StatusHistoryEntry, DomainError> {
    let old_status: String = get(row, "old_status")?;
    let new_status: String = get(row, "new_status")?;

    Ok(StatusHistoryEntry {
        id: HistoryEntryId::new(get(row, "id")?),
        feedback_id: FeedbackId::new(get(row, "feedback_id")?),
        old_status: str_to_status(&old_status)?,
        new_status: str_to_status(&new_status)?,
        note: get(row, "note")?,
        changed_at: get_timestamp(row, "changed_at")?,
    })
}
