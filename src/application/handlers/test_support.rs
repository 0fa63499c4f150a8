//! Fixtures shared by handler tests.

use std::sync::Arc;

use chrono::{TimeZone, Utc};

use crate::adapters::clock::FixedClock;
use crate::adapters::memory::InMemoryStore;
use crate::domain::feedback::{Feedback, FeedbackType, NewFeedback, NewStatusHistoryEntry};
use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::project::{Project, ProjectDraft, PublicSlug};
use crate::domain::user::NewUser;
use crate::ports::UnitOfWork;

/// 2024-03-01T12:00:00Z, the instant every fixture is created at.
pub fn t0() -> Timestamp {
    Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap())
}

pub fn fixed_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::at(t0()))
}

pub async fn seed_owner(store: &InMemoryStore, email: &str) -> UserId {
    let mut tx = store.begin().await.unwrap();
    let user = tx
        .insert_user(NewUser {
            email: email.to_string(),
            password_hash: "plain$pw".to_string(),
            created_at: t0(),
        })
        .await
        .unwrap();
    tx.commit().await.unwrap();
    user.id
}

pub async fn seed_project(store: &InMemoryStore, owner: UserId, slug: &str, days: i32) -> Project {
    let draft = ProjectDraft::new("Widget", None, None, days).unwrap();
    let mut tx = store.begin().await.unwrap();
    let project = tx
        .insert_project(draft.with_slug(owner, PublicSlug::parse(slug).unwrap(), t0()))
        .await
        .unwrap();
    tx.commit().await.unwrap();
    project
}

pub async fn seed_feedback(store: &InMemoryStore, project: &Project) -> Feedback {
    let mut tx = store.begin().await.unwrap();
    let feedback = tx
        .insert_feedback(
            NewFeedback::submit(project.id, FeedbackType::Bug, "It crashes", None, t0()).unwrap(),
        )
        .await
        .unwrap();
    tx.append_history(NewStatusHistoryEntry::submitted(feedback.id, t0()))
        .await
        .unwrap();
    tx.commit().await.unwrap();
    feedback
}
