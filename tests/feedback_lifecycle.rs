//! Integration tests for the feedback lifecycle.
//!
//! These drive the application handlers over the in-memory store with a
//! fixed clock:
//! 1. Submission window boundaries
//! 2. Status workflow and its audit trail
//! 3. Serialization of concurrent status changes
//! 4. Random walks over the transition table

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

use feedback_loop::adapters::auth::MockPasswordHasher;
use feedback_loop::adapters::{FixedClock, InMemoryStore, ScriptedSlugGenerator};
use feedback_loop::application::handlers::{
    CreateProjectCommand, CreateProjectHandler, GetFeedbackHistoryHandler, GetFeedbackHistoryQuery,
    GetPublicProjectHandler, GetPublicProjectQuery, ListProjectFeedbackHandler,
    ListProjectFeedbackQuery, RegisterUserCommand, RegisterUserHandler, SubmitFeedbackCommand,
    SubmitFeedbackHandler, UpdateFeedbackStatusCommand, UpdateFeedbackStatusHandler,
};
use feedback_loop::config::ProjectsConfig;
use feedback_loop::domain::feedback::{Feedback, FeedbackError, FeedbackStatus};
use feedback_loop::domain::foundation::{Timestamp, UserId};
use feedback_loop::domain::project::{Project, ProjectError, PublicSlug};

// =============================================================================
// Test Infrastructure
// =============================================================================

const SLUG: &str = "Fb7Loop0";

fn t0() -> Timestamp {
    Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap())
}

struct World {
    store: InMemoryStore,
    clock: Arc<FixedClock>,
    owner: UserId,
    stranger: UserId,
    project: Project,
}

impl World {
    async fn new(expiry_days: i32) -> Self {
        let store = InMemoryStore::new();
        let clock = Arc::new(FixedClock::at(t0()));

        let register = RegisterUserHandler::new(
            Arc::new(store.clone()),
            Arc::new(MockPasswordHasher),
            clock.clone(),
        );
        let owner = register
            .handle(RegisterUserCommand {
                email: "owner@example.com".to_string(),
                password: "correct horse".to_string(),
            })
            .await
            .unwrap()
            .id;
        let stranger = register
            .handle(RegisterUserCommand {
                email: "stranger@example.com".to_string(),
                password: "battery staple".to_string(),
            })
            .await
            .unwrap()
            .id;

        let project = CreateProjectHandler::new(
            Arc::new(store.clone()),
            Arc::new(ScriptedSlugGenerator::new([PublicSlug::parse(SLUG).unwrap()])),
            clock.clone(),
            ProjectsConfig::default(),
        )
        .handle(CreateProjectCommand {
            owner_id: owner,
            name: "Widget".to_string(),
            description: Some("A widget".to_string()),
            product_url: None,
            feedback_expiry_days: Some(expiry_days),
        })
        .await
        .unwrap();

        Self {
            store,
            clock,
            owner,
            stranger,
            project,
        }
    }

    async fn submit(&self, description: &str) -> Result<Feedback, FeedbackError> {
        SubmitFeedbackHandler::new(Arc::new(self.store.clone()), self.clock.clone())
            .handle(SubmitFeedbackCommand {
                slug: SLUG.to_string(),
                kind: "bug".to_string(),
                description: description.to_string(),
                submitter_email: None,
            })
            .await
    }

    fn status_handler(&self) -> UpdateFeedbackStatusHandler {
        UpdateFeedbackStatusHandler::new(Arc::new(self.store.clone()), self.clock.clone())
    }

    async fn set_status(
        &self,
        feedback: &Feedback,
        status: FeedbackStatus,
        note: Option<&str>,
    ) -> Result<Feedback, FeedbackError> {
        self.status_handler()
            .handle(UpdateFeedbackStatusCommand {
                feedback_id: feedback.id,
                caller_id: self.owner,
                status: status.as_str().to_string(),
                note: note.map(str::to_string),
            })
            .await
    }

    async fn history(&self, feedback: &Feedback) -> Vec<(FeedbackStatus, FeedbackStatus)> {
        GetFeedbackHistoryHandler::new(Arc::new(self.store.clone()))
            .handle(GetFeedbackHistoryQuery {
                feedback_id: feedback.id,
                caller_id: self.owner,
            })
            .await
            .unwrap()
            .into_iter()
            .map(|h| (h.old_status, h.new_status))
            .collect()
    }
}

// =============================================================================
// Submission window
// =============================================================================

#[tokio::test]
async fn submission_just_before_expiry_is_accepted() {
    let world = World::new(3).await;
    world.clock.advance(Duration::days(2) + Duration::hours(23));

    let feedback = world.submit("Crashes on save").await.unwrap();

    assert_eq!(feedback.status, FeedbackStatus::New);
    assert_eq!(world.history(&feedback).await, vec![(FeedbackStatus::New, FeedbackStatus::New)]);
}

#[tokio::test]
async fn submission_just_after_expiry_is_rejected() {
    let world = World::new(3).await;
    world.clock.advance(Duration::days(3) + Duration::minutes(1));

    let result = world.submit("Crashes on save").await;

    assert_eq!(result.unwrap_err(), FeedbackError::Expired);
    assert_eq!(world.store.feedback_count().await, 0);
    assert_eq!(world.store.history_count().await, 0);
}

#[tokio::test]
async fn public_preview_follows_the_same_window() {
    let world = World::new(1).await;
    let preview = GetPublicProjectHandler::new(Arc::new(world.store.clone()), world.clock.clone());

    let project = preview
        .handle(GetPublicProjectQuery { slug: SLUG.to_string() })
        .await
        .unwrap();
    assert_eq!(project, world.project);

    world.clock.advance(Duration::days(1) + Duration::seconds(1));
    let expired = preview
        .handle(GetPublicProjectQuery { slug: SLUG.to_string() })
        .await;
    assert_eq!(expired.unwrap_err(), ProjectError::Expired);

    let unknown = preview
        .handle(GetPublicProjectQuery { slug: "Fb7Loop1".to_string() })
        .await;
    assert!(matches!(unknown, Err(ProjectError::SlugNotFound(_))));
}

#[tokio::test]
async fn empty_description_leaves_no_rows() {
    let world = World::new(3).await;

    let result = world.submit("").await;

    assert!(matches!(result, Err(FeedbackError::ValidationFailed { .. })));
    assert_eq!(world.store.feedback_count().await, 0);
    assert_eq!(world.store.history_count().await, 0);
}

// =============================================================================
// Status workflow
// =============================================================================

#[tokio::test]
async fn resolving_requires_a_note() {
    let world = World::new(3).await;
    let feedback = world.submit("Crashes on save").await.unwrap();
    world.set_status(&feedback, FeedbackStatus::Accepted, None).await.unwrap();

    let missing = world.set_status(&feedback, FeedbackStatus::Resolved, None).await;
    assert!(matches!(
        missing,
        Err(FeedbackError::ValidationFailed { ref field, .. }) if field == "note"
    ));

    let resolved = world
        .set_status(&feedback, FeedbackStatus::Resolved, Some("fixed"))
        .await
        .unwrap();
    assert_eq!(resolved.status, FeedbackStatus::Resolved);
    assert!(resolved.resolved_at.is_some());

    use FeedbackStatus::*;
    assert_eq!(
        world.history(&feedback).await,
        vec![(New, New), (New, Accepted), (Accepted, Resolved)]
    );
}

#[tokio::test]
async fn new_cannot_jump_to_resolved() {
    let world = World::new(3).await;
    let feedback = world.submit("Crashes on save").await.unwrap();

    let result = world.set_status(&feedback, FeedbackStatus::Resolved, Some("x")).await;

    assert_eq!(
        result.unwrap_err(),
        FeedbackError::InvalidTransition {
            from: FeedbackStatus::New,
            to: FeedbackStatus::Resolved,
        }
    );
    assert_eq!(world.store.history_count().await, 1);
}

#[tokio::test]
async fn owner_mismatch_is_not_found_on_reads_and_forbidden_on_writes() {
    let world = World::new(3).await;
    let feedback = world.submit("Crashes on save").await.unwrap();
    let list = ListProjectFeedbackHandler::new(Arc::new(world.store.clone()));

    for _ in 0..3 {
        let result = list
            .handle(ListProjectFeedbackQuery {
                project_id: world.project.id,
                caller_id: world.stranger,
            })
            .await;
        assert_eq!(result.unwrap_err(), FeedbackError::ProjectNotFound);
    }

    let update = world
        .status_handler()
        .handle(UpdateFeedbackStatusCommand {
            feedback_id: feedback.id,
            caller_id: world.stranger,
            status: "ACCEPTED".to_string(),
            note: None,
        })
        .await;
    assert_eq!(update.unwrap_err(), FeedbackError::Forbidden);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_updates_serialize() {
    let world = World::new(3).await;
    let feedback = world.submit("Crashes on save").await.unwrap();

    let accept = world.set_status(&feedback, FeedbackStatus::Accepted, None);
    let reject = world.set_status(&feedback, FeedbackStatus::Rejected, None);
    let (accepted, rejected) = tokio::join!(accept, reject);

    // The loser re-checks under the lock and finds a state it cannot leave.
    let history = world.history(&feedback).await;
    match (accepted, rejected) {
        (Ok(winner), Err(loser)) => {
            assert_eq!(winner.status, FeedbackStatus::Accepted);
            assert_eq!(
                loser,
                FeedbackError::InvalidTransition {
                    from: FeedbackStatus::Accepted,
                    to: FeedbackStatus::Rejected,
                }
            );
            assert_eq!(history[1], (FeedbackStatus::New, FeedbackStatus::Accepted));
        }
        (Err(loser), Ok(winner)) => {
            assert_eq!(winner.status, FeedbackStatus::Rejected);
            assert_eq!(
                loser,
                FeedbackError::InvalidTransition {
                    from: FeedbackStatus::Rejected,
                    to: FeedbackStatus::Accepted,
                }
            );
            assert_eq!(history[1], (FeedbackStatus::New, FeedbackStatus::Rejected));
        }
        other => panic!("expected exactly one success, got {:?}", other),
    }
    assert_eq!(history.len(), 2);
}

// =============================================================================
// Random walks
// =============================================================================

fn allowed(from: FeedbackStatus, to: FeedbackStatus) -> bool {
    use FeedbackStatus::*;
    matches!(
        (from, to),
        (New, Accepted) | (New, Rejected) | (Accepted, Resolved)
    )
}

fn any_status() -> impl Strategy<Value = FeedbackStatus> {
    prop::sample::select(FeedbackStatus::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn random_walk_follows_the_table(targets in prop::collection::vec(any_status(), 1..12)) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let world = World::new(3).await;
            let feedback = world.submit("Crashes on save").await.unwrap();
            let mut current = FeedbackStatus::New;
            let mut expected_rows = 1;

            for target in targets {
                let result = world.set_status(&feedback, target, Some("note")).await;
                if allowed(current, target) {
                    let updated = result.unwrap();
                    assert_eq!(updated.status, target);
                    assert_eq!(updated.resolved_at.is_some(), target.closes_feedback());
                    current = target;
                    expected_rows += 1;
                } else {
                    assert_eq!(
                        result.unwrap_err(),
                        FeedbackError::InvalidTransition { from: current, to: target }
                    );
                }

                let history = world.history(&feedback).await;
                assert_eq!(history.len(), expected_rows);
                assert_eq!(history.last().map(|h| h.1), Some(current));
            }
        });
    }
}
