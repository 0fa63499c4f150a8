//! HTTP routes for owner-side feedback endpoints.

use axum::{
    middleware,
    routing::{get, patch},
    Router,
};

use crate::adapters::http::middleware::{auth_middleware, AuthState};

use super::handlers::{
    get_feedback_history, list_project_feedback, update_feedback_status, FeedbackHandlers,
};

/// Creates the feedback router. Every route requires authentication.
pub fn feedback_routes(handlers: FeedbackHandlers, validator: AuthState) -> Router {
    Router::new()
        .route("/projects/:id/feedback", get(list_project_feedback))
        .route("/feedback/:id/status", patch(update_feedback_status))
        .route("/feedback/:id/history", get(get_feedback_history))
        .layer(middleware::from_fn_with_state(validator, auth_middleware))
        .with_state(handlers)
}
