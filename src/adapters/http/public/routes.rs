//! HTTP routes for the unauthenticated submission pages.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_public_project, submit_feedback, PublicHandlers};

/// Creates the public router. No route requires authentication.
pub fn public_routes(handlers: PublicHandlers) -> Router {
    Router::new()
        .route("/public/:slug", get(get_public_project))
        .route("/public/:slug/feedback", post(submit_feedback))
        .with_state(handlers)
}
