//! HTTP routes for project endpoints.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::adapters::http::middleware::{auth_middleware, AuthState};

use super::handlers::{
    create_project, delete_project, get_project, list_projects, update_project, ProjectHandlers,
};

/// Creates the project router. Every route requires authentication.
pub fn project_routes(handlers: ProjectHandlers, validator: AuthState) -> Router {
    Router::new()
        .route("/projects", post(create_project).get(list_projects))
        .route(
            "/projects/:id",
            get(get_project)
                .put(update_project)
                .patch(update_project)
                .delete(delete_project),
        )
        .layer(middleware::from_fn_with_state(validator, auth_middleware))
        .with_state(handlers)
}
