//! Application router: every HTTP adapter mounted under `/api`.

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use http::{header, HeaderValue, Method};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::application::handlers::{
    CreateProjectHandler, DeleteProjectHandler, GetCurrentUserHandler, GetFeedbackHistoryHandler,
    GetProjectHandler, GetPublicProjectHandler, ListProjectFeedbackHandler, ListProjectsHandler,
    LoginHandler, RegisterUserHandler, SubmitFeedbackHandler, UpdateFeedbackStatusHandler,
    UpdateProjectHandler,
};
use crate::config::{ProjectsConfig, ServerConfig};
use crate::ports::{
    Clock, PasswordHasher, SessionValidator, SlugGenerator, TokenIssuer, UnitOfWork,
};

use super::auth::{auth_routes, AuthHandlers};
use super::feedback::{feedback_routes, FeedbackHandlers};
use super::project::{project_routes, ProjectHandlers};
use super::public::{public_routes, PublicHandlers};

/// The ports every handler is built from.
#[derive(Clone)]
pub struct Services {
    pub uow: Arc<dyn UnitOfWork>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub tokens: Arc<dyn TokenIssuer>,
    pub sessions: Arc<dyn SessionValidator>,
    pub clock: Arc<dyn Clock>,
    pub slugs: Arc<dyn SlugGenerator>,
    pub projects: ProjectsConfig,
}

/// Routes under `/api` plus `/api/health`, without transport layers.
pub fn api_router(services: Services) -> Router {
    let Services {
        uow,
        hasher,
        tokens,
        sessions,
        clock,
        slugs,
        projects,
    } = services;

    let auth = AuthHandlers::new(
        Arc::new(RegisterUserHandler::new(uow.clone(), hasher.clone(), clock.clone())),
        Arc::new(LoginHandler::new(uow.clone(), hasher, tokens)),
        Arc::new(GetCurrentUserHandler::new(uow.clone())),
    );

    let project = ProjectHandlers::new(
        Arc::new(CreateProjectHandler::new(
            uow.clone(),
            slugs,
            clock.clone(),
            projects,
        )),
        Arc::new(ListProjectsHandler::new(uow.clone())),
        Arc::new(GetProjectHandler::new(uow.clone())),
        Arc::new(UpdateProjectHandler::new(uow.clone())),
        Arc::new(DeleteProjectHandler::new(uow.clone())),
        clock.clone(),
    );

    let feedback = FeedbackHandlers::new(
        Arc::new(ListProjectFeedbackHandler::new(uow.clone())),
        Arc::new(UpdateFeedbackStatusHandler::new(uow.clone(), clock.clone())),
        Arc::new(GetFeedbackHistoryHandler::new(uow.clone())),
    );

    let public = PublicHandlers::new(
        Arc::new(GetPublicProjectHandler::new(uow.clone(), clock.clone())),
        Arc::new(SubmitFeedbackHandler::new(uow, clock)),
    );

    let api = Router::new()
        .route("/health", get(health))
        .merge(auth_routes(auth, sessions.clone()))
        .merge(project_routes(project, sessions.clone()))
        .merge(feedback_routes(feedback, sessions))
        .merge(public_routes(public));

    Router::new().nest("/api", api)
}

/// The full application: API routes wrapped in CORS, timeout and tracing.
pub fn app_router(services: Services, server: &ServerConfig) -> Router {
    api_router(services)
        .layer(cors_layer(server))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Configured origins when given, permissive in development, same-origin otherwise.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    if origins.is_empty() {
        if server.is_production() {
            return CorsLayer::new();
        }
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}
