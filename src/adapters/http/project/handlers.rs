//! HTTP handlers for project endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::error_response;
use crate::adapters::http::extract::ApiJson;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::project::{
    CreateProjectCommand, CreateProjectHandler, DeleteProjectCommand, DeleteProjectHandler,
    GetProjectHandler, GetProjectQuery, ListProjectsHandler, ListProjectsQuery,
    UpdateProjectCommand, UpdateProjectHandler,
};
use crate::domain::foundation::{ErrorCode, ProjectId};
use crate::domain::project::{Project, ProjectError};
use crate::ports::Clock;

use super::dto::{CreateProjectRequest, ProjectResponse, UpdateProjectRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ProjectHandlers {
    create_handler: Arc<CreateProjectHandler>,
    list_handler: Arc<ListProjectsHandler>,
    get_handler: Arc<GetProjectHandler>,
    update_handler: Arc<UpdateProjectHandler>,
    delete_handler: Arc<DeleteProjectHandler>,
    clock: Arc<dyn Clock>,
}

impl ProjectHandlers {
    pub fn new(
        create_handler: Arc<CreateProjectHandler>,
        list_handler: Arc<ListProjectsHandler>,
        get_handler: Arc<GetProjectHandler>,
        update_handler: Arc<UpdateProjectHandler>,
        delete_handler: Arc<DeleteProjectHandler>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            create_handler,
            list_handler,
            get_handler,
            update_handler,
            delete_handler,
            clock,
        }
    }

    fn respond(&self, status: StatusCode, project: Project) -> Response {
        (status, Json(ProjectResponse::new(project, self.clock.now()))).into_response()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/projects - Create a project with a fresh public slug
pub async fn create_project(
    State(handlers): State<ProjectHandlers>,
    RequireAuth(user): RequireAuth,
    ApiJson(req): ApiJson<CreateProjectRequest>,
) -> Response {
    let cmd = CreateProjectCommand {
        owner_id: user.id,
        name: req.name,
        description: req.description,
        product_url: req.product_url,
        feedback_expiry_days: req.feedback_expiry_days,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(project) => handlers.respond(StatusCode::CREATED, project),
        Err(e) => handle_project_error(e),
    }
}

/// GET /api/projects - List the caller's projects
pub async fn list_projects(
    State(handlers): State<ProjectHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = ListProjectsQuery { owner_id: user.id };

    match handlers.list_handler.handle(query).await {
        Ok(projects) => {
            let now = handlers.clock.now();
            let response: Vec<ProjectResponse> = projects
                .into_iter()
                .map(|p| ProjectResponse::new(p, now))
                .collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_project_error(e),
    }
}

/// GET /api/projects/:id - Get one owned project
pub async fn get_project(
    State(handlers): State<ProjectHandlers>,
    RequireAuth(user): RequireAuth,
    Path(project_id): Path<String>,
) -> Response {
    let Ok(project_id) = project_id.parse::<ProjectId>() else {
        return project_not_found();
    };

    let query = GetProjectQuery {
        project_id,
        owner_id: user.id,
    };

    match handlers.get_handler.handle(query).await {
        Ok(project) => handlers.respond(StatusCode::OK, project),
        Err(e) => handle_project_error(e),
    }
}

/// PUT|PATCH /api/projects/:id - Partially update an owned project
pub async fn update_project(
    State(handlers): State<ProjectHandlers>,
    RequireAuth(user): RequireAuth,
    Path(project_id): Path<String>,
    ApiJson(req): ApiJson<UpdateProjectRequest>,
) -> Response {
    let Ok(project_id) = project_id.parse::<ProjectId>() else {
        return project_not_found();
    };

    let cmd = UpdateProjectCommand {
        project_id,
        owner_id: user.id,
        patch: req.into(),
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(project) => handlers.respond(StatusCode::OK, project),
        Err(e) => handle_project_error(e),
    }
}

/// DELETE /api/projects/:id - Delete an owned project and its feedback
pub async fn delete_project(
    State(handlers): State<ProjectHandlers>,
    RequireAuth(user): RequireAuth,
    Path(project_id): Path<String>,
) -> Response {
    let Ok(project_id) = project_id.parse::<ProjectId>() else {
        return project_not_found();
    };

    let cmd = DeleteProjectCommand {
        project_id,
        owner_id: user.id,
    };

    match handlers.delete_handler.handle(cmd).await {
        Ok(project) => handlers.respond(StatusCode::OK, project),
        Err(e) => handle_project_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn project_not_found() -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        ErrorCode::ProjectNotFound,
        "Project not found".to_string(),
    )
}

pub(crate) fn handle_project_error(error: ProjectError) -> Response {
    let status = match &error {
        ProjectError::NotFound(_) | ProjectError::SlugNotFound(_) => StatusCode::NOT_FOUND,
        ProjectError::Expired => StatusCode::GONE,
        ProjectError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
        ProjectError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error_response(status, error.code(), error.message())
}
