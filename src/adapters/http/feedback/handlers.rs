//! HTTP handlers for owner-side feedback endpoints.

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
use crate::application::handlers::feedback::{
    GetFeedbackHistoryHandler, GetFeedbackHistoryQuery, ListProjectFeedbackHandler,
    ListProjectFeedbackQuery, UpdateFeedbackStatusCommand, UpdateFeedbackStatusHandler,
};
use crate::domain::feedback::FeedbackError;
use crate::domain::foundation::{FeedbackId, ProjectId};

use super::dto::{FeedbackResponse, HistoryEntryResponse, UpdateStatusRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct FeedbackHandlers {
    list_handler: Arc<ListProjectFeedbackHandler>,
    update_status_handler: Arc<UpdateFeedbackStatusHandler>,
    history_handler: Arc<GetFeedbackHistoryHandler>,
}

impl FeedbackHandlers {
    pub fn new(
        list_handler: Arc<ListProjectFeedbackHandler>,
        update_status_handler: Arc<UpdateFeedbackStatusHandler>,
        history_handler: Arc<GetFeedbackHistoryHandler>,
    ) -> Self {
        Self {
            list_handler,
            update_status_handler,
            history_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/projects/:id/feedback - All feedback of an owned project
pub async fn list_project_feedback(
    State(handlers): State<FeedbackHandlers>,
    RequireAuth(user): RequireAuth,
    Path(project_id): Path<String>,
) -> Response {
    let Ok(project_id) = project_id.parse::<ProjectId>() else {
        return handle_feedback_error(FeedbackError::ProjectNotFound);
    };

    let query = ListProjectFeedbackQuery {
        project_id,
        caller_id: user.id,
    };

    match handlers.list_handler.handle(query).await {
        Ok(items) => {
            let response: Vec<FeedbackResponse> = items.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_feedback_error(e),
    }
}

/// PATCH /api/feedback/:id/status - Move feedback along the status workflow
pub async fn update_feedback_status(
    State(handlers): State<FeedbackHandlers>,
    RequireAuth(user): RequireAuth,
    Path(feedback_id): Path<String>,
    ApiJson(req): ApiJson<UpdateStatusRequest>,
) -> Response {
    let Ok(feedback_id) = feedback_id.parse::<FeedbackId>() else {
        return feedback_not_found();
    };

    let cmd = UpdateFeedbackStatusCommand {
        feedback_id,
        caller_id: user.id,
        status: req.status,
        note: req.note,
    };

    match handlers.update_status_handler.handle(cmd).await {
        Ok(feedback) => (StatusCode::OK, Json(FeedbackResponse::from(feedback))).into_response(),
        Err(e) => handle_feedback_error(e),
    }
}

/// GET /api/feedback/:id/history - Audit trail of a feedback item
pub async fn get_feedback_history(
    State(handlers): State<FeedbackHandlers>,
    RequireAuth(user): RequireAuth,
    Path(feedback_id): Path<String>,
) -> Response {
    let Ok(feedback_id) = feedback_id.parse::<FeedbackId>() else {
        return feedback_not_found();
    };

    let query = GetFeedbackHistoryQuery {
        feedback_id,
        caller_id: user.id,
    };

    match handlers.history_handler.handle(query).await {
        Ok(entries) => {
            let response: Vec<HistoryEntryResponse> =
                entries.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_feedback_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn feedback_not_found() -> Response {
    handle_feedback_error(FeedbackError::NotFound(FeedbackId::new(0)))
}

pub(crate) fn handle_feedback_error(error: FeedbackError) -> Response {
    let status = match &error {
        FeedbackError::NotFound(_) | FeedbackError::ProjectNotFound => StatusCode::NOT_FOUND,
        FeedbackError::Forbidden => StatusCode::FORBIDDEN,
        FeedbackError::Expired => StatusCode::GONE,
        FeedbackError::InvalidTransition { .. } | FeedbackError::ValidationFailed { .. } => {
            StatusCode::BAD_REQUEST
        }
        FeedbackError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error_response(status, error.code(), error.message())
}
