//! HTTP handlers for the unauthenticated submission pages.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::extract::ApiJson;
use crate::adapters::http::feedback::{handle_feedback_error, SubmitFeedbackRequest};
use crate::adapters::http::project::handle_project_error;
use crate::application::handlers::feedback::{SubmitFeedbackCommand, SubmitFeedbackHandler};
use crate::application::handlers::project::{GetPublicProjectHandler, GetPublicProjectQuery};

use super::dto::{PublicProjectResponse, SubmittedResponse};

#[derive(Clone)]
pub struct PublicHandlers {
    preview_handler: Arc<GetPublicProjectHandler>,
    submit_handler: Arc<SubmitFeedbackHandler>,
}

impl PublicHandlers {
    pub fn new(
        preview_handler: Arc<GetPublicProjectHandler>,
        submit_handler: Arc<SubmitFeedbackHandler>,
    ) -> Self {
        Self {
            preview_handler,
            submit_handler,
        }
    }
}

/// GET /api/public/:slug - Project preview while the window is open
pub async fn get_public_project(
    State(handlers): State<PublicHandlers>,
    Path(slug): Path<String>,
) -> Response {
    match handlers
        .preview_handler
        .handle(GetPublicProjectQuery { slug })
        .await
    {
        Ok(project) => {
            (StatusCode::OK, Json(PublicProjectResponse::from(project))).into_response()
        }
        Err(e) => handle_project_error(e),
    }
}

/// POST /api/public/:slug/feedback - Anonymous submission
pub async fn submit_feedback(
    State(handlers): State<PublicHandlers>,
    Path(slug): Path<String>,
    ApiJson(req): ApiJson<SubmitFeedbackRequest>,
) -> Response {
    let cmd = SubmitFeedbackCommand {
        slug,
        kind: req.kind,
        description: req.description,
        submitter_email: req.submitter_email,
    };

    match handlers.submit_handler.handle(cmd).await {
        Ok(feedback) => {
            let response = SubmittedResponse {
                message: "Feedback submitted successfully".to_string(),
                feedback_id: feedback.id.as_i64(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_feedback_error(e),
    }
}
