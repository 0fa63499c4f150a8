//! HTTP handlers for account endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::error_response;
use crate::adapters::http::extract::ApiJson;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::auth::{
    GetCurrentUserHandler, GetCurrentUserQuery, LoginCommand, LoginHandler, RegisterUserCommand,
    RegisterUserHandler,
};
use crate::domain::user::AccountError;

use super::dto::{CredentialsRequest, MeResponse, RegisteredResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AuthHandlers {
    register_handler: Arc<RegisterUserHandler>,
    login_handler: Arc<LoginHandler>,
    me_handler: Arc<GetCurrentUserHandler>,
}

impl AuthHandlers {
    pub fn new(
        register_handler: Arc<RegisterUserHandler>,
        login_handler: Arc<LoginHandler>,
        me_handler: Arc<GetCurrentUserHandler>,
    ) -> Self {
        Self {
            register_handler,
            login_handler,
            me_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/auth/register - Create an account
pub async fn register(
    State(handlers): State<AuthHandlers>,
    ApiJson(req): ApiJson<CredentialsRequest>,
) -> Response {
    let cmd = RegisterUserCommand {
        email: req.email,
        password: req.password,
    };

    match handlers.register_handler.handle(cmd).await {
        Ok(user) => (StatusCode::CREATED, Json(RegisteredResponse::from(user))).into_response(),
        Err(e) => handle_account_error(e),
    }
}

/// POST /api/auth/login - Exchange credentials for an access token
pub async fn login(
    State(handlers): State<AuthHandlers>,
    ApiJson(req): ApiJson<CredentialsRequest>,
) -> Response {
    let cmd = LoginCommand {
        email: req.email,
        password: req.password,
    };

    match handlers.login_handler.handle(cmd).await {
        Ok(result) => (StatusCode::OK, Json(result.token)).into_response(),
        Err(e) => handle_account_error(e),
    }
}

/// GET /api/auth/me - The caller's account
pub async fn me(
    State(handlers): State<AuthHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = GetCurrentUserQuery { user_id: user.id };

    match handlers.me_handler.handle(query).await {
        Ok(user) => (StatusCode::OK, Json(MeResponse::from(user))).into_response(),
        Err(e) => handle_account_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_account_error(error: AccountError) -> Response {
    let status = match &error {
        AccountError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
        AccountError::EmailTaken => StatusCode::CONFLICT,
        AccountError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        AccountError::UserNotFound(_) => StatusCode::NOT_FOUND,
        AccountError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error_response(status, error.code(), error.message())
}
