//! Bearer authentication for the owner-side routers.
//!
//! `auth_middleware` is layered only onto routers whose every route needs a
//! caller. It verifies the token through the `SessionValidator` port and
//! stores the resulting `AuthenticatedUser` in the request extensions, where
//! the `RequireAuth` extractor picks it up.
//!
//! A request without an `Authorization: Bearer` header is passed through
//! untouched so that `RequireAuth` produces the single "authentication
//! required" response. A header that is present but fails verification is
//! answered immediately.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::adapters::http::error::error_response;
use crate::domain::foundation::{AuthError, AuthenticatedUser, ErrorCode};
use crate::ports::SessionValidator;

pub type AuthState = Arc<dyn SessionValidator>;

pub async fn auth_middleware(
    State(validator): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = bearer_token(request.headers()) else {
        return next.run(request).await;
    };

    match validator.validate(token).await {
        Ok(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(e) => {
            tracing::debug!(error = %e, "Bearer token rejected");
            reject(e)
        }
    }
}

/// The credential after a case-insensitive `Bearer` scheme, if any.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

fn reject(error: AuthError) -> Response {
    match error {
        AuthError::TokenExpired => error_response(
            StatusCode::UNAUTHORIZED,
            ErrorCode::Unauthorized,
            "Token expired".to_string(),
        ),
        AuthError::InvalidToken => error_response(
            StatusCode::UNAUTHORIZED,
            ErrorCode::Unauthorized,
            "Invalid token".to_string(),
        ),
        AuthError::ServiceUnavailable(cause) => error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::InternalError,
            format!("token verification failed: {}", cause),
        ),
    }
}

/// The verified caller. Rejects with 401 when the middleware stored none.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(RequireAuth)
            .ok_or(AuthRejection::Unauthenticated)
    }
}

#[derive(Debug, Clone)]
pub enum AuthRejection {
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            AuthRejection::Unauthenticated => error_response(
                StatusCode::UNAUTHORIZED,
                ErrorCode::Unauthorized,
                "Authentication required".to_string(),
            ),
        }
    }
}
