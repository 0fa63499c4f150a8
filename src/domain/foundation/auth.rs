//! The authenticated caller, as recovered from a bearer token.

use super::UserId;
use thiserror::Error;

/// Identity attached to a request once its token has been verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Compared against `owner_id` on every owner-scoped operation.
    pub id: UserId,
    pub email: String,
}

impl AuthenticatedUser {
    pub fn new(id: UserId, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Malformed, wrongly signed, or issued by someone else.
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    /// Signing or verification could not run at all.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }
}
