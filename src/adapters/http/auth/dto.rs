//! HTTP DTOs for account endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::extract::de;
use crate::domain::user::User;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /auth/register` and `POST /auth/login`.
///
/// Missing, `null` or non-string fields deserialize as empty so the handlers
/// report them as validation errors instead of a JSON rejection.
#[derive(Clone, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default, deserialize_with = "de::text_or_blank")]
    pub email: String,
    #[serde(default, deserialize_with = "de::text_or_blank")]
    pub password: String,
}

impl std::fmt::Debug for CredentialsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for a successful registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredResponse {
    pub id: i64,
    pub email: String,
}

impl From<User> for RegisteredResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.as_i64(),
            email: user.email,
        }
    }
}

/// The caller's own account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub id: i64,
    pub email: String,
    pub created_at: String,
}

impl From<User> for MeResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.as_i64(),
            email: user.email,
            created_at: user.created_at.to_rfc3339(),
        }
    }
}
