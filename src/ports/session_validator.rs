//! Bearer token verification.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Turns the raw bearer token into the caller's identity.
///
/// Implementations report a bad signature, wrong issuer or garbage as
/// `InvalidToken`, a past `exp` as `TokenExpired`, and only use
/// `ServiceUnavailable` when verification itself could not run.
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// `token` is the value after the `Bearer ` prefix.
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
