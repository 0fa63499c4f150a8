//! Access token issuing port.

use serde::Serialize;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// A signed bearer token handed to a client after login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: &'static str,
    /// Lifetime in seconds.
    pub expires_in: u64,
}

impl AccessToken {
    pub fn bearer(access_token: impl Into<String>, expires_in: u64) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: "Bearer",
            expires_in,
        }
    }
}

/// Issues access tokens that the matching `SessionValidator` accepts.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user: &AuthenticatedUser) -> Result<AccessToken, AuthError>;
}
