//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Shortest HS256 secret accepted in production.
pub const MIN_PRODUCTION_SECRET_LEN: usize = 32;

const MAX_TOKEN_TTL_SECS: u64 = 30 * 24 * 3600;

/// Authentication configuration (self-issued HS256 JWTs)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Shared secret used to sign and verify access tokens
    pub jwt_secret: SecretString,

    /// Value of the `iss` claim
    #[serde(default = "default_issuer")]
    pub issuer: String,

    /// Access token lifetime in seconds
    #[serde(default = "default_token_ttl")]
    pub token_ttl_secs: u64,
}

impl AuthConfig {
    /// Get access token lifetime as Duration
    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_secs)
    }

    /// Validate authentication configuration
    ///
    /// A secret is always required; production additionally requires one of
    /// at least `MIN_PRODUCTION_SECRET_LEN` bytes.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let secret = self.jwt_secret.expose_secret();
        if secret.is_empty() {
            return Err(ValidationError::MissingRequired("auth.jwt_secret"));
        }
        if *environment == Environment::Production && secret.len() < MIN_PRODUCTION_SECRET_LEN {
            return Err(ValidationError::JwtSecretTooShort(MIN_PRODUCTION_SECRET_LEN));
        }
        if self.issuer.is_empty() {
            return Err(ValidationError::MissingRequired("auth.issuer"));
        }
        if self.token_ttl_secs == 0 || self.token_ttl_secs > MAX_TOKEN_TTL_SECS {
            return Err(ValidationError::InvalidTokenTtl);
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: SecretString::new(String::new()),
            issuer: default_issuer(),
            token_ttl_secs: default_token_ttl(),
        }
    }
}

fn default_issuer() -> String {
    "feedback-loop".to_string()
}

fn default_token_ttl() -> u64 {
    3600
}
