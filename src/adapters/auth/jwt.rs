//! Self-issued HS256 access tokens.
//!
//! The same service signs tokens at login and validates them on every
//! authenticated request, so it implements both `TokenIssuer` and
//! `SessionValidator`.

use std::time::Duration;

use async_trait::async_trait;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::{AccessToken, SessionValidator, TokenIssuer};

/// Claims carried by an access token.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Subject - the user ID
    sub: String,

    /// Issuer
    iss: String,

    /// Expiry timestamp (Unix epoch seconds)
    exp: i64,

    /// Issued at timestamp
    iat: i64,

    /// User's email address
    email: String,
}

/// Signs and validates HS256 JWTs with a shared secret.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    ttl: Duration,
}

impl JwtTokenService {
    pub fn new(secret: &SecretString, issuer: impl Into<String>, ttl: Duration) -> Self {
        let secret = secret.expose_secret().as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            issuer: issuer.into(),
            ttl,
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(&config.jwt_secret, config.issuer.clone(), config.token_ttl())
    }

    fn sign(&self, claims: &Claims) -> Result<String, AuthError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to sign access token: {}", e);
            AuthError::service_unavailable("token signing failed")
        })
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.validate_exp = true;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        validation
    }
}

impl TokenIssuer for JwtTokenService {
    fn issue(&self, user: &AuthenticatedUser) -> Result<AccessToken, AuthError> {
        let now = chrono::Utc::now().timestamp();
        let ttl_secs = self.ttl.as_secs();
        let claims = Claims {
            sub: user.id.to_string(),
            iss: self.issuer.clone(),
            exp: now.saturating_add(i64::try_from(ttl_secs).unwrap_or(i64::MAX)),
            iat: now,
            email: user.email.clone(),
        };
        Ok(AccessToken::bearer(self.sign(&claims)?, ttl_secs))
    }
}

#[async_trait]
impl SessionValidator for JwtTokenService {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation()).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;
            match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token expired");
                    AuthError::TokenExpired
                }
                ErrorKind::InvalidIssuer => {
                    tracing::warn!("Invalid issuer in token");
                    AuthError::InvalidToken
                }
                _ => {
                    tracing::debug!("Token validation failed: {}", e);
                    AuthError::InvalidToken
                }
            }
        })?;
        let claims = data.claims;

        let user_id: UserId = claims.sub.parse().map_err(|_| {
            tracing::warn!("Invalid user ID in token: {}", claims.sub);
            AuthError::InvalidToken
        })?;

        Ok(AuthenticatedUser::new(user_id, claims.email))
    }
}

impl std::fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.issuer)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
