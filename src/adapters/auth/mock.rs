//! Test doubles for the identity ports: no key material, no key derivation.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::{PasswordHasher, SessionValidator};

/// Accepts a fixed set of opaque tokens.
#[derive(Debug, Default, Clone)]
pub struct MockSessionValidator {
    tokens: HashMap<String, AuthenticatedUser>,
    /// Returned for every token when set.
    failure: Option<AuthError>,
}

impl MockSessionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.tokens.insert(token.into(), user);
        self
    }

    pub fn with_error(mut self, error: AuthError) -> Self {
        self.failure = Some(error);
        self
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        self.tokens.get(token).cloned().ok_or(AuthError::InvalidToken)
    }
}

/// Reversible "hash" for tests: `plain$<password>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockPasswordHasher;

impl PasswordHasher for MockPasswordHasher {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        Ok(format!("plain${}", password))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        hash.strip_prefix("plain$")
            .map(|stored| stored == password)
            .ok_or_else(|| AuthError::service_unavailable("not a mock hash"))
    }
}
