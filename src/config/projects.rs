//! Project registry configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::project::{DEFAULT_EXPIRY_DAYS, MAX_EXPIRY_DAYS};

/// Project registry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectsConfig {
    /// Expiry window applied when a create request omits one
    #[serde(default = "default_expiry_days")]
    pub default_expiry_days: i32,

    /// Slug draws per create request before giving up
    #[serde(default = "default_slug_attempts")]
    pub slug_attempts: u32,
}

impl ProjectsConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=MAX_EXPIRY_DAYS).contains(&self.default_expiry_days) {
            return Err(ValidationError::InvalidDefaultExpiry(MAX_EXPIRY_DAYS));
        }
        if self.slug_attempts == 0 {
            return Err(ValidationError::InvalidSlugAttempts);
        }
        Ok(())
    }
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            default_expiry_days: default_expiry_days(),
            slug_attempts: default_slug_attempts(),
        }
    }
}

fn default_expiry_days() -> i32 {
    DEFAULT_EXPIRY_DAYS
}

fn default_slug_attempts() -> u32 {
    64
}
