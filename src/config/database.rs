//! Storage backend selection and PostgreSQL pool settings.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Where projects and feedback are kept.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Postgres,
    /// Process-local tables; everything is lost on restart.
    Memory,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// `postgres://` URL. May carry credentials, so it is never logged.
    #[serde(default)]
    pub url: Option<SecretString>,

    #[serde(default)]
    pub pool: PoolConfig,

    /// Apply `migrations/` before serving.
    #[serde(default)]
    pub run_migrations: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PoolConfig {
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default)]
    pub min_connections: u32,
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
    /// Zero keeps idle connections open indefinitely.
    #[serde(default = "default_idle_timeout_secs")]
    pub idle_timeout_secs: u64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: default_max_connections(),
            min_connections: 0,
            acquire_timeout_secs: default_acquire_timeout_secs(),
            idle_timeout_secs: default_idle_timeout_secs(),
        }
    }
}

impl PoolConfig {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    pub fn idle_timeout(&self) -> Option<Duration> {
        (self.idle_timeout_secs > 0).then(|| Duration::from_secs(self.idle_timeout_secs))
    }
}

impl DatabaseConfig {
    pub fn is_memory(&self) -> bool {
        self.backend == StorageBackend::Memory
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_ref().map(|url| url.expose_secret().as_str())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.is_memory() {
            return Ok(());
        }
        let url = self
            .url()
            .filter(|url| !url.is_empty())
            .ok_or(ValidationError::MissingRequired("database.url"))?;
        if !(url.starts_with("postgres://") || url.starts_with("postgresql://")) {
            return Err(ValidationError::InvalidDatabaseUrl);
        }
        let pool = &self.pool;
        if pool.max_connections == 0 || pool.min_connections > pool.max_connections {
            return Err(ValidationError::InvalidPoolSize {
                min: pool.min_connections,
                max: pool.max_connections,
            });
        }
        if pool.acquire_timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout("database.pool.acquire_timeout_secs"));
        }
        Ok(())
    }
}

fn default_max_connections() -> u32 {
    10
}

fn default_acquire_timeout_secs() -> u64 {
    5
}

fn default_idle_timeout_secs() -> u64 {
    300
}
