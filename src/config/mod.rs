//! Typed settings read from the environment.
//!
//! `AppConfig::load` reads an optional `.env` file, then every variable
//! prefixed with `FEEDBACK_LOOP__`. Double underscores descend into sections:
//!
//! ```text
//! FEEDBACK_LOOP__SERVER__BIND=127.0.0.1:3000
//! FEEDBACK_LOOP__SERVER__CORS_ORIGINS=https://a.example,https://b.example
//! FEEDBACK_LOOP__DATABASE__BACKEND=memory
//! FEEDBACK_LOOP__DATABASE__POOL__MAX_CONNECTIONS=20
//! FEEDBACK_LOOP__AUTH__JWT_SECRET=...
//! ```

mod auth;
mod database;
mod error;
mod projects;
mod server;

pub use auth::{AuthConfig, MIN_PRODUCTION_SECRET_LEN};
pub use database::{DatabaseConfig, PoolConfig, StorageBackend};
pub use error::{ConfigError, ValidationError};
pub use projects::ProjectsConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

const ENV_PREFIX: &str = "FEEDBACK_LOOP";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    /// No default: a signing secret must always be supplied.
    pub auth: AuthConfig,
    #[serde(default)]
    pub projects: ProjectsConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let source = config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("server.cors_origins");

        Ok(config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?)
    }

    /// Cross-field checks that deserialization cannot express.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate(&self.server.environment)?;
        self.projects.validate()
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
