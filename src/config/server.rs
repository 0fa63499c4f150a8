//! HTTP listener settings.

use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

use super::error::ValidationError;

/// Deployment flavour; production switches on JSON logs and strict CORS.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,

    #[serde(default)]
    pub environment: Environment,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Browser origins allowed to call the API.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            environment: Environment::default(),
            log_filter: default_log_filter(),
            request_timeout_secs: default_request_timeout_secs(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=300).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout("server.request_timeout_secs"));
        }
        if let Some(origin) = self.cors_origins.iter().find(|o| !o.starts_with("http")) {
            return Err(ValidationError::InvalidCorsOrigin(origin.clone()));
        }
        Ok(())
    }
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

fn default_log_filter() -> String {
    "info,feedback_loop=debug,sqlx=warn,tower_http=debug".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}
