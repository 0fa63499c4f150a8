use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// A setting that parsed but makes no sense.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingRequired(&'static str),

    #[error("{0} is out of range")]
    InvalidTimeout(&'static str),

    #[error("CORS origin {0:?} is not an http(s) URL")]
    InvalidCorsOrigin(String),

    #[error("database.url must use the postgres:// scheme")]
    InvalidDatabaseUrl,

    #[error("pool needs 0 <= min ({min}) <= max ({max}) and max > 0")]
    InvalidPoolSize { min: u32, max: u32 },

    #[error("auth.jwt_secret must be at least {0} bytes in production")]
    JwtSecretTooShort(usize),

    #[error("auth.token_ttl_secs must be between 1 second and 30 days")]
    InvalidTokenTtl,

    #[error("projects.default_expiry_days must be between 1 and {0}")]
    InvalidDefaultExpiry(i32),

    #[error("projects.slug_attempts must be at least 1")]
    InvalidSlugAttempts,
}
