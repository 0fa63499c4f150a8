//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PgUnitOfWork` - Opens transactions that implement every repository
//! - `connect` - Pool construction and schema migration

mod unit_of_work;

pub use unit_of_work::{PgTransaction, PgUnitOfWork};

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;

/// Opens the connection pool, applying pending migrations when configured to.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let url = config
        .url()
        .ok_or_else(|| sqlx::Error::Configuration("database.url is not set".into()))?;

    let pool = PgPoolOptions::new()
        .max_connections(config.pool.max_connections)
        .min_connections(config.pool.min_connections)
        .acquire_timeout(config.pool.acquire_timeout())
        .idle_timeout(config.pool.idle_timeout())
        .connect(url)
        .await?;

    if config.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    Ok(pool)
}
