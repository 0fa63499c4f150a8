//! Feedback Loop server binary.

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use feedback_loop::adapters::auth::{Argon2PasswordHasher, JwtTokenService};
use feedback_loop::adapters::http::{app_router, Services};
use feedback_loop::adapters::{
    postgres, InMemoryStore, PgUnitOfWork, RandomSlugGenerator, SystemClock,
};
use feedback_loop::config::AppConfig;
use feedback_loop::ports::UnitOfWork;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let uow: Arc<dyn UnitOfWork> = if config.database.is_memory() {
        tracing::warn!("Using the in-memory store; data is lost on shutdown");
        Arc::new(InMemoryStore::new())
    } else {
        info!("Connecting to PostgreSQL...");
        let pool = postgres::connect(&config.database).await?;
        Arc::new(PgUnitOfWork::new(pool))
    };

    let jwt = Arc::new(JwtTokenService::from_config(&config.auth));
    let services = Services {
        uow,
        hasher: Arc::new(Argon2PasswordHasher::new()),
        tokens: jwt.clone(),
        sessions: jwt,
        clock: Arc::new(SystemClock),
        slugs: Arc::new(RandomSlugGenerator),
        projects: config.projects.clone(),
    };

    let app = app_router(services, &config.server);

    let address = config.server.bind;
    let listener = TcpListener::bind(address).await?;
    info!(%address, environment = ?config.server.environment, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_filter));

    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().compact().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
