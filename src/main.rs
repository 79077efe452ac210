//! Car rental HTTP server.

use std::future::Future;
use std::io;
use std::sync::Arc;

use car_rental::adapters::auth::{BcryptPasswordHasher, JwtTokenService};
use car_rental::adapters::http::{build_router, AppServices};
use car_rental::adapters::memory::{InMemoryBookingRepository, InMemoryUserRepository};
use car_rental::adapters::postgres::{
    connect, run_migrations, PostgresBookingRepository, PostgresUserRepository,
};
use car_rental::config::AppConfig;
use sqlx::PgPool;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);

    config.validate()?;
    info!(
        environment = ?config.server.environment,
        backend = ?config.database.backend,
        "Configuration loaded"
    );

    let tokens = Arc::new(JwtTokenService::from_config(&config.auth));
    let hasher = Arc::new(BcryptPasswordHasher::new(config.auth.bcrypt_cost));

    let (services, pool) = if config.database.is_in_memory() {
        warn!("Using in-memory storage; data is lost on restart");
        let services = AppServices {
            bookings: Arc::new(InMemoryBookingRepository::new()),
            users: Arc::new(InMemoryUserRepository::new()),
            hasher,
            token_issuer: tokens.clone(),
            token_validator: tokens,
        };
        (services, None)
    } else {
        info!("Connecting to database...");
        let pool = connect(&config.database).await?;
        if config.database.run_migrations {
            run_migrations(&pool).await?;
        }

        let services = AppServices {
            bookings: Arc::new(PostgresBookingRepository::new(pool.clone())),
            users: Arc::new(PostgresUserRepository::new(pool.clone())),
            hasher,
            token_issuer: tokens.clone(),
            token_validator: tokens,
        };
        (services, Some(pool))
    };

    let app = build_router(services, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(address = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    close_pool(pool).await;
    info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn close_pool(pool: Option<PgPool>) {
    if let Some(pool) = pool {
        pool.close().await;
        info!("Database pool closed");
    }
}

/// Completes when the awaited signal fires. A handler that fails to install parks
/// forever so it cannot be mistaken for a shutdown request.
async fn wait_for<F>(installed: F, name: &str)
where
    F: Future<Output = io::Result<()>>,
{
    if let Err(e) = installed.await {
        error!(error = %e, "Failed to install {} handler", name);
        std::future::pending::<()>().await;
    }
}

async fn shutdown_signal() {
    let ctrl_c = wait_for(signal::ctrl_c(), "Ctrl+C");

    #[cfg(unix)]
    let terminate = wait_for(
        async {
            signal::unix::signal(signal::unix::SignalKind::terminate())?
                .recv()
                .await;
            Ok::<(), io::Error>(())
        },
        "SIGTERM",
    );

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C signal, shutting down gracefully...");
        },
        () = terminate => {
            info!("Received SIGTERM signal, shutting down gracefully...");
        },
    }
}
