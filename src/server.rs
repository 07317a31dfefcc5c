//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, cache setup, slug pool priming, and Axum
//! server lifecycle.

use crate::application::services::{RedirectService, ShortenService, SlugPool, StatsService};
use crate::config::Config;
use crate::infrastructure::cache::{MemoryCache, NullCache, UrlCache};
use crate::infrastructure::persistence::SqliteUrlRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool (creating the database file if missing)
/// - Migrations
/// - Redirect cache (in-memory FIFO, or a no-op cache when disabled)
/// - Slug pool, primed before the listener starts
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if the database cannot be opened, migrations fail, or
/// the listener cannot bind.
pub async fn run(config: Config) -> Result<()> {
    let connect_options = SqliteConnectOptions::from_str(&config.database_url)
        .context("invalid DATABASE_URL")?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect_with(connect_options)
        .await
        .context("failed to open database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("failed to run migrations")?;

    let cache: Arc<dyn UrlCache> = if config.is_cache_enabled() {
        tracing::info!(capacity = config.cache_capacity, "Redirect cache enabled");
        Arc::new(MemoryCache::new(config.cache_capacity))
    } else {
        tracing::info!("Redirect cache disabled");
        Arc::new(NullCache::new())
    };

    let repository = Arc::new(SqliteUrlRepository::new(Arc::new(pool)));

    let slug_pool = Arc::new(SlugPool::new(
        repository.clone(),
        config.slug_pool_size,
        config.slug_length,
        config.max_generation_attempts,
    ));

    // Prime the pool so early requests don't all pay the generation cost.
    // A failure here is tolerable; claim() falls back to inline generation.
    if let Err(e) = slug_pool.refill().await {
        tracing::warn!("Initial slug pool refill failed: {e}");
    } else {
        tracing::info!(size = slug_pool.len().await, "Slug pool primed");
    }

    let shorten_service = Arc::new(ShortenService::new(
        repository.clone(),
        slug_pool,
        config.max_generation_attempts,
    ));
    let redirect_service = Arc::new(RedirectService::new(repository.clone(), cache.clone()));
    let stats_service = Arc::new(StatsService::new(repository, cache));

    let state = AppState::new(shorten_service, redirect_service, stats_service);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when the process receives Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .unwrap_or_else(|e| tracing::error!("Failed to install Ctrl-C handler: {e}"));
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
