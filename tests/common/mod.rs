#![allow(dead_code)]

use axum_test::TestServer;
use chrono::Utc;
use sqlx::SqlitePool;
use std::sync::Arc;

use linksnip::application::services::{RedirectService, ShortenService, SlugPool, StatsService};
use linksnip::infrastructure::cache::{MemoryCache, UrlCache};
use linksnip::infrastructure::persistence::SqliteUrlRepository;
use linksnip::state::AppState;

/// Builds an [`AppState`] over the given pool with a small slug pool and a
/// real in-memory cache.
pub fn create_test_state(pool: SqlitePool) -> AppState {
    let repository = Arc::new(SqliteUrlRepository::new(Arc::new(pool)));
    let cache: Arc<dyn UrlCache> = Arc::new(MemoryCache::new(1000));

    let slug_pool = Arc::new(SlugPool::new(repository.clone(), 32, 8, 10));

    let shorten_service = Arc::new(ShortenService::new(repository.clone(), slug_pool, 10));
    let redirect_service = Arc::new(RedirectService::new(repository.clone(), cache.clone()));
    let stats_service = Arc::new(StatsService::new(repository, cache));

    AppState::new(shorten_service, redirect_service, stats_service)
}

/// Builds a test server with the full route surface: `/api/*` plus the
/// wildcard redirect route.
pub fn make_server(pool: SqlitePool) -> TestServer {
    use axum::Router;
    use axum::routing::get;
    use linksnip::api::handlers::redirect_handler;
    use linksnip::api::routes::api_routes;

    let state = create_test_state(pool);
    let app = Router::new()
        .nest("/api", api_routes())
        .route("/{*slug}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

/// Inserts a URL row directly, bypassing the service layer.
pub async fn create_test_url(pool: &SqlitePool, slug: &str, long_url: &str) {
    sqlx::query("INSERT INTO urls (slug, long_url, clicks, created_at) VALUES (?1, ?2, 0, ?3)")
        .bind(slug)
        .bind(long_url)
        .bind(Utc::now())
        .execute(pool)
        .await
        .unwrap();
}

/// Reads the click count for a slug directly from the store.
pub async fn get_clicks(pool: &SqlitePool, slug: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM urls WHERE slug = ?1")
        .bind(slug)
        .fetch_one(pool)
        .await
        .unwrap()
}
