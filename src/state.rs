//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{RedirectService, ShortenService, StatsService};
use crate::infrastructure::persistence::SqliteUrlRepository;

/// Application state shared across all request handlers.
///
/// Holds the application services wired over the SQLite repository. Cloning
/// is cheap; everything inside is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService<SqliteUrlRepository>>,
    pub redirect_service: Arc<RedirectService<SqliteUrlRepository>>,
    pub stats_service: Arc<StatsService<SqliteUrlRepository>>,
}

impl AppState {
    pub fn new(
        shorten_service: Arc<ShortenService<SqliteUrlRepository>>,
        redirect_service: Arc<RedirectService<SqliteUrlRepository>>,
        stats_service: Arc<StatsService<SqliteUrlRepository>>,
    ) -> Self {
        Self {
            shorten_service,
            redirect_service,
            stats_service,
        }
    }
}
