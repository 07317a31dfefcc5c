//! API route configuration.

use crate::api::handlers::{
    analytics_handler, delete_url_handler, list_urls_handler, shorten_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All JSON API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST   /shorten`            - Create a shortened URL
/// - `GET    /analytics/{*slug}`  - Click statistics for a slug
/// - `GET    /urls`               - List all shortened URLs
/// - `DELETE /urls/{*slug}`       - Delete a shortened URL
///
/// The slug captures are wildcards because slugs may contain `/`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/analytics/{*slug}", get(analytics_handler))
        .route("/urls", get(list_urls_handler))
        .route("/urls/{*slug}", delete(delete_url_handler))
}
