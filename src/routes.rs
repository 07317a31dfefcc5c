//! Top-level router configuration combining API, redirect, and static routes.
//!
//! # Route Structure
//!
//! - `GET  /`             - Landing page with the shorten form
//! - `GET  /favicon.ico`  - Transparent favicon
//! - `/api/*`             - REST API (shorten, analytics, urls)
//! - `/static/*`          - Static assets
//! - `GET  /{*slug}`      - Short link redirect (wildcard, matched last)
//!
//! The redirect route is a wildcard because slugs may contain `/`. Static
//! prefixes (`/api`, `/static`, `/favicon.ico`) take priority over it, which
//! is also why those names are reserved at slug creation time.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{favicon_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route_service("/", ServeFile::new("static/index.html"))
        .route("/favicon.ico", get(favicon_handler))
        .nest("/api", api::routes::api_routes())
        .nest_service("/static", ServeDir::new("static"))
        .route("/{*slug}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
