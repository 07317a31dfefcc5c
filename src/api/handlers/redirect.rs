//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, header},
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::application::services::RedirectOutcome;
use crate::error::AppError;
use crate::state::AppState;

/// 404 page rendered when a slug does not resolve.
const NOT_FOUND_PAGE: &str = r#"<!DOCTYPE html>
<html>
    <head>
        <title>URL Not Found</title>
    </head>
    <body>
        <h1>URL Not Found</h1>
        <p>The shortened URL you're looking for doesn't exist.</p>
        <p><a href="/">Create a new shortened URL</a></p>
    </body>
</html>
"#;

/// Redirects a slug to its destination URL.
///
/// # Endpoint
///
/// `GET /{slug}` (wildcard; slugs may contain `/`)
///
/// # Request Flow
///
/// 1. Axum percent-decodes the path capture
/// 2. Cache-first resolution; a hit still records the click
/// 3. Cache miss reads the store and populates the cache
/// 4. 307 Temporary Redirect with security and no-cache headers,
///    or a 404 HTML page for unknown slugs
///
/// # Errors
///
/// Returns 500 on persistence failure; an unknown slug is a 404 page, not an
/// error.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    match state.redirect_service.resolve_and_count(&slug).await? {
        RedirectOutcome::Found { long_url } => Ok(redirect_response(&long_url)),
        RedirectOutcome::NotFound => {
            Ok((axum::http::StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE)).into_response())
        }
    }
}

/// Builds the 307 response with sniffing, framing, and caching disabled.
fn redirect_response(long_url: &str) -> Response {
    let mut response = Redirect::temporary(long_url).into_response();

    let headers = response.headers_mut();
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::X_XSS_PROTECTION,
        HeaderValue::from_static("1; mode=block"),
    );
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-cache, no-store, must-revalidate"),
    );
    headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(header::EXPIRES, HeaderValue::from_static("0"));

    response
}
