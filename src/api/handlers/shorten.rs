//! Handler for URL shortening.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, UrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "long_url": "https://example.com/very/long/url",
///   "custom_slug": "my/custom/slug"   // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_url": "my/custom/slug",
///   "long_url": "https://example.com/very/long/url",
///   "clicks": 0,
///   "created_at": "2026-03-20T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// - 400 - malformed URL or reserved/invalid custom slug
/// - 409 - custom slug already taken
/// - 500 - slug generation exhausted or store failure
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<UrlResponse>, AppError> {
    payload.validate()?;

    let record = state
        .shorten_service
        .create_short_url(payload.long_url, payload.custom_slug)
        .await?;

    Ok(Json(record.into()))
}
