//! Handlers for URL listing and deletion.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::shorten::UrlResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all shortened URLs, newest first.
///
/// # Endpoint
///
/// `GET /api/urls`
pub async fn list_urls_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UrlResponse>>, AppError> {
    let records = state.stats_service.list_urls().await?;

    Ok(Json(records.into_iter().map(Into::into).collect()))
}

/// Deletes a shortened URL.
///
/// # Endpoint
///
/// `DELETE /api/urls/{slug}` (wildcard; slugs may contain `/`)
///
/// # Behavior
///
/// The record is removed and its slug becomes immediately available for
/// reuse. The redirect cache entry is invalidated as a side effect.
///
/// # Errors
///
/// Returns 404 if the slug is unknown.
pub async fn delete_url_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.stats_service.delete_url(&slug).await?;

    Ok(StatusCode::NO_CONTENT)
}
