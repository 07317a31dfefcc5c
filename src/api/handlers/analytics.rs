//! Handler for per-slug analytics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::analytics::AnalyticsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the click count and creation time for a slug.
///
/// # Endpoint
///
/// `GET /api/analytics/{slug}` (wildcard; slugs may contain `/`)
///
/// # Errors
///
/// Returns 404 if the slug is unknown.
pub async fn analytics_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let stats = state.stats_service.analytics(&slug).await?;

    Ok(Json(stats.into()))
}
