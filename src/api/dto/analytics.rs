//! DTO for per-slug analytics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ClickStats;

/// Response body for `GET /api/analytics/{slug}`.
#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl From<ClickStats> for AnalyticsResponse {
    fn from(stats: ClickStats) -> Self {
        Self {
            clicks: stats.clicks,
            created_at: stats.created_at,
        }
    }
}
