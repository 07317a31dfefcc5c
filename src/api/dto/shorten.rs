//! DTOs for URL creation and listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortUrl;

/// Request body for `POST /api/shorten`.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The destination URL to shorten.
    #[validate(url(message = "must be a valid URL"), length(max = 2048))]
    pub long_url: String,

    /// Optional custom slug. Trimmed, lowercased, and charset-checked by the
    /// shortening service, so no validation happens at the DTO level.
    pub custom_slug: Option<String>,
}

/// JSON representation of a record.
///
/// `short_url` carries the slug itself; clients compose the full link from
/// their own host.
#[derive(Debug, Serialize)]
pub struct UrlResponse {
    pub short_url: String,
    pub long_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl From<ShortUrl> for UrlResponse {
    fn from(record: ShortUrl) -> Self {
        Self {
            short_url: record.slug,
            long_url: record.long_url,
            clicks: record.clicks,
            created_at: record.created_at,
        }
    }
}
