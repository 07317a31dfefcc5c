//! Short URL entity representing a slug-to-destination mapping.

use chrono::{DateTime, Utc};

/// A persisted shortened URL record.
///
/// `id` is a store-assigned surrogate key, monotonically increasing and never
/// reused. `slug` is globally unique. `clicks` only ever grows, and
/// `created_at` never changes after insert.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortUrl {
    pub id: i64,
    pub slug: String,
    pub long_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl ShortUrl {
    /// Creates a new ShortUrl instance.
    pub fn new(
        id: i64,
        slug: String,
        long_url: String,
        clicks: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            slug,
            long_url,
            clicks,
            created_at,
        }
    }
}

/// Input data for creating a new record.
///
/// `created_at` is captured by the service so the inserted row and the
/// response reflect the same instant.
#[derive(Debug, Clone)]
pub struct NewShortUrl {
    pub slug: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

/// Per-slug analytics snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickStats {
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}
