//! SQLite implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{ClickStats, NewShortUrl, ShortUrl};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Row shape shared by the read queries.
#[derive(sqlx::FromRow)]
struct UrlRow {
    id: i64,
    slug: String,
    long_url: String,
    clicks: i64,
    created_at: DateTime<Utc>,
}

impl From<UrlRow> for ShortUrl {
    fn from(row: UrlRow) -> Self {
        ShortUrl::new(row.id, row.slug, row.long_url, row.clicks, row.created_at)
    }
}

/// SQLite repository for URL storage and retrieval.
///
/// Every method issues exactly one statement; the store's unique constraint
/// on `slug` surfaces concurrent claims as [`AppError::SlugTaken`] via the
/// `From<sqlx::Error>` mapping.
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn insert(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let row: UrlRow = sqlx::query_as(
            r#"
            INSERT INTO urls (slug, long_url, clicks, created_at)
            VALUES (?1, ?2, 0, ?3)
            RETURNING id, slug, long_url, clicks, created_at
            "#,
        )
        .bind(&new_url.slug)
        .bind(&new_url.long_url)
        .bind(new_url.created_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool, AppError> {
        let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM urls WHERE slug = ?1 LIMIT 1")
            .bind(slug)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(found.is_some())
    }

    async fn find_long_url(&self, slug: &str) -> Result<Option<String>, AppError> {
        let long_url: Option<String> =
            sqlx::query_scalar("SELECT long_url FROM urls WHERE slug = ?1")
                .bind(slug)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(long_url)
    }

    async fn increment_clicks(&self, slug: &str) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE urls SET clicks = clicks + 1 WHERE slug = ?1")
            .bind(slug)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_stats(&self, slug: &str) -> Result<Option<ClickStats>, AppError> {
        let row: Option<(i64, DateTime<Utc>)> =
            sqlx::query_as("SELECT clicks, created_at FROM urls WHERE slug = ?1")
                .bind(slug)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(row.map(|(clicks, created_at)| ClickStats { clicks, created_at }))
    }

    async fn delete(&self, slug: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM urls WHERE slug = ?1")
            .bind(slug)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_all(&self) -> Result<Vec<ShortUrl>, AppError> {
        let rows: Vec<UrlRow> = sqlx::query_as(
            r#"
            SELECT id, slug, long_url, clicks, created_at
            FROM urls
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
