//! Repository trait for short URL data access.

use crate::domain::entities::{ClickStats, NewShortUrl, ShortUrl};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface over the persistence gateway.
///
/// Every operation is a single atomic statement; there is no multi-statement
/// transaction in this system. The store enforces slug uniqueness and
/// surfaces violations distinctly (mapped to [`AppError::SlugTaken`]), which
/// is the sole correctness guard against concurrent claims of the same slug.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new record, claiming its slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::SlugTaken`] if the slug is already claimed
    /// (store-level unique violation), [`AppError::Store`] on other
    /// database errors.
    async fn insert(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError>;

    /// Point existence check for a slug.
    ///
    /// Used by the slug pool to pre-validate candidates. A `false` result is
    /// advisory only; the insert is the true arbiter of uniqueness.
    async fn slug_exists(&self, slug: &str) -> Result<bool, AppError>;

    /// Reads the destination URL for a slug.
    async fn find_long_url(&self, slug: &str) -> Result<Option<String>, AppError>;

    /// Increments the click counter with a relative update
    /// (`clicks = clicks + 1`), never read-modify-write.
    ///
    /// Returns `true` if a row was updated, `false` if the slug is gone.
    async fn increment_clicks(&self, slug: &str) -> Result<bool, AppError>;

    /// Reads the analytics snapshot for a slug.
    async fn find_stats(&self, slug: &str) -> Result<Option<ClickStats>, AppError>;

    /// Deletes a record by slug, freeing the slug for immediate reuse.
    ///
    /// Returns `true` if a row was deleted, `false` if the slug was unknown.
    async fn delete(&self, slug: &str) -> Result<bool, AppError>;

    /// Full scan of all records, newest first.
    async fn list_all(&self) -> Result<Vec<ShortUrl>, AppError>;
}
