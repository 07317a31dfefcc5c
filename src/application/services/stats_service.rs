//! Analytics, listing, and deletion.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{ClickStats, ShortUrl};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::infrastructure::cache::UrlCache;

/// Service for per-slug analytics, listing, and record deletion.
pub struct StatsService<R: UrlRepository> {
    repository: Arc<R>,
    cache: Arc<dyn UrlCache>,
}

impl<R: UrlRepository> StatsService<R> {
    /// Creates a new stats service.
    pub fn new(repository: Arc<R>, cache: Arc<dyn UrlCache>) -> Self {
        Self { repository, cache }
    }

    /// Returns the click count and creation time for a slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the slug is unknown.
    pub async fn analytics(&self, slug: &str) -> Result<ClickStats, AppError> {
        self.repository
            .find_stats(slug)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found", json!({ "slug": slug })))
    }

    /// Lists all records, newest first.
    pub async fn list_urls(&self) -> Result<Vec<ShortUrl>, AppError> {
        self.repository.list_all().await
    }

    /// Deletes a record by slug.
    ///
    /// Cache invalidation is a side effect of successful deletion, not a
    /// precondition; the slug becomes immediately available for reuse.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the slug is unknown.
    pub async fn delete_url(&self, slug: &str) -> Result<(), AppError> {
        if !self.repository.delete(slug).await? {
            return Err(AppError::not_found("URL not found", json!({ "slug": slug })));
        }

        self.cache.invalidate(slug);

        tracing::info!(slug, "deleted short URL");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;
    use crate::infrastructure::cache::MemoryCache;
    use chrono::Utc;

    #[tokio::test]
    async fn test_analytics_returns_stats() {
        let now = Utc::now();
        let mut repo = MockUrlRepository::new();
        repo.expect_find_stats().times(1).returning(move |_| {
            Ok(Some(ClickStats {
                clicks: 42,
                created_at: now,
            }))
        });

        let service = StatsService::new(Arc::new(repo), Arc::new(MemoryCache::new(10)));

        let stats = service.analytics("abc123ef").await.unwrap();
        assert_eq!(stats.clicks, 42);
    }

    #[tokio::test]
    async fn test_analytics_unknown_slug_is_not_found() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_stats().times(1).returning(|_| Ok(None));

        let service = StatsService::new(Arc::new(repo), Arc::new(MemoryCache::new(10)));

        let err = service.analytics("missing").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_invalidates_cache() {
        let mut repo = MockUrlRepository::new();
        repo.expect_delete().times(1).returning(|_| Ok(true));

        let cache = Arc::new(MemoryCache::new(10));
        cache.put("abc123ef", "https://example.com");

        let service = StatsService::new(Arc::new(repo), cache.clone());

        service.delete_url("abc123ef").await.unwrap();

        assert_eq!(cache.get("abc123ef"), None);
    }

    #[tokio::test]
    async fn test_delete_unknown_slug_is_not_found() {
        let mut repo = MockUrlRepository::new();
        repo.expect_delete().times(1).returning(|_| Ok(false));

        let cache = Arc::new(MemoryCache::new(10));
        let service = StatsService::new(Arc::new(repo), cache.clone());

        let err = service.delete_url("missing").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }
}
