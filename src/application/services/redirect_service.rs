//! Slug resolution and click counting.

use std::sync::Arc;

use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::infrastructure::cache::UrlCache;

/// Result of resolving a slug.
///
/// `NotFound` is a business outcome, not a failure; the HTTP layer renders it
/// as a 404 page. Store failures surface as errors instead.
#[derive(Debug, Clone, PartialEq)]
pub enum RedirectOutcome {
    Found { long_url: String },
    NotFound,
}

/// Service resolving slugs to destinations and recording clicks.
///
/// Cache-first lookup, but the click-count write always happens: a cache hit
/// skips the destination read, never the counter update.
pub struct RedirectService<R: UrlRepository> {
    repository: Arc<R>,
    cache: Arc<dyn UrlCache>,
}

impl<R: UrlRepository> RedirectService<R> {
    /// Creates a new redirect service.
    pub fn new(repository: Arc<R>, cache: Arc<dyn UrlCache>) -> Self {
        Self { repository, cache }
    }

    /// Resolves a slug and increments its click counter.
    ///
    /// The counter update is a relative `clicks = clicks + 1` statement, so
    /// concurrent redirects of the same slug never lose updates. A record
    /// deleted between the cache hit and the counter write still redirects;
    /// the increment is simply a no-op then.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on persistence failure, which is distinct
    /// from the `NotFound` outcome.
    pub async fn resolve_and_count(&self, slug: &str) -> Result<RedirectOutcome, AppError> {
        if let Some(long_url) = self.cache.get(slug) {
            tracing::debug!(slug, "redirect cache hit");

            if !self.repository.increment_clicks(slug).await? {
                tracing::debug!(slug, "cached slug no longer exists, redirecting anyway");
            }

            return Ok(RedirectOutcome::Found { long_url });
        }

        let Some(long_url) = self.repository.find_long_url(slug).await? else {
            tracing::info!(slug, "redirect requested for unknown slug");
            return Ok(RedirectOutcome::NotFound);
        };

        self.cache.put(slug, &long_url);

        self.repository.increment_clicks(slug).await?;

        Ok(RedirectOutcome::Found { long_url })
    }
}
