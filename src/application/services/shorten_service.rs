//! Short URL creation service.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use crate::application::services::slug_pool::SlugPool;
use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::slug::{is_reserved, normalize_slug, validate_custom_slug};
use crate::utils::url_validator::validate_long_url;

/// Service for creating shortened URLs.
///
/// Custom slugs are claimed by a single atomic insert; the store's unique
/// constraint is the only correctness guard against concurrent requests for
/// the same slug. Generated slugs come from the pool and are retried on
/// collision, since pool entries may be stale.
pub struct ShortenService<R: UrlRepository> {
    repository: Arc<R>,
    slug_pool: Arc<SlugPool<R>>,
    max_attempts: usize,
}

impl<R: UrlRepository> ShortenService<R> {
    /// Creates a new shortening service.
    ///
    /// `max_attempts` bounds the claim-insert retry loop for generated slugs.
    pub fn new(repository: Arc<R>, slug_pool: Arc<SlugPool<R>>, max_attempts: usize) -> Self {
        Self {
            repository,
            slug_pool,
            max_attempts,
        }
    }

    /// Creates a shortened URL for the given destination.
    ///
    /// The record's `created_at` is captured here, once, so the insert and
    /// the returned record reflect the same instant. Creation has no cache
    /// side effect; the first redirect populates the cache.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] - malformed destination URL or slug syntax
    /// - [`AppError::ReservedSlug`] - custom slug collides with system routes
    /// - [`AppError::SlugTaken`] - custom slug already claimed
    /// - [`AppError::SlugExhaustion`] - generation retries exhausted
    /// - [`AppError::Store`] - persistence failure
    pub async fn create_short_url(
        &self,
        long_url: String,
        custom_slug: Option<String>,
    ) -> Result<ShortUrl, AppError> {
        validate_long_url(&long_url).map_err(|e| {
            AppError::bad_request("Invalid URL", json!({ "reason": e.to_string() }))
        })?;

        let created_at = Utc::now();

        if let Some(raw) = custom_slug {
            let slug = normalize_slug(&raw);

            // Reserved names include dotted entries like `robots.txt`, so
            // this check runs before the character-set validation.
            if is_reserved(&slug) {
                return Err(AppError::reserved_slug(
                    "This slug is reserved and cannot be used",
                    json!({ "slug": slug }),
                ));
            }

            validate_custom_slug(&slug)?;

            // Single atomic claim-or-fail insert. A concurrent request for
            // the same slug loses with SlugTaken from the unique constraint.
            let record = self
                .repository
                .insert(NewShortUrl {
                    slug,
                    long_url,
                    created_at,
                })
                .await?;

            tracing::info!(slug = %record.slug, "created short URL with custom slug");
            return Ok(record);
        }

        for attempt in 0..self.max_attempts {
            let slug = self.slug_pool.claim().await?;

            match self
                .repository
                .insert(NewShortUrl {
                    slug,
                    long_url: long_url.clone(),
                    created_at,
                })
                .await
            {
                Ok(record) => {
                    tracing::info!(slug = %record.slug, "created short URL");
                    return Ok(record);
                }
                Err(AppError::SlugTaken { .. }) => {
                    // Stale pool entry; discard and claim a fresh one.
                    tracing::warn!(attempt, "pooled slug was already claimed, retrying");
                    continue;
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::slug_exhaustion(
            "Unable to generate a unique slug after multiple attempts",
            json!({ "attempts": self.max_attempts }),
        ))
    }
}
