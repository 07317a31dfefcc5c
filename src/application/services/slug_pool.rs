//! Pre-generated slug pool with thread-safe replenishment.

use std::collections::HashSet;
use std::sync::Arc;

use serde_json::json;
use tokio::sync::Mutex;

use crate::config::MAX_SLUG_LENGTH;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::slug::generate_slug;

/// Bounded in-memory reserve of slug candidates that were unused at
/// generation time.
///
/// Amortizes the cost of uniqueness checks: the common-case allocation is a
/// pop from the pool instead of a persistence round-trip. Pool entries may go
/// stale if another writer claims the same slug between fill and claim, so
/// the insert remains the true arbiter of uniqueness; callers must retry a
/// claim whose insert reports the slug as taken.
///
/// All pool mutations serialize on one async mutex. Refill deliberately holds
/// the lock across its existence-check queries (simplicity over throughput).
pub struct SlugPool<R: UrlRepository> {
    repository: Arc<R>,
    pool: Mutex<HashSet<String>>,
    target_size: usize,
    slug_length: usize,
    max_attempts: usize,
}

impl<R: UrlRepository> SlugPool<R> {
    /// Creates an empty pool.
    ///
    /// `target_size` is the refill goal, `slug_length` the generated hex
    /// length, and `max_attempts` the per-budget limit for fallback
    /// generation.
    pub fn new(repository: Arc<R>, target_size: usize, slug_length: usize, max_attempts: usize) -> Self {
        Self {
            repository,
            pool: Mutex::new(HashSet::with_capacity(target_size)),
            target_size,
            slug_length,
            max_attempts,
        }
    }

    /// Number of candidates currently pooled.
    pub async fn len(&self) -> usize {
        self.pool.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Refills the pool up to its target size.
    ///
    /// Safe to call concurrently: callers serialize on the pool lock, and a
    /// caller that finds the pool already full no-ops.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the existence checks fail; candidates
    /// accepted before the failure stay in the pool.
    pub async fn refill(&self) -> Result<(), AppError> {
        let mut pool = self.pool.lock().await;
        self.fill_locked(&mut pool).await
    }

    /// Removes and returns one candidate, refilling first if the pool is
    /// empty.
    ///
    /// A failed refill is logged and tolerated; the claim then falls back to
    /// direct generation outside the lock.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::SlugExhaustion`] if the pool is empty and fallback
    /// generation runs out of attempts, [`AppError::Store`] if the fallback's
    /// existence checks fail.
    pub async fn claim(&self) -> Result<String, AppError> {
        {
            let mut pool = self.pool.lock().await;

            if pool.is_empty()
                && let Err(e) = self.fill_locked(&mut pool).await
            {
                tracing::warn!(error = %e, "slug pool refill failed, falling back to direct generation");
            }

            if let Some(slug) = pool.iter().next().cloned() {
                pool.remove(&slug);
                return Ok(slug);
            }
        }

        self.generate_with_retry().await
    }

    /// Direct generation fallback with a bounded attempt budget.
    ///
    /// Tries `max_attempts` candidates at the configured length, then the
    /// same budget once more at doubled length.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::SlugExhaustion`] when both budgets are spent.
    pub async fn generate_with_retry(&self) -> Result<String, AppError> {
        let lengths = [self.slug_length, (self.slug_length * 2).min(MAX_SLUG_LENGTH)];

        for length in lengths {
            for _ in 0..self.max_attempts {
                let candidate = generate_slug(length);

                if !self.repository.slug_exists(&candidate).await? {
                    return Ok(candidate);
                }
            }
        }

        Err(AppError::slug_exhaustion(
            "Unable to generate a unique slug after multiple attempts",
            json!({ "attempts_per_length": self.max_attempts }),
        ))
    }

    /// Fills the pool to `target_size` while the lock is held.
    ///
    /// Each candidate gets a point existence check against the store. The
    /// number of draws per pass is bounded so a dense namespace cannot spin
    /// this loop forever; the pass then returns under-filled and claims lean
    /// on the fallback path.
    async fn fill_locked(&self, pool: &mut HashSet<String>) -> Result<(), AppError> {
        let mut draws_left = self.target_size.saturating_mul(4).max(16);

        while pool.len() < self.target_size && draws_left > 0 {
            draws_left -= 1;

            let candidate = generate_slug(self.slug_length);

            if pool.contains(&candidate) {
                continue;
            }

            if !self.repository.slug_exists(&candidate).await? {
                pool.insert(candidate);
            }
        }

        if pool.len() < self.target_size {
            tracing::warn!(
                size = pool.len(),
                target = self.target_size,
                "slug pool refill ended under target"
            );
        }

        Ok(())
    }
}
