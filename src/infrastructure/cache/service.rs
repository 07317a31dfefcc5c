//! Redirect cache trait.

/// Trait for caching slug-to-destination mappings.
///
/// The cache is never authoritative: a hit only skips the destination
/// lookup, never the click-count write. Implementations must be thread-safe;
/// in-process implementations are infallible, so the interface carries no
/// error type.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::MemoryCache`] - bounded, FIFO eviction
/// - [`crate::infrastructure::cache::NullCache`] - no-op for disabled caching
pub trait UrlCache: Send + Sync {
    /// Looks up the destination URL for a slug. No side effects.
    fn get(&self, slug: &str) -> Option<String>;

    /// Inserts a mapping, evicting the oldest-inserted entry when full.
    fn put(&self, slug: &str, long_url: &str);

    /// Removes the entry if present; no-op otherwise.
    ///
    /// Called when a record is deleted so the next redirect observes the
    /// deletion.
    fn invalidate(&self, slug: &str);
}
