//! No-op cache implementation for disabled caching.

use super::service::UrlCache;
use tracing::debug;

/// A cache implementation that does nothing.
///
/// Used when caching is disabled (`CACHE_CAPACITY=0`). Every lookup misses,
/// so all redirects take the persistence path.
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlCache for NullCache {
    fn get(&self, _slug: &str) -> Option<String> {
        None
    }

    fn put(&self, _slug: &str, _long_url: &str) {}

    fn invalidate(&self, _slug: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_cache_never_hits() {
        let cache = NullCache::new();

        cache.put("abc", "https://example.com");

        assert_eq!(cache.get("abc"), None);
    }
}
