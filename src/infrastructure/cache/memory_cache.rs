//! Bounded in-process cache with FIFO eviction.

use super::service::UrlCache;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

struct Inner {
    entries: HashMap<String, String>,
    /// Insertion order of keys currently present in `entries`.
    order: VecDeque<String>,
}

/// In-memory slug-to-destination cache, bounded and insertion-ordered.
///
/// Eviction is pure FIFO by first insertion: overwriting an existing key
/// updates its value but keeps the original insertion slot. FIFO is a
/// deliberate simplicity-over-hit-rate choice; the only contracted behavior
/// is the size bound.
///
/// All operations take a single short-lived mutex; no lock is ever held
/// across I/O.
pub struct MemoryCache {
    inner: Mutex<Inner>,
    capacity: usize,
}

impl MemoryCache {
    /// Creates a cache bounded to `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(Inner {
                entries: HashMap::with_capacity(capacity),
                order: VecDeque::with_capacity(capacity),
            }),
            capacity,
        }
    }

    /// Number of entries currently cached.
    pub fn len(&self) -> usize {
        self.inner.lock().expect("cache lock poisoned").entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl UrlCache for MemoryCache {
    fn get(&self, slug: &str) -> Option<String> {
        let inner = self.inner.lock().expect("cache lock poisoned");
        inner.entries.get(slug).cloned()
    }

    fn put(&self, slug: &str, long_url: &str) {
        if self.capacity == 0 {
            return;
        }

        let mut inner = self.inner.lock().expect("cache lock poisoned");

        if let Some(value) = inner.entries.get_mut(slug) {
            // Existing key keeps its original insertion slot.
            *value = long_url.to_string();
            return;
        }

        if inner.entries.len() >= self.capacity {
            if let Some(oldest) = inner.order.pop_front() {
                inner.entries.remove(&oldest);
            }
        }

        inner.entries.insert(slug.to_string(), long_url.to_string());
        inner.order.push_back(slug.to_string());
    }

    fn invalidate(&self, slug: &str) {
        let mut inner = self.inner.lock().expect("cache lock poisoned");

        if inner.entries.remove(slug).is_some() {
            inner.order.retain(|k| k != slug);
        }
    }
}
