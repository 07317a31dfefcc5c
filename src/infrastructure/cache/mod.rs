//! Redirect cache for skipping the destination lookup on hot slugs.
//!
//! Provides a [`UrlCache`] trait with two implementations:
//! - [`MemoryCache`] - Bounded in-process cache with FIFO eviction
//! - [`NullCache`] - No-op implementation for disabled caching

mod memory_cache;
mod null_cache;
mod service;

pub use memory_cache::MemoryCache;
pub use null_cache::NullCache;
pub use service::UrlCache;
