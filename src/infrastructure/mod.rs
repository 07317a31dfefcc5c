//! Infrastructure layer for persistence and caching.
//!
//! Implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`cache`] - In-process redirect cache (FIFO and no-op implementations)
//! - [`persistence`] - SQLite repository implementation

pub mod cache;
pub mod persistence;
