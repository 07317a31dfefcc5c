//! Repository trait definitions for the domain layer.
//!
//! The repository interface abstracts the persistence gateway following the
//! Repository pattern. The concrete implementation lives in
//! `crate::infrastructure::persistence`; mock implementations are
//! auto-generated via `mockall` for unit tests.

pub mod url_repository;

pub use url_repository::UrlRepository;

#[cfg(test)]
pub use url_repository::MockUrlRepository;
