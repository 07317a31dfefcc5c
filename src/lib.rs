//! # linksnip
//!
//! A small and fast URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! The crate follows a layered design with clear separation of concerns:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and the repository trait
//! - **Application Layer** ([`application`]) - Slug pool, shortening, redirect,
//!   and stats services
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence and the
//!   in-memory redirect cache
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Pre-generated slug pool for cheap, collision-unlikely slug allocation
//! - Store-level uniqueness as the sole arbiter for slug claims
//! - Bounded FIFO redirect cache with explicit invalidation on deletion
//! - Click counting via relative updates (`clicks = clicks + 1`)
//! - Per-slug analytics, listing, and deletion endpoints
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite:urls.db"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        RedirectOutcome, RedirectService, ShortenService, SlugPool, StatsService,
    };
    pub use crate::domain::entities::{ClickStats, NewShortUrl, ShortUrl};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
