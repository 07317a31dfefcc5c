//! Application layer services implementing business logic.
//!
//! Services consume the repository trait and cache interface, and provide a
//! clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::slug_pool::SlugPool`] - Pre-generated slug pool with
//!   thread-safe replenishment
//! - [`services::shorten_service::ShortenService`] - Short URL creation
//! - [`services::redirect_service::RedirectService`] - Slug resolution with
//!   click counting
//! - [`services::stats_service::StatsService`] - Analytics, listing, deletion

pub mod services;
