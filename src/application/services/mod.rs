//! Business logic services.

pub mod redirect_service;
pub mod shorten_service;
pub mod slug_pool;
pub mod stats_service;

pub use redirect_service::{RedirectOutcome, RedirectService};
pub use shorten_service::ShortenService;
pub use slug_pool::SlugPool;
pub use stats_service::StatsService;
