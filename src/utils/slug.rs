//! Slug generation, normalization, and validation.
//!
//! Generated slugs are fixed-length lowercase hex strings drawn from a
//! cryptographically strong random source. Custom slugs are normalized to
//! lowercase and checked against the reserved-word set.

use crate::config::MAX_SLUG_LENGTH;
use crate::error::AppError;
use serde_json::json;
use std::sync::LazyLock;

/// Reserved slugs that cannot be used as custom slugs.
///
/// These collide with system routes or well-known paths.
pub const RESERVED_SLUGS: &[&str] = &[
    "api",
    "static",
    "favicon.ico",
    "admin",
    "root",
    "www",
    "mail",
    "ftp",
    "localhost",
    "dashboard",
    "settings",
    "help",
    "about",
    "contact",
    "privacy",
    "terms",
    "robots.txt",
    "sitemap.xml",
];

/// Character class allowed in slugs, before lowercase normalization.
pub static SLUG_PATTERN: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[a-zA-Z0-9_/-]+$").expect("valid slug pattern"));

/// Generates a random slug of `length` lowercase hex characters.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_slug(length: usize) -> String {
    let mut buffer = vec![0u8; length.div_ceil(2)];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    let mut slug = hex::encode(buffer);
    slug.truncate(length);
    slug
}

/// Normalizes a user-provided slug: trims whitespace and lowercases.
pub fn normalize_slug(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

/// Returns true if the slug is reserved for system use.
///
/// Expects an already-normalized (lowercase) slug.
pub fn is_reserved(slug: &str) -> bool {
    RESERVED_SLUGS.contains(&slug) || slug.starts_with("api/")
}

/// Validates a normalized custom slug's length and character set.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the slug is empty, too long, or
/// contains characters outside `[a-z0-9_/-]`.
pub fn validate_custom_slug(slug: &str) -> Result<(), AppError> {
    if slug.is_empty() || slug.len() > MAX_SLUG_LENGTH {
        return Err(AppError::bad_request(
            "Custom slug must be 1-32 characters",
            json!({ "provided_length": slug.len() }),
        ));
    }

    if !SLUG_PATTERN.is_match(slug) {
        return Err(AppError::bad_request(
            "Custom slug can only contain letters, digits, underscores, hyphens, and slashes",
            json!({ "slug": slug }),
        ));
    }

    Ok(())
}
