//! Utility functions for slug handling and URL validation.
//!
//! - [`slug`] - Slug generation, normalization, and the reserved-word set
//! - [`url_validator`] - Absolute http(s) URL validation

pub mod slug;
pub mod url_validator;
