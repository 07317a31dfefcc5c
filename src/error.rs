//! Application error taxonomy and HTTP mapping.
//!
//! Business outcomes (`NotFound`, `SlugTaken`, `ReservedSlug`) are expected
//! control flow and carry client-facing status codes. `SlugExhaustion` and
//! `Store` indicate infrastructure failure and always map to 500 without
//! leaking internal detail.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use std::fmt;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

#[derive(Debug)]
pub enum AppError {
    /// Malformed input (bad URL, bad slug syntax). HTTP 400.
    Validation { message: String, details: Value },
    /// Custom slug collides with a reserved word or the `api/` prefix. HTTP 400.
    ReservedSlug { message: String, details: Value },
    /// Slug does not resolve to a record. HTTP 404.
    NotFound { message: String, details: Value },
    /// Slug already claimed, surfaced by the store's unique constraint. HTTP 409.
    SlugTaken { message: String, details: Value },
    /// Slug pool and fallback generation both exhausted. HTTP 500.
    SlugExhaustion { message: String, details: Value },
    /// Underlying persistence failure. HTTP 500.
    Store { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn reserved_slug(message: impl Into<String>, details: Value) -> Self {
        Self::ReservedSlug {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn slug_taken(message: impl Into<String>, details: Value) -> Self {
        Self::SlugTaken {
            message: message.into(),
            details,
        }
    }

    pub fn slug_exhaustion(message: impl Into<String>, details: Value) -> Self {
        Self::SlugExhaustion {
            message: message.into(),
            details,
        }
    }

    pub fn store(message: impl Into<String>, details: Value) -> Self {
        Self::Store {
            message: message.into(),
            details,
        }
    }

    /// Machine-readable error code used in the JSON body.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation_error",
            Self::ReservedSlug { .. } => "reserved_slug",
            Self::NotFound { .. } => "not_found",
            Self::SlugTaken { .. } => "slug_taken",
            Self::SlugExhaustion { .. } => "slug_exhaustion",
            Self::Store { .. } => "store_error",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::ReservedSlug { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::SlugTaken { .. } => StatusCode::CONFLICT,
            Self::SlugExhaustion { .. } | Self::Store { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::Validation { message, .. }
            | Self::ReservedSlug { message, .. }
            | Self::NotFound { message, .. }
            | Self::SlugTaken { message, .. }
            | Self::SlugExhaustion { message, .. }
            | Self::Store { message, .. } => message,
        };
        write!(f, "{}: {}", self.code(), message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::ReservedSlug { message, details }
            | AppError::NotFound { message, details }
            | AppError::SlugTaken { message, details }
            | AppError::SlugExhaustion { message, details } => (message, details),
            // Internal detail stays in the logs, not in the response.
            AppError::Store { .. } => ("Internal server error".to_string(), json!({})),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::bad_request(
            "Request validation failed",
            serde_json::to_value(&errors).unwrap_or_else(|_| json!({})),
        )
    }
}

/// Maps sqlx errors onto the application taxonomy.
///
/// The only unique constraint in the schema is `urls.slug`, so a unique
/// violation always means the slug was claimed by a concurrent writer.
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::slug_taken("This slug is already taken", json!({}));
        }

        tracing::error!(error = %e, "database operation failed");
        AppError::store("Database error", json!({}))
    }
}
