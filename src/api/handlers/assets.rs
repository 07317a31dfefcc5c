//! Handlers for small fixed assets.

use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};

/// A transparent 1x1 PNG.
const TRANSPARENT_PIXEL: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1f,
    0x15, 0xc4, 0x89, 0x00, 0x00, 0x00, 0x0a, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9c, 0x62, 0x60,
    0x01, 0x00, 0x00, 0x00, 0x05, 0x00, 0x01, 0xd4, 0x4d, 0x1e, 0xb4, 0x00, 0x00, 0x00, 0x00,
    0x49, 0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
];

/// Serves a transparent favicon so browsers don't hit the redirect route.
///
/// # Endpoint
///
/// `GET /favicon.ico`
pub async fn favicon_handler() -> Response {
    (
        [(header::CONTENT_TYPE, HeaderValue::from_static("image/png"))],
        TRANSPARENT_PIXEL,
    )
        .into_response()
}
