mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_shorten_generated_slug(pool: SqlitePool) {
    let server = common::make_server(pool);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "long_url": "https://example.com/page" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let slug = body["short_url"].as_str().unwrap();

    assert_eq!(slug.len(), 8);
    assert!(slug.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(body["long_url"], "https://example.com/page");
    assert_eq!(body["clicks"], 0);
    assert!(body["created_at"].is_string());
}

#[sqlx::test]
async fn test_shorten_custom_slug(pool: SqlitePool) {
    let server = common::make_server(pool);

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "long_url": "https://example.com/docs",
            "custom_slug": "my/page"
        }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["short_url"], "my/page");
}

#[sqlx::test]
async fn test_shorten_custom_slug_normalized(pool: SqlitePool) {
    let server = common::make_server(pool);

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "long_url": "https://example.com",
            "custom_slug": "MyPage"
        }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["short_url"], "mypage");
}

#[sqlx::test]
async fn test_shorten_duplicate_custom_slug_conflict(pool: SqlitePool) {
    let server = common::make_server(pool);

    let payload = json!({
        "long_url": "https://example.com",
        "custom_slug": "taken"
    });

    server.post("/api/shorten").json(&payload).await.assert_status_ok();

    let response = server.post("/api/shorten").json(&payload).await;

    response.assert_status(StatusCode::CONFLICT);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "slug_taken");
}

#[sqlx::test]
async fn test_shorten_reserved_slug_rejected(pool: SqlitePool) {
    let server = common::make_server(pool);

    for slug in ["api", "API", "static", "Admin", "api/nested"] {
        let response = server
            .post("/api/shorten")
            .json(&json!({
                "long_url": "https://example.com",
                "custom_slug": slug
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);

        let body = response.json::<serde_json::Value>();
        assert_eq!(body["error"]["code"], "reserved_slug", "slug: {slug}");
    }
}

#[sqlx::test]
async fn test_shorten_invalid_url_rejected(pool: SqlitePool) {
    let server = common::make_server(pool);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "long_url": "not a url" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_shorten_ftp_url_rejected(pool: SqlitePool) {
    let server = common::make_server(pool);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "long_url": "ftp://example.com/file" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_shorten_invalid_slug_charset_rejected(pool: SqlitePool) {
    let server = common::make_server(pool);

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "long_url": "https://example.com",
            "custom_slug": "bad slug!"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_shorten_slug_too_long_rejected(pool: SqlitePool) {
    let server = common::make_server(pool);

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "long_url": "https://example.com",
            "custom_slug": "a".repeat(33)
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_shorten_slug_reusable_after_delete(pool: SqlitePool) {
    let server = common::make_server(pool);

    let payload = json!({
        "long_url": "https://example.com",
        "custom_slug": "reuse-me"
    });

    server.post("/api/shorten").json(&payload).await.assert_status_ok();

    server
        .delete("/api/urls/reuse-me")
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server.post("/api/shorten").json(&payload).await.assert_status_ok();
}
