mod common;

use axum::http::StatusCode;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_analytics_returns_clicks_and_created_at(pool: SqlitePool) {
    let server = common::make_server(pool.clone());

    common::create_test_url(&pool, "tracked", "https://example.com").await;

    server
        .get("/tracked")
        .await
        .assert_status(StatusCode::TEMPORARY_REDIRECT);
    server
        .get("/tracked")
        .await
        .assert_status(StatusCode::TEMPORARY_REDIRECT);

    let response = server.get("/api/analytics/tracked").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["clicks"], 2);
    assert!(body["created_at"].is_string());
}

#[sqlx::test]
async fn test_analytics_new_url_has_zero_clicks(pool: SqlitePool) {
    let server = common::make_server(pool.clone());

    common::create_test_url(&pool, "fresh", "https://example.com").await;

    let response = server.get("/api/analytics/fresh").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["clicks"], 0);
}

#[sqlx::test]
async fn test_analytics_slug_with_slashes(pool: SqlitePool) {
    let server = common::make_server(pool.clone());

    common::create_test_url(&pool, "docs/intro", "https://example.com/docs").await;

    let response = server.get("/api/analytics/docs/intro").await;

    response.assert_status_ok();
}

#[sqlx::test]
async fn test_analytics_unknown_slug_404(pool: SqlitePool) {
    let server = common::make_server(pool);

    let response = server.get("/api/analytics/missing").await;

    response.assert_status(StatusCode::NOT_FOUND);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "not_found");
}
