mod common;

use axum::http::StatusCode;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_redirect_returns_temporary_redirect(pool: SqlitePool) {
    let server = common::make_server(pool.clone());

    common::create_test_url(&pool, "go", "https://example.com/target").await;

    let response = server.get("/go").await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[sqlx::test]
async fn test_redirect_sets_security_headers(pool: SqlitePool) {
    let server = common::make_server(pool.clone());

    common::create_test_url(&pool, "go", "https://example.com").await;

    let response = server.get("/go").await;

    assert_eq!(response.header("x-content-type-options"), "nosniff");
    assert_eq!(response.header("x-frame-options"), "DENY");
    assert_eq!(response.header("x-xss-protection"), "1; mode=block");
    assert_eq!(
        response.header("cache-control"),
        "no-cache, no-store, must-revalidate"
    );
    assert_eq!(response.header("pragma"), "no-cache");
    assert_eq!(response.header("expires"), "0");
}

#[sqlx::test]
async fn test_redirect_increments_clicks(pool: SqlitePool) {
    let server = common::make_server(pool.clone());

    common::create_test_url(&pool, "counted", "https://example.com").await;

    for _ in 0..3 {
        server
            .get("/counted")
            .await
            .assert_status(StatusCode::TEMPORARY_REDIRECT);
    }

    assert_eq!(common::get_clicks(&pool, "counted").await, 3);
}

#[sqlx::test]
async fn test_redirect_counts_cache_hits(pool: SqlitePool) {
    let server = common::make_server(pool.clone());

    common::create_test_url(&pool, "hot", "https://example.com").await;

    // First request populates the cache, the rest are cache hits.
    for _ in 0..5 {
        server.get("/hot").await.assert_status(StatusCode::TEMPORARY_REDIRECT);
    }

    assert_eq!(common::get_clicks(&pool, "hot").await, 5);
}

#[sqlx::test]
async fn test_redirect_slug_with_slashes(pool: SqlitePool) {
    let server = common::make_server(pool.clone());

    common::create_test_url(&pool, "my/nested/page", "https://example.com/deep").await;

    let response = server.get("/my/nested/page").await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com/deep");
}

#[sqlx::test]
async fn test_redirect_unknown_slug_renders_404_page(pool: SqlitePool) {
    let server = common::make_server(pool);

    let response = server.get("/missing").await;

    response.assert_status(StatusCode::NOT_FOUND);

    let body = response.text();
    assert!(body.contains("URL Not Found"));
    assert!(body.contains("<a href=\"/\">"));
}

#[sqlx::test]
async fn test_redirect_after_delete_is_404(pool: SqlitePool) {
    let server = common::make_server(pool.clone());

    common::create_test_url(&pool, "gone", "https://example.com").await;

    // Warm the cache so delete has an entry to invalidate.
    server.get("/gone").await.assert_status(StatusCode::TEMPORARY_REDIRECT);

    server
        .delete("/api/urls/gone")
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server.get("/gone").await.assert_status(StatusCode::NOT_FOUND);
}
