mod common;

use std::collections::HashSet;

use axum::http::StatusCode;
use futures::future::join_all;
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_concurrent_creates_get_distinct_slugs(pool: SqlitePool) {
    let server = common::make_server(pool);

    let requests = (0..50).map(|i| {
        let payload = json!({ "long_url": format!("https://example.com/page/{i}") });
        let server = &server;
        async move { server.post("/api/shorten").json(&payload).await }
    });

    let responses = join_all(requests).await;

    let mut slugs = HashSet::new();
    for response in responses {
        response.assert_status_ok();
        let slug = response.json::<serde_json::Value>()["short_url"]
            .as_str()
            .unwrap()
            .to_string();
        assert!(slugs.insert(slug), "duplicate slug issued");
    }

    // Every issued slug must resolve.
    for slug in &slugs {
        server
            .get(&format!("/{slug}"))
            .await
            .assert_status(StatusCode::TEMPORARY_REDIRECT);
    }
}

#[sqlx::test]
async fn test_concurrent_same_custom_slug_single_winner(pool: SqlitePool) {
    let server = common::make_server(pool);

    let payload = json!({
        "long_url": "https://example.com",
        "custom_slug": "contested"
    });

    let (a, b) = tokio::join!(
        server.post("/api/shorten").json(&payload),
        server.post("/api/shorten").json(&payload),
    );

    let mut statuses = [a.status_code(), b.status_code()];
    statuses.sort();

    assert_eq!(statuses, [StatusCode::OK, StatusCode::CONFLICT]);
}
