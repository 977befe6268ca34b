mod common;

use axum_test::TestServer;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_list_empty_store_returns_empty_array(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(common::test_router(state)).unwrap();

    let response = server.get("/url").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[sqlx::test]
async fn test_list_returns_items_with_derived_short_url(pool: SqlitePool) {
    common::create_test_url(&pool, "abc", "https://a.com").await;
    common::create_test_url(&pool, "def", "https://b.com").await;

    let state = common::create_test_state(pool);
    let server = TestServer::new(common::test_router(state)).unwrap();

    let response = server.get("/url").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);

    for item in items {
        let alias = item["alias"].as_str().unwrap();
        assert!(item["fullUrl"].as_str().unwrap().starts_with("https://"));
        assert_eq!(
            item["shortUrl"],
            format!("{}{}", common::BASE_URL, alias)
        );
    }
}
