mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_delete_existing_alias(pool: SqlitePool) {
    common::create_test_url(&pool, "abc", "https://google.com").await;

    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(common::test_router(state)).unwrap();

    let response = server.delete("/url/abc").await;

    response.assert_status(StatusCode::NO_CONTENT);
    assert_eq!(common::count_urls(&pool).await, 0);
}

#[sqlx::test]
async fn test_delete_unknown_alias_is_not_found(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(common::test_router(state)).unwrap();

    let response = server.delete("/url/missing").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[sqlx::test]
async fn test_delete_leaves_other_records_in_place(pool: SqlitePool) {
    common::create_test_url(&pool, "abc", "https://a.com").await;
    common::create_test_url(&pool, "def", "https://b.com").await;

    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(common::test_router(state)).unwrap();

    server.delete("/url/abc").await.assert_status(StatusCode::NO_CONTENT);

    assert_eq!(common::count_urls(&pool).await, 1);
}
