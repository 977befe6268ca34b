#![allow(dead_code)]

use axum::Router;
use axum::routing::get;
use snip::api::handlers::{
    delete_url_handler, health_handler, redirect_handler, shorten_handler, url_list_handler,
};
use snip::application::services::{RandomAliasGenerator, UrlService};
use snip::infrastructure::persistence::SqliteUrlRepository;
use snip::state::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

pub const BASE_URL: &str = "http://localhost:3000/url/";

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let pool = Arc::new(pool);

    let repository = Arc::new(SqliteUrlRepository::new(pool.clone()));
    let generator = Arc::new(RandomAliasGenerator::new("abcdef0123456789", 8).unwrap());
    let url_service = Arc::new(UrlService::new(
        repository,
        generator,
        BASE_URL.to_string(),
    ));

    AppState {
        url_service,
        db: pool,
    }
}

pub fn test_router(state: AppState) -> Router {
    Router::new()
        .route("/url", get(url_list_handler).post(shorten_handler))
        .route(
            "/url/{alias}",
            get(redirect_handler).delete(delete_url_handler),
        )
        .route("/health", get(health_handler))
        .with_state(state)
}

pub async fn create_test_url(pool: &SqlitePool, alias: &str, full_url: &str) {
    sqlx::query("INSERT INTO urls (alias, fullurl) VALUES (?, ?)")
        .bind(alias)
        .bind(full_url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_urls(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}
