mod common;

use snip::domain::entities::NewUrl;
use snip::domain::repositories::UrlRepository;
use snip::error::AppError;
use snip::infrastructure::persistence::SqliteUrlRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

fn repository(pool: SqlitePool) -> SqliteUrlRepository {
    SqliteUrlRepository::new(Arc::new(pool))
}

fn new_url(alias: &str, full_url: &str) -> NewUrl {
    NewUrl {
        alias: alias.to_string(),
        full_url: full_url.to_string(),
    }
}

#[sqlx::test]
async fn test_add_inserts_one_row(pool: SqlitePool) {
    let repo = repository(pool.clone());

    let rows = repo.add(&new_url("abc", "https://google.com")).await.unwrap();

    assert_eq!(rows, 1);
    assert_eq!(common::count_urls(&pool).await, 1);
}

#[sqlx::test]
async fn test_add_duplicate_alias_reports_zero_rows(pool: SqlitePool) {
    let repo = repository(pool.clone());

    repo.add(&new_url("abc", "https://a.com")).await.unwrap();
    let rows = repo.add(&new_url("abc", "https://b.com")).await.unwrap();

    assert_eq!(rows, 0);
    assert_eq!(common::count_urls(&pool).await, 1);
}

#[sqlx::test]
async fn test_get_by_alias_returns_matching_record(pool: SqlitePool) {
    let repo = repository(pool);

    repo.add(&new_url("abc", "https://google.com")).await.unwrap();

    let record = repo.get_by_alias("abc").await.unwrap().unwrap();
    assert_eq!(record.alias, "abc");
    assert_eq!(record.full_url, "https://google.com");
}

#[sqlx::test]
async fn test_get_by_alias_absent_is_none_not_error(pool: SqlitePool) {
    let repo = repository(pool);

    let record = repo.get_by_alias("missing").await.unwrap();

    assert!(record.is_none());
}

#[sqlx::test]
async fn test_get_by_alias_blank_is_an_argument_error(pool: SqlitePool) {
    let repo = repository(pool);

    let result = repo.get_by_alias("   ").await;

    assert!(matches!(result, Err(AppError::Validation { .. })));
}

#[sqlx::test]
async fn test_get_all_returns_every_record(pool: SqlitePool) {
    let repo = repository(pool);

    repo.add(&new_url("abc", "https://a.com")).await.unwrap();
    repo.add(&new_url("def", "https://b.com")).await.unwrap();

    let records = repo.get_all().await.unwrap();

    assert_eq!(records.len(), 2);
}

#[sqlx::test]
async fn test_get_all_empty_store(pool: SqlitePool) {
    let repo = repository(pool);

    assert!(repo.get_all().await.unwrap().is_empty());
}

#[sqlx::test]
async fn test_delete_removes_row(pool: SqlitePool) {
    let repo = repository(pool.clone());

    repo.add(&new_url("abc", "https://a.com")).await.unwrap();

    assert!(repo.delete("abc").await.unwrap());
    assert_eq!(common::count_urls(&pool).await, 0);
}

#[sqlx::test]
async fn test_delete_unmatched_alias_reports_false(pool: SqlitePool) {
    let repo = repository(pool);

    assert!(!repo.delete("missing").await.unwrap());
}

#[sqlx::test]
async fn test_delete_blank_is_an_argument_error(pool: SqlitePool) {
    let repo = repository(pool);

    let result = repo.delete("").await;

    assert!(matches!(result, Err(AppError::Validation { .. })));
}

#[sqlx::test]
async fn test_exists_by_alias(pool: SqlitePool) {
    let repo = repository(pool);

    repo.add(&new_url("abc", "https://a.com")).await.unwrap();

    assert!(repo.exists_by_alias("abc").await.unwrap());
    assert!(!repo.exists_by_alias("def").await.unwrap());
}

#[sqlx::test]
async fn test_exists_by_alias_blank_is_an_argument_error(pool: SqlitePool) {
    let repo = repository(pool);

    let result = repo.exists_by_alias(" ").await;

    assert!(matches!(result, Err(AppError::Validation { .. })));
}
