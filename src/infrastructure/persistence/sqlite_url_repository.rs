//! SQLite implementation of the URL repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewUrl, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// SQLite repository for shortened URL storage and retrieval.
///
/// Uses parameterized statements for SQL injection protection. Every
/// operation checks a connection out of the pool for its own scope; the
/// connection is returned when the guard drops.
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

/// Rejects blank alias arguments before they reach the store.
fn require_alias(alias: &str) -> Result<(), AppError> {
    if alias.trim().is_empty() {
        return Err(AppError::bad_request(
            "Alias must not be blank",
            json!({ "argument": "alias" }),
        ));
    }
    Ok(())
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn get_by_alias(&self, alias: &str) -> Result<Option<UrlRecord>, AppError> {
        require_alias(alias)?;

        let mut conn = self.pool.acquire().await?;

        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT id, alias, fullurl AS full_url
              FROM urls
             WHERE alias = ?
            "#,
        )
        .bind(alias)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(record)
    }

    async fn get_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        let mut conn = self.pool.acquire().await?;

        let records = sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT id, alias, fullurl AS full_url
              FROM urls
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(records)
    }

    async fn add(&self, new_url: &NewUrl) -> Result<u64, AppError> {
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO urls (alias, fullurl)
            VALUES (?, ?)
            "#,
        )
        .bind(&new_url.alias)
        .bind(&new_url.full_url)
        .execute(&mut *conn)
        .await;

        match result {
            Ok(done) => Ok(done.rows_affected()),
            // A lost race on the UNIQUE(alias) constraint reads as
            // zero rows inserted, same as a pre-detected collision.
            Err(e)
                if e.as_database_error()
                    .is_some_and(|db| db.is_unique_violation()) =>
            {
                Ok(0)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, alias: &str) -> Result<bool, AppError> {
        require_alias(alias)?;

        let mut conn = self.pool.acquire().await?;

        let done = sqlx::query(
            r#"
            DELETE FROM urls
             WHERE alias = ?
            "#,
        )
        .bind(alias)
        .execute(&mut *conn)
        .await?;

        Ok(done.rows_affected() > 0)
    }

    async fn exists_by_alias(&self, alias: &str) -> Result<bool, AppError> {
        require_alias(alias)?;

        let mut conn = self.pool.acquire().await?;

        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (SELECT 1
                             FROM urls
                            WHERE alias = ?)
            "#,
        )
        .bind(alias)
        .fetch_one(&mut *conn)
        .await?;

        Ok(exists)
    }
}
