//! Repository trait for shortened URL data access.

use crate::domain::entities::{NewUrl, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for shortened URLs.
///
/// All operations are single-statement queries against the `urls` table.
/// Each call acquires a store connection for its own scope and releases it
/// on completion.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Finds a record by its alias.
    ///
    /// Lookup is exact-match; case-sensitivity follows the store's default
    /// collation (case-sensitive for SQLite `TEXT`).
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlRecord))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `alias` is blank.
    /// Returns [`AppError::Internal`] on database errors.
    async fn get_by_alias(&self, alias: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Returns all records. Unordered full scan, no pagination.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn get_all(&self) -> Result<Vec<UrlRecord>, AppError>;

    /// Inserts a new record and returns the number of rows inserted (0 or 1).
    ///
    /// A uniqueness-constraint violation returns `Ok(0)` rather than an
    /// error, so a caller that lost an insert race observes the same outcome
    /// as a pre-insert existence check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on other database errors.
    async fn add(&self, new_url: &NewUrl) -> Result<u64, AppError>;

    /// Deletes a record by alias.
    ///
    /// Returns `Ok(false)` when no row matched; that is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `alias` is blank.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, alias: &str) -> Result<bool, AppError>;

    /// Checks whether a record with the given alias exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `alias` is blank.
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists_by_alias(&self, alias: &str) -> Result<bool, AppError>;
}
