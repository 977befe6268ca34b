//! Database-backed repository implementations.

pub mod sqlite_url_repository;

pub use sqlite_url_repository::SqliteUrlRepository;
