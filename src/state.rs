//! Shared application state injected into handlers.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::{RandomAliasGenerator, UrlService};
use crate::infrastructure::persistence::SqliteUrlRepository;

/// The service wired with its production collaborators.
pub type AppUrlService = UrlService<SqliteUrlRepository, RandomAliasGenerator>;

/// Shared application state.
///
/// Cheap to clone; all fields are handles. The pool is kept alongside the
/// service for the health check.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<AppUrlService>,
    pub db: Arc<SqlitePool>,
}
