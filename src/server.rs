//! HTTP server initialization and runtime setup.
//!
//! Handles database setup, service wiring, and the Axum server lifecycle.

use crate::application::services::{RandomAliasGenerator, UrlService};
use crate::config::Config;
use crate::infrastructure::persistence::SqliteUrlRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::SqlitePool;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool
/// - Embedded migrations (creates the `urls` table if absent)
/// - Repository, alias generator, and service wiring
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the database connection, migration, alias generator
/// configuration, server bind, or server runtime fails.
pub async fn run(config: Config) -> Result<()> {
    let pool = SqlitePool::connect(&config.database_url).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let pool = Arc::new(pool);
    let repository = Arc::new(SqliteUrlRepository::new(pool.clone()));
    let generator = Arc::new(RandomAliasGenerator::new(
        &config.alias_chars,
        config.alias_length,
    )?);
    let url_service = Arc::new(UrlService::new(
        repository,
        generator,
        config.base_url.clone(),
    ));

    let state = AppState {
        url_service,
        db: pool,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
