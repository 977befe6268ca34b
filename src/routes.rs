//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST   /url`          - Shorten a URL
//! - `GET    /url`          - List all shortened URLs
//! - `GET    /url/{alias}`  - Redirect to the full URL
//! - `DELETE /url/{alias}`  - Delete a shortened URL
//! - `GET    /health`       - Health check
//! - `/*`                   - Static frontend (fallback)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{
    delete_url_handler, health_handler, redirect_handler, shorten_handler, url_list_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::{
    Router,
    routing::get,
};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// Requests that match no API route fall through to the static frontend
/// under `static/`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/url", get(url_list_handler).post(shorten_handler))
        .route(
            "/url/{alias}",
            get(redirect_handler).delete(delete_url_handler),
        )
        .route("/health", get(health_handler))
        .fallback_service(ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
