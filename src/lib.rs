//! # snip
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! The crate is split into layers with one-way dependencies:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and the repository trait
//! - **Application Layer** ([`application`]) - Business orchestration and alias generation
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! A static single-page frontend under `static/` consumes the API and is
//! served by the same binary.
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://snip.db?mode=rwc"
//! export BASE_URL="http://localhost:3000/url/"
//!
//! cargo run
//! ```
//!
//! The `urls` table is created on startup via an embedded migration.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod routes;
pub mod server;
pub mod state;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AliasGenerator, RandomAliasGenerator, UrlService};
    pub use crate::domain::entities::{NewUrl, UrlItem, UrlRecord};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
