//! Application services.

pub mod alias_generator;
pub mod url_service;

pub use alias_generator::{AliasGenerator, RandomAliasGenerator};
pub use url_service::UrlService;

#[cfg(test)]
pub use alias_generator::MockAliasGenerator;
