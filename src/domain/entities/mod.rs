//! Domain entities.

pub mod url;

pub use url::{NewUrl, UrlItem, UrlRecord};
