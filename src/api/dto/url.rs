//! DTOs for the shortened URL endpoints.

use crate::domain::entities::UrlItem;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for custom alias validation.
///
/// Letters, digits, and hyphens; the empty string is allowed and treated as
/// "no custom alias". Mirrors the frontend's input validation.
static CUSTOM_ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9-]*$").unwrap());

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// The original URL to shorten. Must be non-blank.
    pub full_url: String,

    /// Optional caller-chosen alias. A random alias is generated when
    /// missing or blank.
    #[serde(default)]
    #[validate(regex(
        path = "*CUSTOM_ALIAS_REGEX",
        message = "alias can only contain letters, numbers, and hyphens"
    ))]
    pub custom_alias: Option<String>,
}

/// Response for a successfully shortened URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_url: String,
}

/// JSON representation of a shortened URL in list responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlItemResponse {
    pub alias: String,
    pub full_url: String,
    pub short_url: String,
}

impl From<UrlItem> for UrlItemResponse {
    fn from(item: UrlItem) -> Self {
        Self {
            alias: item.alias,
            full_url: item.full_url,
            short_url: item.short_url,
        }
    }
}
