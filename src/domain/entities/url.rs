//! Shortened URL entities.

/// A persisted shortened URL row.
///
/// The surrogate `id` is never exposed through the API; records are
/// addressed by `alias` everywhere above the store.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlRecord {
    pub id: i64,
    pub alias: String,
    pub full_url: String,
}

/// Payload for inserting a new shortened URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrl {
    pub alias: String,
    pub full_url: String,
}

/// API-facing projection of a [`UrlRecord`].
///
/// `short_url` is always recomputed from the configured base prefix and the
/// alias, never persisted, so the prefix can be reconfigured without a data
/// migration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlItem {
    pub alias: String,
    pub full_url: String,
    pub short_url: String,
}
