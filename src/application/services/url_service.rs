//! Shortened URL orchestration service.

use std::sync::Arc;

use crate::application::services::AliasGenerator;
use crate::domain::entities::{NewUrl, UrlItem, UrlRecord};
use crate::domain::repositories::UrlRepository;
use tracing::warn;

/// Business orchestration over the repository and the alias generator.
///
/// Stateless per call; the only held state is immutable configuration
/// (`base_url`) and the injected collaborators.
///
/// # Failure collapse
///
/// Repository failures are absorbed at this boundary and reported to callers
/// as absence of value (`None` / `false`), indistinguishable from not-found.
/// Each absorbed failure is logged at WARN, since no detail reaches the API
/// layer.
pub struct UrlService<R: UrlRepository, G: AliasGenerator> {
    repository: Arc<R>,
    generator: Arc<G>,
    base_url: String,
}

impl<R: UrlRepository, G: AliasGenerator> UrlService<R, G> {
    /// Creates a new service.
    ///
    /// `base_url` is validated non-blank at configuration load; short-URL
    /// composition concatenates it directly with the alias.
    pub fn new(repository: Arc<R>, generator: Arc<G>, base_url: String) -> Self {
        Self {
            repository,
            generator,
            base_url,
        }
    }

    /// Creates a shortened URL.
    ///
    /// # Behavior
    ///
    /// 1. A blank `full_url` returns `None` without touching the repository.
    /// 2. A blank or missing `custom_alias` is replaced with a generated one;
    ///    a supplied alias that already exists returns `None`.
    /// 3. An insert reporting zero rows (including a lost race on the
    ///    uniqueness constraint) returns `None`.
    /// 4. Any repository failure returns `None`; no partial state is exposed.
    pub async fn shorten(&self, full_url: &str, custom_alias: Option<&str>) -> Option<UrlItem> {
        if full_url.trim().is_empty() {
            return None;
        }

        let alias = match custom_alias.filter(|a| !a.trim().is_empty()) {
            Some(custom) => {
                match self.repository.exists_by_alias(custom).await {
                    Ok(true) => return None,
                    Ok(false) => custom.to_string(),
                    Err(e) => {
                        warn!(error = %e, alias = custom, "Alias existence check failed");
                        return None;
                    }
                }
            }
            None => self.generator.create_random_alias(),
        };

        let new_url = NewUrl {
            alias,
            full_url: full_url.to_string(),
        };

        match self.repository.add(&new_url).await {
            Ok(rows) if rows > 0 => Some(UrlItem {
                short_url: self.alias_to_short_url(&new_url.alias),
                alias: new_url.alias,
                full_url: new_url.full_url,
            }),
            Ok(_) => None,
            Err(e) => {
                warn!(error = %e, alias = %new_url.alias, "Insert failed");
                None
            }
        }
    }

    /// Looks up a shortened URL by alias.
    ///
    /// Returns `None` both when no record matches and when the repository
    /// fails; callers cannot distinguish the two.
    pub async fn get_by_alias(&self, alias: &str) -> Option<UrlItem> {
        match self.repository.get_by_alias(alias).await {
            Ok(record) => record.map(|r| self.translate(r)),
            Err(e) => {
                warn!(error = %e, alias, "Lookup failed");
                None
            }
        }
    }

    /// Returns all shortened URLs, in store-returned order.
    ///
    /// `None` (distinct from an empty collection) signals a repository
    /// failure.
    pub async fn get_all(&self) -> Option<Vec<UrlItem>> {
        match self.repository.get_all().await {
            Ok(records) => Some(records.into_iter().map(|r| self.translate(r)).collect()),
            Err(e) => {
                warn!(error = %e, "Listing failed");
                None
            }
        }
    }

    /// Deletes a shortened URL by alias.
    ///
    /// Returns `true` only when the alias existed and at least one row was
    /// removed. Not-found, zero rows removed (a record vanishing between the
    /// existence check and the delete), and repository failures all report
    /// `false`.
    pub async fn delete(&self, alias: &str) -> bool {
        match self.repository.exists_by_alias(alias).await {
            Ok(true) => {}
            Ok(false) => return false,
            Err(e) => {
                warn!(error = %e, alias, "Existence check failed");
                return false;
            }
        }

        match self.repository.delete(alias).await {
            Ok(removed) => removed,
            Err(e) => {
                warn!(error = %e, alias, "Delete failed");
                false
            }
        }
    }

    fn alias_to_short_url(&self, alias: &str) -> String {
        format!("{}{}", self.base_url, alias)
    }

    fn translate(&self, record: UrlRecord) -> UrlItem {
        UrlItem {
            short_url: self.alias_to_short_url(&record.alias),
            alias: record.alias,
            full_url: record.full_url,
        }
    }
}
