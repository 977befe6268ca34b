//! Random alias generation.

use anyhow::{Result, bail};
use rand::Rng;

/// Produces aliases for records created without a caller-supplied alias.
///
/// The generator makes no uniqueness guarantee; collision handling is the
/// responsibility of [`crate::application::services::UrlService`], backed by
/// the store's UNIQUE constraint.
#[cfg_attr(test, mockall::automock)]
pub trait AliasGenerator: Send + Sync {
    /// Returns a fixed-length random alias.
    fn create_random_alias(&self) -> String;
}

/// Generator drawing characters independently and uniformly (with
/// replacement) from a configured character set.
///
/// Uses the thread-local RNG; aliases are identifiers, not secrets, so a
/// non-cryptographic source is sufficient.
pub struct RandomAliasGenerator {
    chars: Vec<char>,
    length: usize,
}

impl RandomAliasGenerator {
    /// Creates a generator from the configured character set and length.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the character set is empty or
    /// all-whitespace.
    pub fn new(chars: &str, length: usize) -> Result<Self> {
        if chars.trim().is_empty() {
            bail!("alias character set must not be blank");
        }

        Ok(Self {
            chars: chars.chars().collect(),
            length,
        })
    }
}

impl AliasGenerator for RandomAliasGenerator {
    fn create_random_alias(&self) -> String {
        let mut rng = rand::rng();

        (0..self.length)
            .map(|_| self.chars[rng.random_range(0..self.chars.len())])
            .collect()
    }
}
