//! Bijective short <-> long tag registry

use super::alias::TagAlias;
use crate::error::{Result, YamlTagError};
use std::collections::HashMap;

/// Registry of tag aliases.
///
/// Short and long spellings form a bijection: each short form maps to exactly
/// one long form and each long form to exactly one short form. The registry
/// accepts registrations until [`TagRegistry::seal`] is called and is
/// read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct TagRegistry {
    short_to_long: HashMap<String, String>,
    long_to_short: HashMap<String, String>,
    /// Registration order, for listing
    order: Vec<TagAlias>,
    sealed: bool,
}

impl TagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a short/long pair.
    ///
    /// Registering an identical pair twice is accepted and changes nothing.
    /// A pair that would break the bijection fails with
    /// [`YamlTagError::DuplicateAlias`] and leaves the registry untouched.
    pub fn register(&mut self, short: &str, long: &str) -> Result<()> {
        if self.sealed {
            return Err(YamlTagError::RegistrySealed(short.to_string()));
        }
        if short.is_empty() || long.is_empty() {
            return Err(YamlTagError::InvalidTag(format!(
                "empty tag spelling in alias '{}' -> '{}'",
                short, long
            )));
        }

        if let Some(existing) = self.short_to_long.get(short) {
            if existing == long {
                return Ok(());
            }
            return Err(YamlTagError::DuplicateAlias {
                short: short.to_string(),
                long: long.to_string(),
                existing: existing.clone(),
            });
        }

        if let Some(existing) = self.long_to_short.get(long) {
            return Err(YamlTagError::DuplicateAlias {
                short: short.to_string(),
                long: long.to_string(),
                existing: existing.clone(),
            });
        }

        self.short_to_long.insert(short.to_string(), long.to_string());
        self.long_to_short.insert(long.to_string(), short.to_string());
        self.order.push(TagAlias::new(short, long));
        Ok(())
    }

    /// Register an alias pair
    pub fn register_alias(&mut self, alias: &TagAlias) -> Result<()> {
        self.register(&alias.short, &alias.long)
    }

    /// Freeze the registry; later registrations fail with `RegistrySealed`
    pub fn seal(&mut self) {
        self.sealed = true;
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Long form registered for `short`, if any
    pub fn short_to_long(&self, short: &str) -> Option<&str> {
        self.short_to_long.get(short).map(String::as_str)
    }

    /// Short form registered for `long`, if any
    pub fn long_to_short(&self, long: &str) -> Option<&str> {
        self.long_to_short.get(long).map(String::as_str)
    }

    /// Expand a tag to its long form, returning the input when unregistered
    pub fn expand<'a>(&'a self, tag: &'a str) -> &'a str {
        self.short_to_long(tag).unwrap_or(tag)
    }

    /// Shorten a tag to its short form, returning the input when unregistered
    pub fn shorten<'a>(&'a self, tag: &'a str) -> &'a str {
        self.long_to_short(tag).unwrap_or(tag)
    }

    /// True if `long` is a registered long form
    pub fn contains_long(&self, long: &str) -> bool {
        self.long_to_short.contains_key(long)
    }

    /// Registered aliases in registration order
    pub fn aliases(&self) -> &[TagAlias] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
