//! Ordered chain of resolvers

use super::TagResolver;
use crate::domain::event::Scalar;
use crate::domain::tags::TagRegistry;
use crate::domain::value::{ResolvedScalar, ScalarValue};
use tracing::trace;

/// Tries each resolver in order; the first match wins.
///
/// Useful for putting a custom schema in front of a standard one. The first
/// resolver is the primary: its registry and collection defaults are used
/// unless it has none, in which case later resolvers are consulted.
pub struct SchemaChain {
    resolvers: Vec<Box<dyn TagResolver>>,
}

impl SchemaChain {
    pub fn new(primary: impl TagResolver + 'static) -> Self {
        Self {
            resolvers: vec![Box::new(primary)],
        }
    }

    /// Append a resolver consulted after all existing ones
    pub fn then(mut self, next: impl TagResolver + 'static) -> Self {
        self.resolvers.push(Box::new(next));
        self
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}

impl std::fmt::Debug for SchemaChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaChain")
            .field("resolvers", &self.resolvers.len())
            .finish()
    }
}

impl TagResolver for SchemaChain {
    fn registry(&self) -> &TagRegistry {
        self.resolvers[0].registry()
    }

    fn try_resolve_scalar(&self, scalar: &Scalar, parse_value: bool) -> Option<ResolvedScalar> {
        for (position, resolver) in self.resolvers.iter().enumerate() {
            if let Some(resolved) = resolver.try_resolve_scalar(scalar, parse_value) {
                trace!(position, tag = %resolved.tag, "chain resolved scalar");
                return Some(resolved);
            }
        }
        None
    }

    fn default_tag_for_mapping(&self) -> Option<&str> {
        self.resolvers.iter().find_map(|r| r.default_tag_for_mapping())
    }

    fn default_tag_for_sequence(&self) -> Option<&str> {
        self.resolvers.iter().find_map(|r| r.default_tag_for_sequence())
    }

    fn decode_tagged(&self, tag: &str, text: &str) -> Option<ScalarValue> {
        self.resolvers.iter().find_map(|r| r.decode_tagged(tag, text))
    }

    fn is_tag_implicit(&self, tag: &str) -> bool {
        self.resolvers.iter().any(|r| r.is_tag_implicit(tag))
    }

    fn default_tag_for_value(&self, value: &ScalarValue) -> Option<&str> {
        self.resolvers.iter().find_map(|r| r.default_tag_for_value(value))
    }

    fn expand_tag<'a>(&'a self, tag: &'a str) -> &'a str {
        self.resolvers
            .iter()
            .find_map(|r| r.registry().short_to_long(tag))
            .unwrap_or(tag)
    }

    fn shorten_tag<'a>(&'a self, tag: &'a str) -> &'a str {
        self.resolvers
            .iter()
            .find_map(|r| r.registry().long_to_short(tag))
            .unwrap_or(tag)
    }
}
