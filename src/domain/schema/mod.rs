//! Schemas: tag aliases, scalar rules and collection defaults
//!
//! A schema is assembled with a [`SchemaBuilder`] and sealed into a
//! [`BaseSchema`], which resolves plain scalars through its ordered rules and
//! reports "no match" otherwise. Variants add behavior by wrapping a resolver
//! rather than overriding it: [`StringFallback`] first asks the inner
//! resolver and only then applies the failsafe string rule.
//!
//! # Examples
//!
//! ```
//! use yamltag::domain::event::Scalar;
//! use yamltag::domain::schema::{SchemaKind, TagResolver};
//! use yamltag::domain::value::ScalarValue;
//!
//! let schema = SchemaKind::Core.build().unwrap();
//! let resolved = schema.try_resolve_scalar(&Scalar::plain("0x1F"), true).unwrap();
//! assert_eq!(resolved.tag, "tag:yaml.org,2002:int");
//! assert_eq!(resolved.value, Some(ScalarValue::Int(31)));
//! ```

pub mod chain;
pub mod core_schema;
pub mod extended;
pub mod failsafe;
pub mod json;

use crate::domain::event::{CollectionStart, NodeEvent, Scalar};
use crate::domain::rules::{Decoder, ScalarRule};
use crate::domain::tags::alias::{NON_SPECIFIC_TAG, STR_LONG_TAG};
use crate::domain::tags::{TagAlias, TagRegistry};
use crate::domain::value::{Resolution, ResolvedScalar, ScalarValue};
use crate::error::{Result, YamlTagError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, trace};

pub use chain::SchemaChain;

/// Resolution contract shared by every schema.
///
/// Implementations are immutable once constructed, so a resolver can be
/// shared across threads and queried concurrently.
pub trait TagResolver: Send + Sync {
    /// Alias registry used for expanding and shortening tags
    fn registry(&self) -> &TagRegistry;

    /// Resolve an untagged scalar.
    ///
    /// Returns `None` when no rule matches. When `parse_value` is false the
    /// tag decision is the same but `value` is left empty.
    fn try_resolve_scalar(&self, scalar: &Scalar, parse_value: bool) -> Option<ResolvedScalar>;

    /// Tag for an untagged mapping, if this schema supports mappings
    fn default_tag_for_mapping(&self) -> Option<&str>;

    /// Tag for an untagged sequence, if this schema supports sequences
    fn default_tag_for_sequence(&self) -> Option<&str>;

    /// Decode `text` as a scalar explicitly tagged with the long tag `tag`
    fn decode_tagged(&self, tag: &str, text: &str) -> Option<ScalarValue>;

    /// Whether a node with this long tag can be written without the tag
    fn is_tag_implicit(&self, tag: &str) -> bool;

    /// Long tag this schema uses for a kind of primitive value
    fn default_tag_for_value(&self, value: &ScalarValue) -> Option<&str>;

    fn expand_tag<'a>(&'a self, tag: &'a str) -> &'a str {
        self.registry().expand(tag)
    }

    fn shorten_tag<'a>(&'a self, tag: &'a str) -> &'a str {
        self.registry().shorten(tag)
    }

    fn resolve_mapping_tag(&self, event: &CollectionStart) -> Option<String> {
        match event.tag.as_deref() {
            None | Some(NON_SPECIFIC_TAG) => self.default_tag_for_mapping().map(str::to_string),
            Some(tag) => Some(self.expand_tag(tag).to_string()),
        }
    }

    fn resolve_sequence_tag(&self, event: &CollectionStart) -> Option<String> {
        match event.tag.as_deref() {
            None | Some(NON_SPECIFIC_TAG) => self.default_tag_for_sequence().map(str::to_string),
            Some(tag) => Some(self.expand_tag(tag).to_string()),
        }
    }

    /// Resolve any node event, honoring an explicit tag when one is present
    fn resolve_node(&self, event: &NodeEvent, parse_value: bool) -> Option<Resolution> {
        match event {
            NodeEvent::MappingStart(start) => {
                self.resolve_mapping_tag(start).map(Resolution::Collection)
            }
            NodeEvent::SequenceStart(start) => {
                self.resolve_sequence_tag(start).map(Resolution::Collection)
            }
            NodeEvent::Scalar(scalar) => match scalar.tag.as_deref() {
                None => self
                    .try_resolve_scalar(scalar, parse_value)
                    .map(Resolution::Scalar),
                Some(NON_SPECIFIC_TAG) => Some(Resolution::Scalar(ResolvedScalar::new(
                    STR_LONG_TAG,
                    parse_value.then(|| ScalarValue::Str(scalar.value.clone())),
                ))),
                Some(tag) => {
                    let long = self.expand_tag(tag).to_string();
                    let value = if parse_value {
                        self.decode_tagged(&long, &scalar.value)
                    } else {
                        None
                    };
                    Some(Resolution::Scalar(ResolvedScalar::new(long, value)))
                }
            },
        }
    }
}

/// Collects aliases, rules and collection defaults during construction
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    name: String,
    registry: TagRegistry,
    rules: Vec<ScalarRule>,
    mapping_tag: Option<String>,
    sequence_tag: Option<String>,
    allow_failsafe_string: bool,
}

impl SchemaBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            registry: TagRegistry::new(),
            rules: Vec::new(),
            mapping_tag: None,
            sequence_tag: None,
            allow_failsafe_string: false,
        }
    }

    /// Rename the schema being built (variants extending another variant)
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn register_tag(&mut self, short: &str, long: &str) -> Result<&mut Self> {
        self.registry.register(short, long)?;
        Ok(self)
    }

    pub fn register_alias(&mut self, alias: &TagAlias) -> Result<&mut Self> {
        self.registry.register_alias(alias)?;
        Ok(self)
    }

    /// Append a rule; rules are tried in insertion order
    pub fn add_rule(&mut self, rule: ScalarRule) -> &mut Self {
        self.rules.push(rule);
        self
    }

    /// Append a rule built from a pattern and decoder
    pub fn add_scalar_rule(&mut self, tag: &str, pattern: &str, decoder: Decoder) -> Result<&mut Self> {
        let rule = ScalarRule::new(tag, pattern, decoder)?;
        Ok(self.add_rule(rule))
    }

    /// Drop all rules, keeping aliases and defaults
    pub fn clear_rules(&mut self) -> &mut Self {
        self.rules.clear();
        self
    }

    pub fn mapping_tag(&mut self, tag: &str) -> &mut Self {
        self.mapping_tag = Some(tag.to_string());
        self
    }

    pub fn sequence_tag(&mut self, tag: &str) -> &mut Self {
        self.sequence_tag = Some(tag.to_string());
        self
    }

    pub fn allow_failsafe_string(&mut self, allow: bool) -> &mut Self {
        self.allow_failsafe_string = allow;
        self
    }

    pub fn registry(&self) -> &TagRegistry {
        &self.registry
    }

    /// Seal into a base resolver with no string fallback.
    ///
    /// Fails if a collection default or a rule tag is not a registered long
    /// form.
    pub fn build_base(self) -> Result<BaseSchema> {
        let SchemaBuilder {
            name,
            mut registry,
            rules,
            mapping_tag,
            sequence_tag,
            ..
        } = self;

        let defaults = mapping_tag.iter().chain(sequence_tag.iter());
        for tag in defaults.map(String::as_str).chain(rules.iter().map(ScalarRule::tag)) {
            if !registry.contains_long(tag) {
                return Err(YamlTagError::InvalidTag(format!(
                    "schema '{}' uses unregistered tag '{}'",
                    name, tag
                )));
            }
        }

        registry.seal();
        debug!(
            schema = %name,
            aliases = registry.len(),
            rules = rules.len(),
            "sealed schema"
        );

        Ok(BaseSchema {
            name,
            registry,
            rules,
            mapping_tag,
            sequence_tag,
        })
    }

    /// Seal and wrap in the failsafe string fallback
    pub fn build(self) -> Result<Schema> {
        let allow = self.allow_failsafe_string;
        Ok(StringFallback::new(self.build_base()?, allow))
    }
}

/// A sealed schema: ordered scalar rules plus collection defaults.
///
/// Resolution never falls back; unmatched plain scalars are "no match".
#[derive(Debug, Clone)]
pub struct BaseSchema {
    name: String,
    registry: TagRegistry,
    rules: Vec<ScalarRule>,
    mapping_tag: Option<String>,
    sequence_tag: Option<String>,
}

impl BaseSchema {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[ScalarRule] {
        &self.rules
    }
}

impl TagResolver for BaseSchema {
    fn registry(&self) -> &TagRegistry {
        &self.registry
    }

    fn try_resolve_scalar(&self, scalar: &Scalar, parse_value: bool) -> Option<ResolvedScalar> {
        if !scalar.is_plain() {
            trace!(schema = %self.name, "non-plain scalar resolves to str");
            return Some(ResolvedScalar::new(
                STR_LONG_TAG,
                parse_value.then(|| ScalarValue::Str(scalar.value.clone())),
            ));
        }

        let rule = self.rules.iter().find(|rule| rule.matches(&scalar.value))?;
        trace!(schema = %self.name, tag = rule.tag(), "scalar matched rule");
        let value = if parse_value {
            rule.decode(&scalar.value)
        } else {
            None
        };
        Some(ResolvedScalar::new(rule.tag(), value))
    }

    fn default_tag_for_mapping(&self) -> Option<&str> {
        self.mapping_tag.as_deref()
    }

    fn default_tag_for_sequence(&self) -> Option<&str> {
        self.sequence_tag.as_deref()
    }

    fn decode_tagged(&self, tag: &str, text: &str) -> Option<ScalarValue> {
        if tag == STR_LONG_TAG {
            return Some(ScalarValue::Str(text.to_string()));
        }
        self.rules
            .iter()
            .filter(|rule| rule.tag() == tag)
            .find(|rule| rule.matches(text))
            .and_then(|rule| rule.decode(text))
    }

    fn is_tag_implicit(&self, tag: &str) -> bool {
        tag == STR_LONG_TAG
            || self.mapping_tag.as_deref() == Some(tag)
            || self.sequence_tag.as_deref() == Some(tag)
            || self.rules.iter().any(|rule| rule.tag() == tag)
    }

    fn default_tag_for_value(&self, value: &ScalarValue) -> Option<&str> {
        if let ScalarValue::Str(_) = value {
            return Some(STR_LONG_TAG);
        }
        self.rules
            .iter()
            .find(|rule| {
                let probe = rule_probe(value);
                rule.matches(probe)
                    && rule
                        .decode(probe)
                        .is_some_and(|decoded| decoded.kind() == value.kind())
            })
            .map(ScalarRule::tag)
    }
}

/// A canonical literal for each value kind, used to find the rule that
/// produces that kind
fn rule_probe(value: &ScalarValue) -> &'static str {
    match value {
        ScalarValue::Null => "null",
        ScalarValue::Bool(_) => "true",
        ScalarValue::Int(_) => "0",
        ScalarValue::Float(_) => "0.5",
        ScalarValue::Timestamp(_) => "2001-01-01",
        ScalarValue::Str(_) => "",
    }
}

/// Wraps a resolver with the failsafe string rule.
///
/// The inner resolver is always asked first. Only when it reports no match
/// and `allow_failsafe_string` is set does the scalar resolve to `!!str`.
#[derive(Debug, Clone)]
pub struct StringFallback<R> {
    inner: R,
    allow_failsafe_string: bool,
}

impl<R: TagResolver> StringFallback<R> {
    pub fn new(inner: R, allow_failsafe_string: bool) -> Self {
        Self {
            inner,
            allow_failsafe_string,
        }
    }

    pub fn allows_failsafe_string(&self) -> bool {
        self.allow_failsafe_string
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }
}

impl StringFallback<BaseSchema> {
    pub fn name(&self) -> &str {
        self.inner.name()
    }
}

impl<R: TagResolver> TagResolver for StringFallback<R> {
    fn registry(&self) -> &TagRegistry {
        self.inner.registry()
    }

    fn try_resolve_scalar(&self, scalar: &Scalar, parse_value: bool) -> Option<ResolvedScalar> {
        if let Some(resolved) = self.inner.try_resolve_scalar(scalar, parse_value) {
            return Some(resolved);
        }

        if !self.allow_failsafe_string {
            trace!("no rule matched and string fallback disabled");
            return None;
        }

        trace!("no rule matched; falling back to str");
        Some(ResolvedScalar::new(
            STR_LONG_TAG,
            parse_value.then(|| ScalarValue::Str(scalar.value.clone())),
        ))
    }

    fn default_tag_for_mapping(&self) -> Option<&str> {
        self.inner.default_tag_for_mapping()
    }

    fn default_tag_for_sequence(&self) -> Option<&str> {
        self.inner.default_tag_for_sequence()
    }

    fn decode_tagged(&self, tag: &str, text: &str) -> Option<ScalarValue> {
        self.inner.decode_tagged(tag, text)
    }

    fn is_tag_implicit(&self, tag: &str) -> bool {
        self.inner.is_tag_implicit(tag)
    }

    fn default_tag_for_value(&self, value: &ScalarValue) -> Option<&str> {
        self.inner.default_tag_for_value(value)
    }
}

/// A sealed schema with its failsafe string policy
pub type Schema = StringFallback<BaseSchema>;

/// Built-in schema variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    /// map, seq and str only; every scalar is a string
    Failsafe,
    /// JSON-compatible literals; no string fallback
    Json,
    /// YAML 1.2 core schema
    #[default]
    Core,
    /// Core plus YAML 1.1 extras (timestamps, merge keys, base 2 and 60)
    Extended,
}

impl SchemaKind {
    pub const ALL: [SchemaKind; 4] = [
        SchemaKind::Failsafe,
        SchemaKind::Json,
        SchemaKind::Core,
        SchemaKind::Extended,
    ];

    /// Builder preloaded with this variant's aliases, rules and defaults
    pub fn builder(&self) -> Result<SchemaBuilder> {
        match self {
            SchemaKind::Failsafe => failsafe::builder(),
            SchemaKind::Json => json::builder(),
            SchemaKind::Core => core_schema::builder(),
            SchemaKind::Extended => extended::builder(),
        }
    }

    pub fn build(&self) -> Result<Schema> {
        self.builder()?.build()
    }

    /// Whether the variant falls back to `!!str` unless configured otherwise
    pub fn default_allow_failsafe_string(&self) -> bool {
        !matches!(self, SchemaKind::Json)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaKind::Failsafe => "failsafe",
            SchemaKind::Json => "json",
            SchemaKind::Core => "core",
            SchemaKind::Extended => "extended",
        }
    }
}

impl std::fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaKind {
    type Err = YamlTagError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "failsafe" => Ok(SchemaKind::Failsafe),
            "json" => Ok(SchemaKind::Json),
            "core" => Ok(SchemaKind::Core),
            "extended" => Ok(SchemaKind::Extended),
            _ => Err(YamlTagError::UnknownSchema(s.to_string())),
        }
    }
}
