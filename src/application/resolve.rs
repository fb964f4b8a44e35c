//! Scalar resolution use case

use crate::domain::{ResolvedScalar, Scalar, TagResolver};
use crate::error::{Result, YamlTagError};
use tracing::debug;

/// How the input scalars should be presented to the schema
#[derive(Debug, Clone, Copy)]
pub struct ResolveOptions {
    /// Treat inputs as double-quoted scalars
    pub quoted: bool,
    /// Decode values as well as tags
    pub parse_value: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            quoted: false,
            parse_value: true,
        }
    }
}

/// One input scalar and its resolution
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarReport {
    pub input: String,
    pub resolved: ResolvedScalar,
}

/// Service for resolving a batch of scalars against one schema
pub struct ResolveService<R: TagResolver> {
    schema: R,
}

impl<R: TagResolver> ResolveService<R> {
    pub fn new(schema: R) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &R {
        &self.schema
    }

    /// Resolve every value; the first unresolved scalar aborts with
    /// `UnresolvedScalar`
    pub fn execute(&self, values: &[String], options: ResolveOptions) -> Result<Vec<ScalarReport>> {
        let mut reports = Vec::with_capacity(values.len());

        for value in values {
            let scalar = if options.quoted {
                Scalar::quoted(value.as_str())
            } else {
                Scalar::plain(value.as_str())
            };

            let resolved = self
                .schema
                .try_resolve_scalar(&scalar, options.parse_value)
                .ok_or_else(|| YamlTagError::UnresolvedScalar(value.clone()))?;

            debug!(input = %value, tag = %resolved.tag, "resolved scalar");
            reports.push(ScalarReport {
                input: value.clone(),
                resolved,
            });
        }

        Ok(reports)
    }
}
