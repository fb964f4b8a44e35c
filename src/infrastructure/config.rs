//! Configuration management

use crate::domain::{Schema, SchemaKind, TagAlias};
use crate::error::{Result, YamlTagError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "yamltag.toml";

/// A custom alias declared in the `[[tags]]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagEntry {
    pub short: String,
    pub long: String,
}

impl From<&TagEntry> for TagAlias {
    fn from(entry: &TagEntry) -> Self {
        TagAlias::new(entry.short.clone(), entry.long.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaConfig {
    #[serde(default)]
    pub schema: SchemaKind,

    /// Overrides the variant's default string fallback when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_failsafe_string: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagEntry>,
}

impl SchemaConfig {
    /// Create a config for a built-in variant with no overrides
    pub fn new(schema: SchemaKind) -> Self {
        SchemaConfig {
            schema,
            allow_failsafe_string: None,
            tags: Vec::new(),
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                YamlTagError::ConfigNotFound(path.to_path_buf())
            } else {
                YamlTagError::Io(e)
            }
        })?;

        Self::from_toml_str(&contents).map_err(|e| {
            YamlTagError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Effective fallback setting after applying the override
    pub fn allows_failsafe_string(&self) -> bool {
        self.allow_failsafe_string
            .unwrap_or_else(|| self.schema.default_allow_failsafe_string())
    }

    /// Construct and seal the configured schema
    pub fn build(&self) -> Result<Schema> {
        let mut builder = self.schema.builder()?;

        for entry in &self.tags {
            builder.register_alias(&TagAlias::from(entry))?;
        }

        if let Some(allow) = self.allow_failsafe_string {
            if allow != self.schema.default_allow_failsafe_string() {
                warn!(
                    schema = %self.schema,
                    allow_failsafe_string = allow,
                    "overriding default string fallback"
                );
            }
        }
        builder.allow_failsafe_string(self.allows_failsafe_string());

        debug!(schema = %self.schema, custom_tags = self.tags.len(), "building schema from config");
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Scalar, TagResolver};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_core() {
        let config = SchemaConfig::default();
        assert_eq!(config.schema, SchemaKind::Core);
        assert!(config.allows_failsafe_string());
    }

    #[test]
    fn test_parse_full_config() {
        let config = SchemaConfig::from_toml_str(
            r#"
schema = "json"
allow_failsafe_string = true

[[tags]]
short = "!point"
long = "tag:example.com,2024:point"
"#,
        )
        .unwrap();

        assert_eq!(config.schema, SchemaKind::Json);
        assert_eq!(config.allow_failsafe_string, Some(true));
        assert_eq!(config.tags.len(), 1);
        assert!(config.allows_failsafe_string());
    }

    #[test]
    fn test_unknown_schema_rejected() {
        let result = SchemaConfig::from_toml_str("schema = \"yaml11\"");
        assert!(matches!(result, Err(YamlTagError::TomlDeserialize(_))));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(SchemaConfig::from_toml_str("fallback = true").is_err());
    }

    #[test]
    fn test_build_registers_custom_tags() {
        let mut config = SchemaConfig::new(SchemaKind::Failsafe);
        config.tags.push(TagEntry {
            short: "!point".to_string(),
            long: "tag:example.com,2024:point".to_string(),
        });

        let schema = config.build().unwrap();
        assert_eq!(schema.expand_tag("!point"), "tag:example.com,2024:point");
        assert!(schema.registry().is_sealed());
    }

    #[test]
    fn test_build_rejects_conflicting_custom_tag() {
        let mut config = SchemaConfig::new(SchemaKind::Core);
        config.tags.push(TagEntry {
            short: "!!map".to_string(),
            long: "tag:custom,2020:map".to_string(),
        });

        assert!(matches!(
            config.build(),
            Err(YamlTagError::DuplicateAlias { .. })
        ));
    }

    #[test]
    fn test_override_disables_fallback() {
        let config = SchemaConfig {
            schema: SchemaKind::Core,
            allow_failsafe_string: Some(false),
            tags: Vec::new(),
        };
        let schema = config.build().unwrap();
        assert!(schema.try_resolve_scalar(&Scalar::plain("hello"), true).is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "schema = \"extended\"").unwrap();

        let config = SchemaConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.schema, SchemaKind::Extended);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let result = SchemaConfig::load_from_file(&temp.path().join(CONFIG_FILE_NAME));

        match result.unwrap_err() {
            YamlTagError::ConfigNotFound(_) => {}
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = SchemaConfig {
            schema: SchemaKind::Extended,
            allow_failsafe_string: Some(false),
            tags: vec![TagEntry {
                short: "!p".to_string(),
                long: "tag:example.com,2024:p".to_string(),
            }],
        };
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(SchemaConfig::from_toml_str(&text).unwrap(), config);
    }
}
