//! Error types for yamltag

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for yamltag
#[derive(Debug, Error)]
pub enum YamlTagError {
    #[error("Duplicate tag alias: '{short}' -> '{long}' conflicts with '{existing}'")]
    DuplicateAlias {
        short: String,
        long: String,
        existing: String,
    },

    #[error("Tag registry is sealed; cannot register '{0}'")]
    RegistrySealed(String),

    #[error("Unknown schema: {0}")]
    UnknownSchema(String),

    #[error("Could not resolve implicit tag for scalar: '{0}'")]
    UnresolvedScalar(String),

    #[error("Invalid tag: {0}")]
    InvalidTag(String),

    #[error("Invalid scalar rule pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl YamlTagError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            YamlTagError::DuplicateAlias { .. } => 2,
            YamlTagError::UnresolvedScalar(_) => 3,
            YamlTagError::UnknownSchema(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            YamlTagError::DuplicateAlias { short, .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Each short tag may map to exactly one long tag (and vice versa)\n\
                    • Remove or rename the conflicting '{}' entry in your [[tags]] table\n\
                    • Built-in tags (!!map, !!seq, !!str, ...) cannot be redefined",
                    self, short
                )
            }
            YamlTagError::UnknownSchema(name) => {
                format!(
                    "Unknown schema: '{}'\n\n\
                    Valid schemas: failsafe, json, core, extended\n\
                    Example: yamltag --schema core resolve 42",
                    name
                )
            }
            YamlTagError::UnresolvedScalar(value) => {
                format!(
                    "Could not resolve implicit tag for scalar: '{}'\n\n\
                    Suggestions:\n\
                    • The json schema has no string fallback; quote the value or use --schema core\n\
                    • Drop --no-fallback to let unmatched scalars resolve to !!str",
                    value
                )
            }
            YamlTagError::ConfigNotFound(path) => {
                format!(
                    "Configuration file not found: {}\n\n\
                    Suggestions:\n\
                    • Check the path passed to --config\n\
                    • Omit --config to use the built-in core schema",
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using YamlTagError
pub type Result<T> = std::result::Result<T, YamlTagError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_alias_suggestion() {
        let err = YamlTagError::DuplicateAlias {
            short: "!!map".to_string(),
            long: "tag:custom,2020:map".to_string(),
            existing: "tag:yaml.org,2002:map".to_string(),
        };
        let msg = err.display_with_suggestions();
        assert!(msg.contains("tag:custom,2020:map"));
        assert!(msg.contains("[[tags]]"));
        assert!(msg.contains("Suggestions"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_unknown_schema_lists_valid_schemas() {
        let err = YamlTagError::UnknownSchema("yaml11".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("failsafe, json, core, extended"));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_unresolved_scalar_suggestions() {
        let err = YamlTagError::UnresolvedScalar("hello world".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("--no-fallback"));
        assert!(msg.contains("json schema"));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = YamlTagError::Config("bad value".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Configuration error: bad value");
        assert_eq!(err.exit_code(), 1);
    }
}
