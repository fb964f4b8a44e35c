//! Schema selection use case

use crate::domain::{Schema, SchemaKind};
use crate::error::Result;
use crate::infrastructure::SchemaConfig;
use std::path::PathBuf;
use tracing::debug;

/// Where the schema comes from and which overrides apply
#[derive(Debug, Clone, Default)]
pub struct SchemaOptions {
    /// TOML file to load; built-in defaults when absent
    pub config_path: Option<PathBuf>,
    /// Variant override (command line or environment)
    pub kind: Option<SchemaKind>,
    /// Force the string fallback off
    pub no_fallback: bool,
}

/// Resolve options into a sealed schema
pub fn load_schema(options: &SchemaOptions) -> Result<Schema> {
    let mut config = match &options.config_path {
        Some(path) => {
            debug!(path = %path.display(), "loading schema config");
            SchemaConfig::load_from_file(path)?
        }
        None => SchemaConfig::default(),
    };

    if let Some(kind) = options.kind {
        config.schema = kind;
    }
    if options.no_fallback {
        config.allow_failsafe_string = Some(false);
    }

    config.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Scalar, TagResolver};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_to_core() {
        let schema = load_schema(&SchemaOptions::default()).unwrap();
        assert_eq!(schema.name(), "core");
        assert!(schema.allows_failsafe_string());
    }

    #[test]
    fn test_kind_overrides_config_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("yamltag.toml");
        fs::write(&path, "schema = \"json\"\n").unwrap();

        let options = SchemaOptions {
            config_path: Some(path),
            kind: Some(SchemaKind::Failsafe),
            no_fallback: false,
        };
        let schema = load_schema(&options).unwrap();
        assert_eq!(schema.name(), "failsafe");
    }

    #[test]
    fn test_no_fallback_flag() {
        let options = SchemaOptions {
            no_fallback: true,
            ..SchemaOptions::default()
        };
        let schema = load_schema(&options).unwrap();
        assert!(schema.try_resolve_scalar(&Scalar::plain("abc"), true).is_none());
    }
}
