//! Well-known tag spellings and the short/long alias pair

/// Prefix shared by every tag in the YAML type repository
pub const YAML_TAG_PREFIX: &str = "tag:yaml.org,2002:";

/// Handle that abbreviates [`YAML_TAG_PREFIX`]
pub const SECONDARY_HANDLE: &str = "!!";

/// The non-specific tag carried by quoted and block scalars
pub const NON_SPECIFIC_TAG: &str = "!";

pub const MAP_SHORT_TAG: &str = "!!map";
pub const MAP_LONG_TAG: &str = "tag:yaml.org,2002:map";

pub const SEQ_SHORT_TAG: &str = "!!seq";
pub const SEQ_LONG_TAG: &str = "tag:yaml.org,2002:seq";

pub const STR_SHORT_TAG: &str = "!!str";
pub const STR_LONG_TAG: &str = "tag:yaml.org,2002:str";

pub const NULL_SHORT_TAG: &str = "!!null";
pub const NULL_LONG_TAG: &str = "tag:yaml.org,2002:null";

pub const BOOL_SHORT_TAG: &str = "!!bool";
pub const BOOL_LONG_TAG: &str = "tag:yaml.org,2002:bool";

pub const INT_SHORT_TAG: &str = "!!int";
pub const INT_LONG_TAG: &str = "tag:yaml.org,2002:int";

pub const FLOAT_SHORT_TAG: &str = "!!float";
pub const FLOAT_LONG_TAG: &str = "tag:yaml.org,2002:float";

pub const TIMESTAMP_SHORT_TAG: &str = "!!timestamp";
pub const TIMESTAMP_LONG_TAG: &str = "tag:yaml.org,2002:timestamp";

pub const MERGE_SHORT_TAG: &str = "!!merge";
pub const MERGE_LONG_TAG: &str = "tag:yaml.org,2002:merge";

/// A short/long spelling pair for one tag (e.g. `!!map` / `tag:yaml.org,2002:map`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagAlias {
    pub short: String,
    pub long: String,
}

impl TagAlias {
    pub fn new(short: impl Into<String>, long: impl Into<String>) -> Self {
        Self {
            short: short.into(),
            long: long.into(),
        }
    }

    /// Alias for a tag in the YAML type repository: `!!name` / `tag:yaml.org,2002:name`
    pub fn yaml(name: &str) -> Self {
        Self::new(
            format!("{}{}", SECONDARY_HANDLE, name),
            format!("{}{}", YAML_TAG_PREFIX, name),
        )
    }
}

impl std::fmt::Display for TagAlias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.short, self.long)
    }
}
