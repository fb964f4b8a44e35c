//! Failsafe schema
//!
//! Works with any document: mappings are `!!map`, sequences are `!!seq` and
//! every scalar is a `!!str`. The schema has no scalar rules of its own, so
//! plain scalars resolve only through the string fallback.

use super::{Schema, SchemaBuilder};
use crate::domain::tags::alias::{
    MAP_LONG_TAG, MAP_SHORT_TAG, SEQ_LONG_TAG, SEQ_SHORT_TAG, STR_LONG_TAG, STR_SHORT_TAG,
};
use crate::error::Result;

/// Builder holding the failsafe aliases and collection defaults
pub fn builder() -> Result<SchemaBuilder> {
    let mut builder = SchemaBuilder::new("failsafe");
    builder
        .register_tag(MAP_SHORT_TAG, MAP_LONG_TAG)?
        .register_tag(SEQ_SHORT_TAG, SEQ_LONG_TAG)?
        .register_tag(STR_SHORT_TAG, STR_LONG_TAG)?
        .mapping_tag(MAP_LONG_TAG)
        .sequence_tag(SEQ_LONG_TAG)
        .allow_failsafe_string(true);
    Ok(builder)
}

pub fn schema() -> Result<Schema> {
    builder()?.build()
}
