//! Core schema plus the YAML 1.1 type repository extras
//!
//! Rules here run after every core rule, so they only see scalars the core
//! schema would otherwise have turned into strings.

use super::{core_schema, Schema, SchemaBuilder};
use crate::domain::rules::{
    decode_binary, decode_bool, decode_float, decode_int, decode_sexagesimal_float,
    decode_sexagesimal_int, decode_timestamp, decode_verbatim, ScalarRule,
};
use crate::domain::tags::alias::{
    BOOL_LONG_TAG, FLOAT_LONG_TAG, INT_LONG_TAG, MERGE_LONG_TAG, MERGE_SHORT_TAG,
    TIMESTAMP_LONG_TAG, TIMESTAMP_SHORT_TAG,
};
use crate::error::Result;

const TIMESTAMP_PATTERN: &str = concat!(
    r"[0-9][0-9][0-9][0-9]-[0-9][0-9]-[0-9][0-9]",
    r"|[0-9][0-9][0-9][0-9]-[0-9][0-9]?-[0-9][0-9]?",
    r"([Tt]|[ \t]+)[0-9][0-9]?:[0-9][0-9]:[0-9][0-9]",
    r"(\.[0-9]*)?([ \t]*(Z|[-+][0-9][0-9]?(:[0-9][0-9])?))?",
);

pub fn builder() -> Result<SchemaBuilder> {
    let mut builder = core_schema::builder()?.named("extended");
    builder
        .register_tag(TIMESTAMP_SHORT_TAG, TIMESTAMP_LONG_TAG)?
        .register_tag(MERGE_SHORT_TAG, MERGE_LONG_TAG)?;

    builder
        .add_scalar_rule(MERGE_LONG_TAG, "<<", decode_verbatim)?
        .add_scalar_rule(
            BOOL_LONG_TAG,
            "yes|Yes|YES|no|No|NO|on|On|ON|off|Off|OFF",
            decode_bool,
        )?
        .add_rule(ScalarRule::new(INT_LONG_TAG, "[-+]?0b[0-1_]+", decode_binary)?.checked())
        .add_rule(ScalarRule::new(INT_LONG_TAG, "[-+]?(0|[1-9][0-9_]*)", decode_int)?.checked())
        .add_rule(
            ScalarRule::new(
                INT_LONG_TAG,
                "[-+]?[1-9][0-9_]*(:[0-5]?[0-9])+",
                decode_sexagesimal_int,
            )?
            .checked(),
        )
        .add_rule(
            ScalarRule::new(
                FLOAT_LONG_TAG,
                r"[-+]?([0-9][0-9_]*)?\.[0-9_]*([eE][-+][0-9]+)?",
                decode_float,
            )?
            .checked(),
        )
        .add_rule(
            ScalarRule::new(
                FLOAT_LONG_TAG,
                r"[-+]?[0-9][0-9_]*(:[0-5]?[0-9])+\.[0-9_]*",
                decode_sexagesimal_float,
            )?
            .checked(),
        )
        .add_rule(ScalarRule::new(TIMESTAMP_LONG_TAG, TIMESTAMP_PATTERN, decode_timestamp)?.checked())
        .allow_failsafe_string(true);

    Ok(builder)
}

pub fn schema() -> Result<Schema> {
    builder()?.build()
}
