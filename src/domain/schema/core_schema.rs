//! YAML 1.2 core schema
//!
//! Same tags as the JSON schema but with the more permissive core literals:
//! `~` and the empty scalar are null, booleans and special floats accept
//! three capitalizations, and integers may carry a sign or an octal or
//! hexadecimal prefix. Anything else falls back to `!!str`.

use super::{failsafe, json, Schema, SchemaBuilder};
use crate::domain::rules::{
    decode_bool, decode_float, decode_hex, decode_infinity, decode_int, decode_nan, decode_null,
    decode_octal, ScalarRule,
};
use crate::domain::tags::alias::{BOOL_LONG_TAG, FLOAT_LONG_TAG, INT_LONG_TAG, NULL_LONG_TAG};
use crate::error::Result;

/// Append the core rules in resolution order
pub fn add_core_rules(builder: &mut SchemaBuilder) -> Result<()> {
    builder
        .add_scalar_rule(NULL_LONG_TAG, "null|Null|NULL|~|", decode_null)?
        .add_scalar_rule(
            BOOL_LONG_TAG,
            "true|True|TRUE|false|False|FALSE",
            decode_bool,
        )?
        .add_rule(ScalarRule::new(INT_LONG_TAG, "[-+]?[0-9]+", decode_int)?.checked())
        .add_rule(ScalarRule::new(INT_LONG_TAG, "0o[0-7]+", decode_octal)?.checked())
        .add_rule(ScalarRule::new(INT_LONG_TAG, "0x[0-9a-fA-F]+", decode_hex)?.checked())
        .add_scalar_rule(
            FLOAT_LONG_TAG,
            r"[-+]?(\.[0-9]+|[0-9]+(\.[0-9]*)?)([eE][-+]?[0-9]+)?",
            decode_float,
        )?
        .add_scalar_rule(FLOAT_LONG_TAG, r"[-+]?(\.inf|\.Inf|\.INF)", decode_infinity)?
        .add_scalar_rule(FLOAT_LONG_TAG, r"\.nan|\.NaN|\.NAN", decode_nan)?;
    Ok(())
}

pub fn builder() -> Result<SchemaBuilder> {
    let mut builder = failsafe::builder()?.named("core");
    json::register_scalar_tags(&mut builder)?;
    add_core_rules(&mut builder)?;
    builder.allow_failsafe_string(true);
    Ok(builder)
}

pub fn schema() -> Result<Schema> {
    builder()?.build()
}
