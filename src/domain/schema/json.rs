//! JSON schema
//!
//! Extends the failsafe schema with the literals JSON understands: `null`,
//! `true`/`false`, integers and floats in JSON syntax. There is no string
//! fallback, so any other plain scalar is left unresolved.

use super::{failsafe, Schema, SchemaBuilder};
use crate::domain::rules::{decode_bool, decode_float, decode_int, decode_null, ScalarRule};
use crate::domain::tags::alias::{
    BOOL_LONG_TAG, BOOL_SHORT_TAG, FLOAT_LONG_TAG, FLOAT_SHORT_TAG, INT_LONG_TAG, INT_SHORT_TAG,
    NULL_LONG_TAG, NULL_SHORT_TAG,
};
use crate::error::Result;

/// Register the `null`, `bool`, `int` and `float` aliases
pub fn register_scalar_tags(builder: &mut SchemaBuilder) -> Result<()> {
    builder
        .register_tag(NULL_SHORT_TAG, NULL_LONG_TAG)?
        .register_tag(BOOL_SHORT_TAG, BOOL_LONG_TAG)?
        .register_tag(INT_SHORT_TAG, INT_LONG_TAG)?
        .register_tag(FLOAT_SHORT_TAG, FLOAT_LONG_TAG)?;
    Ok(())
}

pub fn builder() -> Result<SchemaBuilder> {
    let mut builder = failsafe::builder()?.named("json");
    register_scalar_tags(&mut builder)?;

    builder
        .add_scalar_rule(NULL_LONG_TAG, "null", decode_null)?
        .add_scalar_rule(BOOL_LONG_TAG, "true|false", decode_bool)?
        .add_rule(ScalarRule::new(INT_LONG_TAG, "-?(0|[1-9][0-9]*)", decode_int)?.checked())
        .add_scalar_rule(
            FLOAT_LONG_TAG,
            r"-?(0|[1-9][0-9]*)(\.[0-9]*)?([eE][-+]?[0-9]+)?",
            decode_float,
        )?
        .allow_failsafe_string(false);

    Ok(builder)
}

pub fn schema() -> Result<Schema> {
    builder()?.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::event::Scalar;
    use crate::domain::schema::TagResolver;
    use crate::domain::tags::alias::STR_LONG_TAG;
    use crate::domain::value::ScalarValue;

    fn resolve(text: &str) -> Option<(String, Option<ScalarValue>)> {
        schema()
            .unwrap()
            .try_resolve_scalar(&Scalar::plain(text), true)
            .map(|r| (r.tag, r.value))
    }

    #[test]
    fn test_json_literals() {
        assert_eq!(resolve("null"), Some((NULL_LONG_TAG.to_string(), Some(ScalarValue::Null))));
        assert_eq!(
            resolve("false"),
            Some((BOOL_LONG_TAG.to_string(), Some(ScalarValue::Bool(false))))
        );
        assert_eq!(
            resolve("-12"),
            Some((INT_LONG_TAG.to_string(), Some(ScalarValue::Int(-12))))
        );
        assert_eq!(
            resolve("1.5e3"),
            Some((FLOAT_LONG_TAG.to_string(), Some(ScalarValue::Float(1500.0))))
        );
    }

    #[test]
    fn test_core_only_spellings_do_not_match() {
        for text in ["Null", "~", "", "TRUE", "+1", "0x1F", "0o7", "007", ".inf", "hello"] {
            assert_eq!(resolve(text), None, "text: {:?}", text);
        }
    }

    #[test]
    fn test_out_of_range_integer_is_float() {
        let (tag, value) = resolve("123456789012345678901234567890").unwrap();
        assert_eq!(tag, FLOAT_LONG_TAG);
        assert!(matches!(value, Some(ScalarValue::Float(_))));
    }

    #[test]
    fn test_quoted_scalar_is_string() {
        let resolved = schema()
            .unwrap()
            .try_resolve_scalar(&Scalar::quoted("42"), true)
            .unwrap();
        assert_eq!(resolved.tag, STR_LONG_TAG);
        assert_eq!(resolved.value, Some(ScalarValue::Str("42".to_string())));
    }

    #[test]
    fn test_no_fallback_by_default() {
        assert!(!schema().unwrap().allows_failsafe_string());
    }
}
