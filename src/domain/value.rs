//! Decoded scalar values and resolution results

use chrono::{DateTime, Utc};

/// Native primitive a scalar decodes to
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Timestamp(DateTime<Utc>),
}

impl ScalarValue {
    /// Short lowercase name of the value kind
    pub fn kind(&self) -> &'static str {
        match self {
            ScalarValue::Null => "null",
            ScalarValue::Bool(_) => "bool",
            ScalarValue::Int(_) => "int",
            ScalarValue::Float(_) => "float",
            ScalarValue::Str(_) => "str",
            ScalarValue::Timestamp(_) => "timestamp",
        }
    }
}

impl std::fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScalarValue::Null => write!(f, "null"),
            ScalarValue::Bool(b) => write!(f, "{}", b),
            ScalarValue::Int(i) => write!(f, "{}", i),
            ScalarValue::Float(x) if x.is_nan() => write!(f, ".nan"),
            ScalarValue::Float(x) if x.is_infinite() && *x > 0.0 => write!(f, ".inf"),
            ScalarValue::Float(x) if x.is_infinite() => write!(f, "-.inf"),
            ScalarValue::Float(x) => write!(f, "{:?}", x),
            ScalarValue::Str(s) => write!(f, "{:?}", s),
            ScalarValue::Timestamp(ts) => write!(f, "{}", ts.to_rfc3339()),
        }
    }
}

/// Successful scalar resolution.
///
/// `value` is `None` when the caller did not ask for decoding; a scalar that
/// decodes to null carries `Some(ScalarValue::Null)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedScalar {
    /// Long-form tag
    pub tag: String,
    pub value: Option<ScalarValue>,
}

impl ResolvedScalar {
    pub fn new(tag: impl Into<String>, value: Option<ScalarValue>) -> Self {
        Self {
            tag: tag.into(),
            value,
        }
    }
}

/// Outcome of resolving any node event
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Scalar(ResolvedScalar),
    /// Long-form tag of a mapping or sequence
    Collection(String),
}

impl Resolution {
    pub fn tag(&self) -> &str {
        match self {
            Resolution::Scalar(resolved) => &resolved.tag,
            Resolution::Collection(tag) => tag,
        }
    }
}
