//! Scalar matching rules
//!
//! A rule pairs an anchored regular expression with a decoder. Rules are
//! pure: matching and decoding depend only on the scalar text. Schemas keep
//! them in an ordered list and the first rule that matches decides the tag.

use crate::domain::value::ScalarValue;
use crate::error::Result;
use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use regex::Regex;
use std::sync::OnceLock;

/// Decodes the text of a scalar that matched a rule's pattern
pub type Decoder = fn(&str) -> Option<ScalarValue>;

/// One implicit-typing rule for plain scalars
#[derive(Clone)]
pub struct ScalarRule {
    tag: String,
    pattern: Regex,
    decoder: Decoder,
    /// When set, a scalar only matches if it also decodes
    checked: bool,
}

impl ScalarRule {
    /// Create a rule. `pattern` is anchored at both ends.
    pub fn new(tag: impl Into<String>, pattern: &str, decoder: Decoder) -> Result<Self> {
        let pattern = Regex::new(&format!("^(?:{})$", pattern))?;
        Ok(Self {
            tag: tag.into(),
            pattern,
            decoder,
            checked: false,
        })
    }

    /// Require the text to decode for the rule to match.
    ///
    /// Used for literals whose grammar accepts values the decoder cannot
    /// represent (out-of-range integers, impossible dates). Such scalars
    /// then fall through to later rules whether or not values are requested.
    pub fn checked(mut self) -> Self {
        self.checked = true;
        self
    }

    /// Long-form tag produced by this rule
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text) && (!self.checked || (self.decoder)(text).is_some())
    }

    /// Decode text already known to match
    pub fn decode(&self, text: &str) -> Option<ScalarValue> {
        (self.decoder)(text)
    }
}

impl std::fmt::Debug for ScalarRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalarRule")
            .field("tag", &self.tag)
            .field("pattern", &self.pattern.as_str())
            .field("checked", &self.checked)
            .finish()
    }
}

pub fn decode_null(_: &str) -> Option<ScalarValue> {
    Some(ScalarValue::Null)
}

pub fn decode_bool(text: &str) -> Option<ScalarValue> {
    match text.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" => Some(ScalarValue::Bool(true)),
        "false" | "no" | "off" => Some(ScalarValue::Bool(false)),
        _ => None,
    }
}

pub fn decode_int(text: &str) -> Option<ScalarValue> {
    let cleaned = text.replace('_', "");
    let digits = cleaned.strip_prefix('+').unwrap_or(&cleaned);
    digits.parse::<i64>().ok().map(ScalarValue::Int)
}

/// Integer with a radix prefix (`0o`, `0x`, `0b`) and optional sign
fn decode_radix(text: &str, prefix: &str, radix: u32) -> Option<ScalarValue> {
    let cleaned = text.replace('_', "");
    let (negative, unsigned) = split_sign(&cleaned);
    let digits = unsigned.strip_prefix(prefix)?;
    let magnitude = i64::from_str_radix(digits, radix).ok()?;
    Some(ScalarValue::Int(if negative { -magnitude } else { magnitude }))
}

pub fn decode_octal(text: &str) -> Option<ScalarValue> {
    decode_radix(text, "0o", 8)
}

pub fn decode_hex(text: &str) -> Option<ScalarValue> {
    decode_radix(text, "0x", 16)
}

pub fn decode_binary(text: &str) -> Option<ScalarValue> {
    decode_radix(text, "0b", 2)
}

pub fn decode_float(text: &str) -> Option<ScalarValue> {
    let cleaned = text.replace('_', "");
    cleaned.parse::<f64>().ok().map(ScalarValue::Float)
}

pub fn decode_infinity(text: &str) -> Option<ScalarValue> {
    let (negative, _) = split_sign(text);
    Some(ScalarValue::Float(if negative {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    }))
}

pub fn decode_nan(_: &str) -> Option<ScalarValue> {
    Some(ScalarValue::Float(f64::NAN))
}

/// Base 60 integer, e.g. `190:20:30`
pub fn decode_sexagesimal_int(text: &str) -> Option<ScalarValue> {
    let cleaned = text.replace('_', "");
    let (negative, unsigned) = split_sign(&cleaned);
    let mut value: i64 = 0;
    for part in unsigned.split(':') {
        let digit: i64 = part.parse().ok()?;
        value = value.checked_mul(60)?.checked_add(digit)?;
    }
    Some(ScalarValue::Int(if negative { -value } else { value }))
}

/// Base 60 float, e.g. `1:30.5`
pub fn decode_sexagesimal_float(text: &str) -> Option<ScalarValue> {
    let cleaned = text.replace('_', "");
    let (negative, unsigned) = split_sign(&cleaned);
    let mut value = 0.0_f64;
    for part in unsigned.split(':') {
        let digit: f64 = part.parse().ok()?;
        value = value * 60.0 + digit;
    }
    Some(ScalarValue::Float(if negative { -value } else { value }))
}

/// The scalar text itself, as a string value
pub fn decode_verbatim(text: &str) -> Option<ScalarValue> {
    Some(ScalarValue::Str(text.to_string()))
}

fn timestamp_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(
            r"^(?P<year>[0-9]{4})-(?P<month>[0-9]{1,2})-(?P<day>[0-9]{1,2})(?:(?:[Tt]|[ \t]+)(?P<hour>[0-9]{1,2}):(?P<minute>[0-9]{2}):(?P<second>[0-9]{2})(?:\.(?P<fraction>[0-9]*))?(?:[ \t]*(?P<tz>Z|[-+][0-9]{1,2}(?::[0-9]{2})?))?)?$",
        )
        .unwrap()
    })
}

/// YAML 1.1 timestamp. Values without a zone are taken as UTC.
pub fn decode_timestamp(text: &str) -> Option<ScalarValue> {
    let caps = timestamp_regex().captures(text)?;
    let number = |name: &str| -> Option<u32> { caps.name(name)?.as_str().parse().ok() };

    let date = NaiveDate::from_ymd_opt(
        caps["year"].parse().ok()?,
        number("month")?,
        number("day")?,
    )?;

    let Some(hour) = number("hour") else {
        let midnight = date.and_hms_opt(0, 0, 0)?;
        return Some(ScalarValue::Timestamp(Utc.from_utc_datetime(&midnight)));
    };

    let nanos = match caps.name("fraction") {
        Some(fraction) => fraction_to_nanos(fraction.as_str())?,
        None => 0,
    };
    let time = NaiveTime::from_hms_nano_opt(hour, number("minute")?, number("second")?, nanos)?;
    let local = NaiveDateTime::new(date, time);

    let offset = match caps.name("tz").map(|m| m.as_str()) {
        None | Some("Z") => FixedOffset::east_opt(0)?,
        Some(tz) => parse_offset(tz)?,
    };

    let instant = offset.from_local_datetime(&local).single()?;
    Some(ScalarValue::Timestamp(instant.with_timezone(&Utc)))
}

fn fraction_to_nanos(fraction: &str) -> Option<u32> {
    let mut digits: String = fraction.chars().take(9).collect();
    while digits.len() < 9 {
        digits.push('0');
    }
    digits.parse().ok()
}

/// `+5`, `-05:30`
fn parse_offset(tz: &str) -> Option<FixedOffset> {
    let (negative, unsigned) = split_sign(tz);
    let (hours, minutes) = match unsigned.split_once(':') {
        Some((h, m)) => (h.parse::<i32>().ok()?, m.parse::<i32>().ok()?),
        None => (unsigned.parse::<i32>().ok()?, 0),
    };
    let seconds = hours * 3600 + minutes * 60;
    FixedOffset::east_opt(if negative { -seconds } else { seconds })
}

fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else {
        (false, text.strip_prefix('+').unwrap_or(text))
    }
}
