//! Numeric coercion
//!
//! Prices and quantities arrive from places the crate does not control: the
//! persisted cart blob and spreadsheet cells. Every one of them is read
//! through [`numeric`], which follows JavaScript's `Number(x) || default` rule.

use std::str::FromStr;

use rust_decimal::{
    Decimal,
    prelude::{FromPrimitive, ToPrimitive},
};
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

/// Coerce a loosely-typed value into a decimal.
///
/// - numbers pass through
/// - strings are trimmed and read as a JavaScript number literal: decimal or
///   scientific notation, or a `0x`/`0o`/`0b` integer
/// - `true` is one
///
/// Everything that would read as zero or not as a number yields `default`:
/// zero itself, blank strings, `false`, `null`, objects, arrays, non-finite
/// values and values outside the [`Decimal`] range.
pub fn numeric(value: &Value, default: Decimal) -> Decimal {
    let number = match value {
        Value::Number(number) => number
            .as_f64()
            .and_then(|float| exact_or_float(&number.to_string(), float)),
        Value::String(text) => parse_number(text.trim()),
        Value::Bool(true) => Some(Decimal::ONE),
        Value::Bool(false) | Value::Null | Value::Array(_) | Value::Object(_) => None,
    };

    number.filter(|number| !number.is_zero()).unwrap_or(default)
}

/// Coerce a loosely-typed value into a whole quantity, truncating toward zero.
pub fn numeric_qty(value: &Value, default: i64) -> i64 {
    numeric(value, Decimal::from(default))
        .trunc()
        .to_i64()
        .unwrap_or(default)
}

/// Coerce a loosely-typed value into display text.
///
/// Numbers print the way a spreadsheet export would (`7.0` becomes `"7"`).
pub fn text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => {
            let raw = number.to_string();

            parse_decimal(&raw).map_or(raw, |decimal| decimal.normalize().to_string())
        }
        Value::Bool(flag) => flag.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

fn parse_number(text: &str) -> Option<Decimal> {
    if let Some(number) = parse_prefixed_integer(text) {
        return Some(number);
    }

    // `f64` shares the literal grammar: no digit separators, no trailing junk.
    let float = text.parse::<f64>().ok().filter(|float| float.is_finite())?;

    exact_or_float(text, float)
}

fn parse_prefixed_integer(text: &str) -> Option<Decimal> {
    let radix = match text.get(..2)?.to_ascii_lowercase().as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };

    let digits = text.get(2..)?;

    if digits.is_empty() || !digits.chars().all(|digit| digit.is_digit(radix)) {
        return None;
    }

    u128::from_str_radix(digits, radix)
        .ok()
        .and_then(Decimal::from_u128)
}

fn exact_or_float(text: &str, float: f64) -> Option<Decimal> {
    parse_decimal(text).or_else(|| Decimal::from_f64(float))
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_err| Decimal::from_scientific(text))
        .ok()
}

/// Serialize a decimal as a JSON number when an `f64` holds it exactly, and as
/// its decimal string otherwise.
pub(crate) fn serialize_decimal<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value
        .to_f64()
        .filter(|float| parse_decimal(&float.to_string()) == Some(*value))
    {
        Some(float) => serializer.serialize_f64(float),
        None => serializer.serialize_str(&value.to_string()),
    }
}

/// Deserialize any JSON value as a decimal, defaulting to zero.
pub(crate) fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;

    Ok(numeric(&value, Decimal::ZERO))
}

/// Deserialize any JSON value as a whole quantity, defaulting to zero.
pub(crate) fn deserialize_qty<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;

    Ok(numeric_qty(&value, 0))
}

/// Deserialize any JSON value as display text, defaulting to an empty string.
pub(crate) fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;

    Ok(text(&value))
}
