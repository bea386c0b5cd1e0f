//! Lenient deserializers for the portal's loosely-typed JSON.
//!
//! Scores and years arrive as JSON strings on some records and as JSON numbers
//! on others. These helpers keep the textual form either way so the value
//! renders exactly as the portal sent it.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn scalar_to_string<E: serde::de::Error>(value: Value) -> Result<Option<String>, E> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(E::custom(format!("expected a string or number, found {other}"))),
    }
}

/// Accepts a string, number, boolean or `null`; `null` becomes an empty string.
pub fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_to_string::<D::Error>(value)?.unwrap_or_default())
}

/// Like [`deserialize_lenient_string`] but keeps `null` as `None`.
///
/// Pair with `#[serde(default)]` so a missing key is also `None`.
pub fn deserialize_optional_lenient_string<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    scalar_to_string::<D::Error>(value)
}

/// A sequence of scalars; `null` is an empty sequence and `null` items become
/// empty strings so positions stay aligned with their parallel sequences.
pub fn deserialize_lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items: Option<Vec<Value>> = Option::deserialize(deserializer)?;
    items
        .unwrap_or_default()
        .into_iter()
        .map(|item| scalar_to_string::<D::Error>(item).map(Option::unwrap_or_default))
        .collect()
}

/// A sequence that may be `null` on the wire.
pub fn deserialize_null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items: Option<Vec<T>> = Option::deserialize(deserializer)?;
    Ok(items.unwrap_or_default())
}

/// An integer sent either as a JSON number or as a numeric string.
pub fn deserialize_lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(0),
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| D::Error::custom(format!("expected an integer, found {n}"))),
        Value::String(s) if s.trim().is_empty() => Ok(0),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("expected an integer, found {s:?}"))),
        other => Err(D::Error::custom(format!("expected an integer, found {other}"))),
    }
}
