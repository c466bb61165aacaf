//! Serde helpers for loosely-typed dataset fields.
//!
//! The datasets were produced by several scripts, so the same field shows up
//! as a string in one file and a number or list in another. These helpers
//! coerce such values into one Rust type at load time.

use serde::Deserialize;
use serde::de::{Deserializer, Error};
use serde_json::Value;

/// String, number or null, read as a string (`null` becomes `""`).
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    scalar_to_string(value).map_err(D::Error::custom)
}

/// Like [`string_or_number`], but `null` stays `None` so callers can tell an
/// absent value from an empty one.
pub fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        other => scalar_to_string(other).map(Some).map_err(D::Error::custom),
    }
}

/// Non-negative integer, or a string holding one.
pub fn integer<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| D::Error::custom(format!("expected a non-negative integer, got {}", n))),
        Value::String(s) => s
            .trim()
            .parse::<u32>()
            .map_err(|_| D::Error::custom(format!("expected a non-negative integer, got {:?}", s))),
        other => Err(D::Error::custom(format!(
            "expected a non-negative integer, got {}",
            other
        ))),
    }
}

/// A string or a list of strings; lists are joined with single spaces.
pub fn text_or_list<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => {
            let parts = items
                .into_iter()
                .map(scalar_to_string)
                .collect::<Result<Vec<_>, _>>()
                .map_err(D::Error::custom)?;
            Ok(parts.join(" "))
        }
        other => scalar_to_string(other).map_err(D::Error::custom),
    }
}

/// A scalar or a list of scalars, read as a list of strings. A scalar becomes
/// a one-element list and `null` an empty one.
pub fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .into_iter()
            .map(scalar_to_string)
            .collect::<Result<Vec<_>, _>>()
            .map_err(D::Error::custom),
        other => scalar_to_string(other).map(|s| vec![s]).map_err(D::Error::custom),
    }
}

/// A JSON array kept as raw values; `null` reads as an empty list.
pub fn list_or_null<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => Ok(items),
        other => Err(D::Error::custom(format!("expected a list, got {}", other))),
    }
}

fn scalar_to_string(value: Value) -> Result<String, String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(format!("expected a string or number, got {}", other)),
    }
}
