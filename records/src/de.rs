//! Lenient field deserializers shared by the record types.
//!
//! The backend is not strict about numeric types: identifiers arrive as
//! strings or integers, counters arrive as integers, floats, `null`, or (for
//! comments) as the embedded comment array itself. Text and status fields
//! that arrive with the wrong JSON type degrade to a default for that row
//! instead of failing the whole batch.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::article::ArticleStatus;

/// Accept a string or integer identifier and render it as a string.
pub(crate) fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(D::Error::custom("expected string or number identifier")),
    }
}

/// Optional variant of [`id_from_string_or_number`]; `null` maps to `None`.
pub(crate) fn opt_id_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        _ => Err(D::Error::custom("expected string or number identifier")),
    }
}

/// Read a non-negative count. Missing, `null`, negative, and non-numeric
/// values collapse to `None`; arrays count their elements.
pub(crate) fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(count_from_value(&value))
}

fn count_from_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return Some(int);
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            number
                .as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f.round() as u64)
        }
        Value::Array(items) => Some(items.len() as u64),
        _ => None,
    }
}

/// Read a text field; `null` and non-scalar values become the empty string.
pub(crate) fn text_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_from_value(Value::deserialize(deserializer)?).unwrap_or_default())
}

/// Optional text field; anything that is not a string or number is `None`.
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_from_value(Value::deserialize(deserializer)?))
}

fn text_from_value(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Read an article status. `null` is absent; unknown strings and values of
/// any other JSON type are [`ArticleStatus::Other`].
pub(crate) fn lenient_status<'de, D>(deserializer: D) -> Result<Option<ArticleStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(raw) => Some(ArticleStatus::parse(&raw).unwrap_or(ArticleStatus::Other)),
        _ => Some(ArticleStatus::Other),
    })
}

/// Tag list; non-string entries are skipped and a non-array is `None`.
pub(crate) fn lenient_tags<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(items.into_iter().filter_map(text_from_value).collect()),
        _ => None,
    })
}
