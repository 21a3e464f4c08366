//! Lenient field deserializers for attributes editors write in more than one shape.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts `"600"`, `600` or `null` and always yields a string.
pub(crate) fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
