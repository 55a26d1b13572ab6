use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts the difficulty as a string, a number (kept as its decimal text), or null.
pub fn deserialize_difficulty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        _ => Err(Error::custom("difficulty must be a string or number")),
    }
}

/// Treats an explicit `null` the same as a missing field.
pub fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
