//! Field decoders that turn `null` or wrong-typed values into defaults.
//!
//! The upstream document is duck-typed; a bad field becomes a blank in the
//! rendered page instead of failing the whole catalog.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode `T`, falling back to `T::default()` on any type mismatch.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Decode a list element by element. A non-array yields an empty list and a
/// bad element yields `T::default()` in its slot.
pub fn seq_or_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(items_or_default(value))
}

pub(crate) fn items_or_default<T>(value: Value) -> Vec<T>
where
    T: DeserializeOwned + Default,
{
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| T::deserialize(item).unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    }
}
