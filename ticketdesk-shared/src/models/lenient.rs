//! Field deserializers for records the API fills in inconsistently.
//!
//! One malformed row must not reject a whole ticket list, so these read
//! `null` and unparseable values as "absent" instead of failing.

use serde::{Deserialize, Deserializer};

use super::Timestamp;

/// Read an explicit `null` as the type's default.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Read a timestamp, treating `null`, non-strings and unparseable text as
/// missing.
pub fn optional_timestamp<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(text)) => text.parse().ok(),
        _ => None,
    })
}
