//! Key-preserving transforms over maps.

use std::collections::BTreeMap;

use crate::{Error, Result, Value};

/// Build a new map with the same keys as `object` and every value replaced
/// by `f(value, key)`.
///
/// Keys for which `f` returns `None` are left out of the result. Arrays
/// enumerate their indices as keys.
///
/// # Errors
///
/// [`Error::InvalidInput`] when `object` is absent or its keys cannot be
/// enumerated (null and scalars).
pub fn map_values<'a, F>(object: impl Into<Option<&'a Value>>, mut f: F) -> Result<Value>
where
    F: FnMut(&Value, &str) -> Option<Value>,
{
    let entries = object
        .into()
        .and_then(Value::entries)
        .ok_or_else(|| Error::invalid_input("Unable to extract keys from provided object"))?;

    let mapped: BTreeMap<String, Value> = entries
        .into_iter()
        .filter_map(|(key, value)| f(value, &key).map(|v| (key, v)))
        .collect();
    Ok(Value::Map(mapped))
}

/// Build a new map holding only the entries for which `f(value, key)`
/// returns `true`.
///
/// Input whose keys cannot be enumerated yields an empty map.
pub fn filter_object<'a, F>(object: impl Into<Option<&'a Value>>, mut f: F) -> Value
where
    F: FnMut(&Value, &str) -> bool,
{
    let entries = object.into().and_then(Value::entries).unwrap_or_default();
    Value::Map(
        entries
            .into_iter()
            .filter(|(key, value)| f(value, key))
            .map(|(key, value)| (key, value.clone()))
            .collect(),
    )
}
