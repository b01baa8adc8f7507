//! Reading and writing nested values by dotted path.

use serde::{Deserialize, Serialize};

use crate::predicates::is_null_or_undefined;
use crate::{Error, Path, Result, Value};

/// Options for [`set`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetOptions {
    /// Synthesize empty maps for missing intermediate containers instead of
    /// failing with [`Error::PathNotFound`].
    pub create: bool,
}

impl SetOptions {
    pub fn create() -> Self {
        SetOptions { create: true }
    }
}

/// Resolve `path` inside `object`.
///
/// Traversal stops as soon as an intermediate value is null, a segment is
/// missing, or the current value cannot be indexed. `default` is returned
/// whenever the resolved value is null or absent; otherwise the resolved
/// value is returned. The empty path resolves to `object` itself.
///
/// ```rust
/// use grabbag_core::{get, Value};
///
/// let tree: Value = serde_json::json!({"chat": {"creative": {"channel": 1234}}}).into();
/// assert_eq!(get(&tree, "chat.creative.channel", None), Some(&Value::Integer(1234)));
///
/// let fallback = Value::Integer(5432);
/// assert_eq!(get(&tree, "chat.channelSid", Some(&fallback)), Some(&fallback));
/// ```
pub fn get<'a>(
    object: impl Into<Option<&'a Value>>,
    path: impl Into<Path>,
    default: Option<&'a Value>,
) -> Option<&'a Value> {
    let path = path.into();
    let mut cursor = object.into();
    for segment in path.iter() {
        match cursor {
            None | Some(Value::Null) => break,
            Some(value) => cursor = value.child(segment),
        }
    }

    if is_null_or_undefined(cursor) {
        default
    } else {
        cursor
    }
}

/// Assign `value` at `path`, mutating `object` in place.
///
/// Every segment but the last must resolve to a container. A missing or
/// null intermediate either fails with [`Error::PathNotFound`] or, with
/// [`SetOptions::create`], is replaced by an empty map. The last segment is
/// always overwritten. Array segments are decimal indices; addressing one
/// past the end appends.
///
/// The empty path assigns nothing and leaves `object` unchanged.
///
/// Returns `object` for chaining.
pub fn set<'a>(
    object: &'a mut Value,
    path: impl Into<Path>,
    value: Value,
    options: SetOptions,
) -> Result<&'a mut Value> {
    let path = path.into();
    assign(object, &path, value, options)?;
    Ok(object)
}

fn assign(object: &mut Value, path: &Path, value: Value, options: SetOptions) -> Result<()> {
    let Some((parents, last)) = path.split_last() else {
        return Ok(());
    };

    let mut cursor = object;
    for segment in parents {
        cursor = step_into(cursor, path, segment, options.create)?;
    }

    match cursor {
        Value::Map(map) => {
            map.insert(last.clone(), value);
            Ok(())
        }
        Value::Array(arr) => {
            let index = parse_index(path, last)?;

            // Readable as a chain; index.cmp() would hide the append case.
            #[allow(clippy::comparison_chain)]
            if index < arr.len() {
                arr[index] = value;
            } else if index == arr.len() {
                arr.push(value);
            } else {
                return Err(Error::InvalidIndex {
                    path: path.clone(),
                    segment: last.clone(),
                    message: format!("index {} out of bounds (len={})", index, arr.len()),
                });
            }
            Ok(())
        }
        _ => Err(not_a_container(path, last)),
    }
}

/// Move from a container to the child named by `segment`, creating it when
/// allowed.
fn step_into<'v>(
    container: &'v mut Value,
    path: &Path,
    segment: &str,
    create: bool,
) -> Result<&'v mut Value> {
    match container {
        Value::Map(map) => {
            if !create && !map.contains_key(segment) {
                return Err(path_not_found(path, segment));
            }
            let slot = map.entry(segment.to_string()).or_insert(Value::Null);
            fill_missing(slot, path, segment, create)
        }
        Value::Array(arr) => {
            let index = parse_index(path, segment)?;
            if index >= arr.len() && !create {
                return Err(path_not_found(path, segment));
            }
            if index == arr.len() {
                arr.push(Value::Null);
            }
            let len = arr.len();
            let slot = arr.get_mut(index).ok_or_else(|| Error::InvalidIndex {
                path: path.clone(),
                segment: segment.to_string(),
                message: format!("index {} out of bounds (len={})", index, len),
            })?;
            fill_missing(slot, path, segment, create)
        }
        _ => Err(not_a_container(path, segment)),
    }
}

fn fill_missing<'v>(
    slot: &'v mut Value,
    path: &Path,
    segment: &str,
    create: bool,
) -> Result<&'v mut Value> {
    if slot.is_null() {
        if !create {
            return Err(path_not_found(path, segment));
        }
        tracing::trace!(%path, segment, "creating intermediate map");
        *slot = Value::map();
    }
    Ok(slot)
}

fn parse_index(path: &Path, segment: &str) -> Result<usize> {
    segment.parse::<usize>().map_err(|e| Error::InvalidIndex {
        path: path.clone(),
        segment: segment.to_string(),
        message: format!("expected array index, got: {}", e),
    })
}

fn path_not_found(path: &Path, segment: &str) -> Error {
    Error::PathNotFound {
        path: path.clone(),
        segment: segment.to_string(),
    }
}

fn not_a_container(path: &Path, segment: &str) -> Error {
    Error::NotAContainer {
        path: path.clone(),
        segment: segment.to_string(),
    }
}

/// Resolve several paths and coerce each result to a number.
///
/// `defaults[i]` is the fallback for `paths[i]`; a shorter `defaults` slice
/// means the remaining paths have no fallback. Numeric strings and booleans
/// are converted; values that do not look like numbers are returned as they
/// are. Unresolved paths without a default yield `None`.
pub fn get_as_numbers<I, P>(
    object: &Value,
    paths: I,
    defaults: &[Option<Value>],
) -> Vec<Option<Value>>
where
    I: IntoIterator<Item = P>,
    P: Into<Path>,
{
    paths
        .into_iter()
        .enumerate()
        .map(|(i, path)| {
            let default = defaults.get(i).and_then(Option::as_ref);
            get(object, path, default).map(|v| coerce_number(v).unwrap_or_else(|| v.clone()))
        })
        .collect()
}

/// Loose numeric conversion. `None` means "not a number".
fn coerce_number(value: &Value) -> Option<Value> {
    match value {
        Value::Integer(_) | Value::Float(_) => Some(value.clone()),
        Value::Bool(b) => Some(Value::Integer(*b as i64)),
        Value::String(s) => parse_number(s),
        _ => None,
    }
}

fn parse_number(s: &str) -> Option<Value> {
    let s = s.trim();
    if s.is_empty() {
        return Some(Value::Integer(0));
    }

    match s {
        "Infinity" | "+Infinity" => return Some(Value::Float(f64::INFINITY)),
        "-Infinity" => return Some(Value::Float(f64::NEG_INFINITY)),
        _ => {}
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            return i64::from_str_radix(digits, radix)
                .ok()
                .filter(|_| !digits.starts_with(['+', '-']))
                .map(Value::Integer);
        }
    }

    // f64's parser also takes "inf" and "nan", which are not numbers here.
    if !s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return None;
    }

    if let Ok(i) = s.parse::<i64>() {
        return Some(Value::Integer(i));
    }
    s.parse::<f64>().ok().map(Value::Float)
}
