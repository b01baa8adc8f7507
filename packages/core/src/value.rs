//! The Value type - a dynamically-typed tree.
//!
//! Every helper in this crate operates on `Value`. It covers what a JSON
//! document can hold plus two object kinds JSON cannot express: raw bytes
//! and callable functions.
//!
//! There is no "undefined" variant. Absence is expressed with `Option`:
//! a missing map entry, an unresolved path or a callback result that should
//! be dropped is `None`.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use base64::Engine;
use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// A shared callable taking positional arguments.
///
/// Cloning is cheap and clones compare equal to each other.
#[derive(Clone)]
pub struct Function {
    inner: Arc<dyn Fn(&[Value]) -> Value + Send + Sync>,
}

impl Function {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Function { inner: Arc::new(f) }
    }

    /// Invoke the function with positional arguments.
    pub fn call(&self, args: &[Value]) -> Value {
        (self.inner)(args)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Function")
    }
}

/// A tree-shaped value.
///
/// # Design Notes
///
/// - Uses `BTreeMap` for deterministic key order (hashing, comparison)
/// - `Bytes` is object-like but not a plain map
/// - `Function` is the only variant that is callable
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    /// Signed 64-bit integer.
    Integer(i64),
    /// 64-bit floating point.
    Float(f64),
    String(String),
    /// Binary data.
    Bytes(Vec<u8>),
    Array(Vec<Value>),
    /// Key-value map with string keys.
    Map(BTreeMap<String, Value>),
    Function(Function),
}

impl Value {
    pub fn null() -> Self {
        Value::Null
    }

    /// Create an empty map.
    pub fn map() -> Self {
        Value::Map(BTreeMap::new())
    }

    /// Create an empty array.
    pub fn array() -> Self {
        Value::Array(Vec::new())
    }

    /// Wrap a closure as a function value.
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Value::Function(Function::new(f))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(func) => Some(func),
            _ => None,
        }
    }

    /// Look up a single path segment: a key on maps, an index on arrays.
    ///
    /// Returns `None` when the segment is absent or this value cannot be
    /// indexed.
    pub fn child(&self, segment: &str) -> Option<&Value> {
        match self {
            Value::Map(map) => map.get(segment),
            Value::Array(arr) => {
                let index: usize = segment.parse().ok()?;
                arr.get(index)
            }
            _ => None,
        }
    }

    /// Mutable counterpart of [`Value::child`].
    pub fn child_mut(&mut self, segment: &str) -> Option<&mut Value> {
        match self {
            Value::Map(map) => map.get_mut(segment),
            Value::Array(arr) => {
                let index: usize = segment.parse().ok()?;
                arr.get_mut(index)
            }
            _ => None,
        }
    }

    /// Enumerate `(key, value)` pairs the way object key enumeration does:
    /// map entries in key order, array elements keyed by their index.
    ///
    /// Returns `None` for values whose keys cannot be enumerated.
    pub fn entries(&self) -> Option<Vec<(String, &Value)>> {
        match self {
            Value::Map(map) => Some(map.iter().map(|(k, v)| (k.clone(), v)).collect()),
            Value::Array(arr) => Some(
                arr.iter()
                    .enumerate()
                    .map(|(i, v)| (i.to_string(), v))
                    .collect(),
            ),
            _ => None,
        }
    }
}

// Serialization follows JSON.stringify: functions vanish from maps and
// become null inside arrays. Bytes are base64 strings, as in `to_json`.

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Bytes(b) => {
                serializer.serialize_str(&base64::engine::general_purpose::STANDARD.encode(b))
            }
            Value::Array(arr) => {
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for item in arr {
                    match item {
                        Value::Function(_) => seq.serialize_element(&Value::Null)?,
                        other => seq.serialize_element(other)?,
                    }
                }
                seq.end()
            }
            Value::Map(map) => {
                let entries: Vec<_> = map
                    .iter()
                    .filter(|(_, v)| !matches!(v, Value::Function(_)))
                    .collect();
                let mut out = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
            Value::Function(_) => Err(S::Error::custom(
                "functions have no serialized representation",
            )),
        }
    }
}

// Conversion from common types

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Function> for Value {
    fn from(v: Function) -> Self {
        Value::Function(v)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(v: BTreeMap<String, Value>) -> Self {
        Value::Map(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Array(v.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use collection_literals::btree;

    #[test]
    fn child_on_map_and_array() {
        let value = Value::Map(btree! {
            "items".into() => Value::from(vec!["a", "b"]),
        });
        let items = value.child("items").unwrap();
        assert_eq!(items.child("1"), Some(&Value::from("b")));
        assert_eq!(items.child("2"), None);
        assert_eq!(items.child("x"), None);
        assert_eq!(value.child("missing"), None);
        assert_eq!(Value::from("abc").child("0"), None);
    }

    #[test]
    fn child_mut_allows_in_place_edits() {
        let mut value = Value::from(vec![1i64, 2, 3]);
        *value.child_mut("0").unwrap() = Value::from(10i64);
        assert_eq!(value, Value::from(vec![10i64, 2, 3]));
    }

    #[test]
    fn entries_enumerate_maps_and_arrays() {
        let map = Value::Map(btree! {
            "b".into() => Value::from(2i64),
            "a".into() => Value::from(1i64),
        });
        let keys: Vec<String> = map.entries().unwrap().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);

        let arr = Value::from(vec!["x", "y"]);
        let keys: Vec<String> = arr.entries().unwrap().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["0", "1"]);

        assert!(Value::Null.entries().is_none());
        assert!(Value::from(5i64).entries().is_none());
    }

    #[test]
    fn function_equality_is_identity() {
        let f = Function::new(|_| Value::Null);
        let g = Function::new(|_| Value::Null);
        assert_eq!(f, f.clone());
        assert_ne!(f, g);
    }

    #[test]
    fn function_call_passes_arguments() {
        let sum = Value::function(|args| {
            Value::Integer(
                args.iter()
                    .map(|a| match a {
                        Value::Integer(i) => *i,
                        _ => 0,
                    })
                    .sum(),
            )
        });
        let result = sum
            .as_function()
            .unwrap()
            .call(&[Value::from(1i64), Value::from(2i64)]);
        assert_eq!(result, Value::from(3i64));
    }

    #[test]
    fn serialize_drops_functions_like_json() {
        let value = Value::Map(btree! {
            "f".into() => Value::function(|_| Value::Null),
            "list".into() => Value::Array(vec![
                Value::from(1i64),
                Value::function(|_| Value::Null),
            ]),
            "name".into() => Value::from("x"),
        });
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"list":[1,null],"name":"x"}"#);
    }

    #[test]
    fn serialize_bytes_as_base64() {
        let json = serde_json::to_string(&Value::Bytes(b"hi".to_vec())).unwrap();
        assert_eq!(json, r#""aGk=""#);
    }

    #[test]
    fn serialize_bare_function_fails() {
        let value = Value::function(|_| Value::Null);
        assert!(serde_json::to_string(&value).is_err());
    }

    #[test]
    fn serialize_nan_as_null() {
        let json = serde_json::to_string(&Value::Float(f64::NAN)).unwrap();
        assert_eq!(json, "null");
    }
}
