//! Runtime type checks on [`Value`]s.
//!
//! Every predicate takes `impl Into<Option<&Value>>`, so it can be handed a
//! `&Value`, `Some(&value)`, or `None`. `None` plays the role of an
//! undefined value. None of these ever fail.

use crate::Value;

/// True for `Value::Null`.
pub fn is_null<'a>(value: impl Into<Option<&'a Value>>) -> bool {
    matches!(value.into(), Some(Value::Null))
}

/// True for an absent value.
pub fn is_undefined<'a>(value: impl Into<Option<&'a Value>>) -> bool {
    value.into().is_none()
}

pub fn is_null_or_undefined<'a>(value: impl Into<Option<&'a Value>>) -> bool {
    matches!(value.into(), None | Some(Value::Null))
}

pub fn is_function<'a>(value: impl Into<Option<&'a Value>>) -> bool {
    matches!(value.into(), Some(Value::Function(_)))
}

/// True for any string, including the empty one.
pub fn is_string<'a>(value: impl Into<Option<&'a Value>>) -> bool {
    matches!(value.into(), Some(Value::String(_)))
}

/// True for a non-empty string.
pub fn is_valid_string<'a>(value: impl Into<Option<&'a Value>>) -> bool {
    matches!(value.into(), Some(Value::String(s)) if !s.is_empty())
}

/// True for non-null object values: maps, arrays and bytes.
pub fn is_object_like<'a>(value: impl Into<Option<&'a Value>>) -> bool {
    matches!(
        value.into(),
        Some(Value::Map(_) | Value::Array(_) | Value::Bytes(_))
    )
}

/// Like [`is_object_like`], but functions count as objects too.
pub fn is_object<'a>(value: impl Into<Option<&'a Value>>) -> bool {
    let value = value.into();
    is_object_like(value) || is_function(value)
}

/// True only for plain maps. Arrays, bytes and functions are excluded.
pub fn is_plain_object<'a>(value: impl Into<Option<&'a Value>>) -> bool {
    matches!(value.into(), Some(Value::Map(_)))
}

/// True for integers and floats, NaN included.
pub fn is_number<'a>(value: impl Into<Option<&'a Value>>) -> bool {
    matches!(value.into(), Some(Value::Integer(_) | Value::Float(_)))
}
