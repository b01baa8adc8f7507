//! Conversions between Value and serde_json::Value.

use base64::Engine;

use crate::Value;

/// Convert a Value to serde_json::Value.
///
/// Returns `None` for a bare function. Nested functions are dropped from
/// maps and become null inside arrays. Bytes are base64 encoded since JSON
/// has no binary type.
pub fn to_json(value: &Value) -> Option<serde_json::Value> {
    let json = match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Integer(i) => serde_json::Value::Number((*i).into()),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Bytes(b) => {
            serde_json::Value::String(base64::engine::general_purpose::STANDARD.encode(b))
        }
        Value::Array(arr) => serde_json::Value::Array(
            arr.iter()
                .map(|v| to_json(v).unwrap_or(serde_json::Value::Null))
                .collect(),
        ),
        Value::Map(map) => serde_json::Value::Object(
            map.iter()
                .filter_map(|(k, v)| to_json(v).map(|json| (k.clone(), json)))
                .collect(),
        ),
        Value::Function(_) => return None,
    };
    Some(json)
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else if let Some(f) = n.as_f64() {
                    Value::Float(f)
                } else {
                    // Fallback for very large numbers
                    Value::String(n.to_string())
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => {
                Value::Array(arr.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Map(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}
