//! Cheap non-cryptographic hashes for strings and serializable values.

use serde::Serialize;

use crate::Result;

/// 32-bit rolling hash over the UTF-16 code units of `s`.
///
/// Computes `h = h * 31 + unit` with signed 32-bit wraparound, starting
/// from zero, so the empty string hashes to `0`.
pub fn get_string_hash(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Hash the compact JSON serialization of `value`.
///
/// The hash is only as canonical as the serialization: two values that
/// serialize their fields in a different order hash differently.
/// [`Value`](crate::Value) maps always serialize in sorted key order.
///
/// # Errors
///
/// [`Error::Serialize`](crate::Error::Serialize) if `value` has no JSON
/// representation (for example a bare function).
pub fn get_json_hash<T: Serialize + ?Sized>(value: &T) -> Result<i32> {
    let json = serde_json::to_string(value)?;
    Ok(get_string_hash(&json))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;
    use serde_json::json;

    #[test]
    fn empty_string_hashes_to_zero() {
        assert_eq!(get_string_hash(""), 0);
    }

    #[test]
    fn known_hashes() {
        assert_eq!(get_string_hash("a"), 97);
        assert_eq!(get_string_hash("ab"), 97 * 31 + 98);
        assert_eq!(get_string_hash("hello"), 99_162_322);
    }

    #[test]
    fn long_strings_wrap_around() {
        // 31^7 overflows i32 well before the end of this string.
        let h = get_string_hash("the quick brown fox jumps over the lazy dog");
        let expected = "the quick brown fox jumps over the lazy dog"
            .bytes()
            .fold(0i64, |h, b| ((h * 31 + b as i64) as i32) as i64);
        assert_eq!(h as i64, expected);
    }

    #[test]
    fn hashes_utf16_code_units() {
        // U+1F600 is a surrogate pair: 0xD83D 0xDE00.
        let expected = 0xD83Di32.wrapping_mul(31).wrapping_add(0xDE00);
        assert_eq!(get_string_hash("\u{1F600}"), expected);
    }

    #[test]
    fn json_hash_matches_string_hash_of_serialization() {
        let value = json!({ "a": 1, "b": [true, null] });
        assert_eq!(
            get_json_hash(&value).unwrap(),
            get_string_hash(r#"{"a":1,"b":[true,null]}"#)
        );
    }

    #[test]
    fn json_hash_depends_on_field_order() {
        #[derive(Serialize)]
        struct Ab {
            a: i32,
            b: i32,
        }
        #[derive(Serialize)]
        struct Ba {
            b: i32,
            a: i32,
        }
        let ab = get_json_hash(&Ab { a: 1, b: 2 }).unwrap();
        let ba = get_json_hash(&Ba { b: 2, a: 1 }).unwrap();
        assert_ne!(ab, ba);
    }

    #[test]
    fn json_hash_of_value_is_deterministic() {
        let one = Value::from(json!({ "x": 1, "y": "two" }));
        let two = Value::from(json!({ "y": "two", "x": 1 }));
        assert_eq!(get_json_hash(&one).unwrap(), get_json_hash(&two).unwrap());
    }

    #[test]
    fn json_hash_of_bytes_matches_to_json_text() {
        let value = Value::Map(collection_literals::btree! {
            "blob".to_string() => Value::Bytes(b"hi".to_vec()),
            "list".to_string() => Value::Array(vec![Value::Bytes(vec![0, 255])]),
        });
        let text = crate::to_json(&value).unwrap().to_string();
        assert_eq!(get_json_hash(&value).unwrap(), get_string_hash(&text));
        assert_eq!(
            get_json_hash(&Value::Bytes(b"hi".to_vec())).unwrap(),
            get_string_hash(r#""aGk=""#)
        );
    }

    #[test]
    fn json_hash_of_function_fails() {
        let f = Value::function(|_| Value::Null);
        assert!(get_json_hash(&f).is_err());
    }
}
