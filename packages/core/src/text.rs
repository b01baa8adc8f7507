//! String helpers.

/// Upper-case the first character of `s`, leaving the rest untouched.
///
/// An absent string yields `""`.
pub fn capitalize(s: Option<&str>) -> String {
    let Some(s) = s else {
        return String::new();
    };
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
