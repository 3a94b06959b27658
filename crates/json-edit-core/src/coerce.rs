//! Coercion of freeform user text into typed JSON values.

use crate::value::DocValue;

/// Convert a raw edited string into a typed JSON value.
///
/// This function is total: every input maps to some value and nothing is
/// ever raised. Rules apply in order, first match wins:
///
/// 1. trimmed `"null"` → null
/// 2. trimmed `"true"` / `"false"` → boolean
/// 3. trimmed non-empty JSON number literal → number
/// 4. trimmed full JSON parse → the parsed value (objects, arrays, quoted
///    string literals)
/// 5. anything else → the **original, untrimmed** text as a string
///
/// # Example
///
/// ```
/// use json_edit_core::{coerce, DocValue};
///
/// assert_eq!(coerce("null"), DocValue::Null);
/// assert_eq!(coerce("true"), DocValue::Bool(true));
/// assert_eq!(coerce("42"), DocValue::from(serde_json::json!(42)));
/// assert_eq!(coerce(r#"{"a": 1}"#), DocValue::from(serde_json::json!({"a": 1})));
/// assert_eq!(coerce("hello"), DocValue::String("hello".to_string()));
/// ```
pub fn coerce(raw: &str) -> DocValue {
    let trimmed = raw.trim();

    match trimmed {
        "null" => return DocValue::Null,
        "true" => return DocValue::Bool(true),
        "false" => return DocValue::Bool(false),
        _ => {}
    }

    // JSON number grammar: optional sign, digits, optional fraction and
    // exponent. The empty string is never numeric.
    if !trimmed.is_empty() {
        if let Ok(n) = serde_json::from_str::<serde_json::Number>(trimmed) {
            return DocValue::Number(n);
        }
    }

    // Full JSON parse lets the user type composite literals or quoted
    // strings directly into a scalar field.
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(trimmed) {
        return DocValue::from(v);
    }

    DocValue::String(raw.to_owned())
}
