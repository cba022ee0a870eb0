//! Shape-level coercion of provider JSON.
//!
//! The provider's response is untrusted: fields may be missing, mistyped, or
//! the whole object may be empty. These helpers turn a loosely-typed
//! candidate into strictly-typed fields, defaulting instead of erroring.
//! Absence is data; only wholly malformed JSON fails, upstream in the client.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Takes the array at `key` if present and well-typed, else an empty
/// sequence. A mistyped value (wrong JSON type, or elements that do not fit
/// `T`) also defaults: this is a shape-level, not an item-level, guarantee.
pub fn array_field<T: DeserializeOwned>(candidate: &Value, key: &str) -> Vec<T> {
    candidate
        .get(key)
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default()
}

/// Takes the string at `key` if present, else the fixed fallback phrase.
pub fn string_field(candidate: &Value, key: &str, fallback: &str) -> String {
    candidate
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or(fallback)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_array_field_absent_defaults_empty() {
        let items: Vec<String> = array_field(&json!({}), "items");
        assert!(items.is_empty());
    }

    #[test]
    fn test_array_field_present_is_taken() {
        let items: Vec<String> = array_field(&json!({"items": ["a", "b"]}), "items");
        assert_eq!(items, vec!["a", "b"]);
    }

    #[test]
    fn test_array_field_mistyped_defaults_empty() {
        let items: Vec<String> = array_field(&json!({"items": "not an array"}), "items");
        assert!(items.is_empty());
    }

    #[test]
    fn test_string_field_absent_uses_fallback() {
        assert_eq!(string_field(&json!({}), "kind", "unknown"), "unknown");
    }

    #[test]
    fn test_string_field_present_is_taken() {
        assert_eq!(string_field(&json!({"kind": "INTJ"}), "kind", "unknown"), "INTJ");
    }

    #[test]
    fn test_string_field_non_string_uses_fallback() {
        assert_eq!(string_field(&json!({"kind": 42}), "kind", "unknown"), "unknown");
    }
}
