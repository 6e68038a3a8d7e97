//! # Error Formatter
//!
//! Normalizes the backend's heterogeneous error payloads into a single
//! human-readable string.
//!
//! The backend rejects requests with either a plain string or a
//! field → message(s) map:
//!
//! ```text
//! "Invalid credentials"
//!
//! { "username": ["This field is required."],
//!   "min_threshold": "Minimum threshold cannot exceed maximum capacity." }
//! ```
//!
//! Both become display text, one line per (field, message) pair, with field
//! names humanized (snake_case → Title Case). The function is pure and total:
//! any input shape produces a string, never a panic.

use serde_json::Value;

/// Fallback for payloads that are neither a string nor an object.
pub const GENERIC_ERROR: &str = "An error occurred. Please try again.";

/// Formats a backend error payload into one display string.
///
/// - String payloads pass through unchanged.
/// - Object payloads expand to `Field Name: message` lines, one per message;
///   list values produce one line per element; other value shapes are
///   JSON-stringified.
/// - Anything else yields [`GENERIC_ERROR`].
pub fn format_error(payload: &Value) -> String {
    match payload {
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            let mut lines = Vec::new();
            for (field, errors) in map {
                match errors {
                    Value::Array(items) => {
                        for item in items {
                            let msg = match item {
                                Value::String(s) => s.clone(),
                                other => other.to_string(),
                            };
                            lines.push(format!("{}: {}", humanize_field(field), msg));
                        }
                    }
                    Value::String(msg) => {
                        lines.push(format!("{}: {}", humanize_field(field), msg));
                    }
                    other => lines.push(other.to_string()),
                }
            }
            lines.join("\n")
        }
        _ => GENERIC_ERROR.to_string(),
    }
}

/// `min_threshold` → `Min Threshold`.
fn humanize_field(field: &str) -> String {
    field
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_string_passes_through_unchanged() {
        assert_eq!(format_error(&json!("Login failed")), "Login failed");
    }

    #[test]
    fn field_map_expands_one_line_per_message() {
        let payload = json!({
            "username": ["This field is required.", "Ensure this field has at most 150 characters."],
        });
        assert_eq!(
            format_error(&payload),
            "Username: This field is required.\n\
             Username: Ensure this field has at most 150 characters."
        );
    }

    #[test]
    fn single_string_values_are_supported() {
        let payload = json!({ "min_threshold": "Minimum threshold cannot exceed maximum capacity." });
        assert_eq!(
            format_error(&payload),
            "Min Threshold: Minimum threshold cannot exceed maximum capacity."
        );
    }

    #[test]
    fn field_names_are_humanized() {
        let payload = json!({ "payment_method": ["invalid choice"] });
        assert_eq!(format_error(&payload), "Payment Method: invalid choice");
    }

    #[test]
    fn unexpected_value_shapes_are_stringified() {
        let payload = json!({ "items": {"0": "bad"} });
        assert_eq!(format_error(&payload), r#"{"0":"bad"}"#);
    }

    #[test]
    fn non_object_non_string_falls_back_to_generic() {
        assert_eq!(format_error(&json!(null)), GENERIC_ERROR);
        assert_eq!(format_error(&json!(42)), GENERIC_ERROR);
        assert_eq!(format_error(&json!([1, 2])), GENERIC_ERROR);
        assert_eq!(format_error(&json!(true)), GENERIC_ERROR);
    }

    #[test]
    fn multi_field_errors_join_with_line_breaks() {
        let payload = json!({
            "from_shop": ["This field is required."],
            "quantity": ["Quantity must be at least 1."],
        });
        let out = format_error(&payload);
        assert!(out.contains("From Shop: This field is required."));
        assert!(out.contains("Quantity: Quantity must be at least 1."));
        assert_eq!(out.lines().count(), 2);
    }
}
