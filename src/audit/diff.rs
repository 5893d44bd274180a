//! Field-level change summaries for audit entries

use serde_json::Value;

const MAX_STRING_CHARS: usize = 50;

/// Summarize the top-level fields that differ between two JSON values
///
/// Returns `None` when nothing changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            for (key, before_val) in before_obj {
                match after_obj.get(key) {
                    Some(after_val) if before_val != after_val => changes.push(format!(
                        "{}: {} -> {}",
                        key,
                        format_value(before_val),
                        format_value(after_val)
                    )),
                    Some(_) => {}
                    None => changes.push(format!("{}: {} -> (removed)", key, format_value(before_val))),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }

            if changes.is_empty() {
                None
            } else {
                Some(changes.join(", "))
            }
        }
        _ if before != after => Some(format!("{} -> {}", format_value(before), format_value(after))),
        _ => None,
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            // titles carry accents, so cut on chars rather than bytes
            if s.chars().count() > MAX_STRING_CHARS {
                let head: String = s.chars().take(MAX_STRING_CHARS - 3).collect();
                format!("\"{}...\"", head)
            } else {
                format!("\"{}\"", s)
            }
        }
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_changes() {
        let v = json!({"title": "Essence", "amount": 60});
        assert_eq!(generate_diff(&v, &v), None);
    }

    #[test]
    fn test_changed_field() {
        let before = json!({"title": "Essence", "amount": 60});
        let after = json!({"title": "Essence", "amount": 75.5});
        assert_eq!(generate_diff(&before, &after), Some("amount: 60 -> 75.5".into()));
    }

    #[test]
    fn test_added_and_removed() {
        let before = json!({"a": 1});
        let after = json!({"b": true});
        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("a: 1 -> (removed)"));
        assert!(diff.contains("b: (added) -> true"));
    }

    #[test]
    fn test_scalar_values() {
        assert_eq!(
            generate_diff(&json!("light"), &json!("dark")),
            Some("\"light\" -> \"dark\"".into())
        );
    }

    #[test]
    fn test_long_accented_string_truncated() {
        let long = "é".repeat(60);
        let diff = generate_diff(&json!({"t": ""}), &json!({"t": long})).unwrap();
        assert!(diff.ends_with("...\""));
    }
}
