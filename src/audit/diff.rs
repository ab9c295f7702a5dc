//! Diff generation for audit logging
//!
//! Summarises what changed between two JSON snapshots of a budget, or of
//! its shared-with list.

use serde_json::Value;

/// Generate a human-readable diff between two JSON values
///
/// Objects are compared field by field (top level only). Lists of strings,
/// such as `sharedWith`, are reported as added and removed members.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let changes = match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();
            for (key, before_val) in before_obj {
                match after_obj.get(key) {
                    Some(after_val) if after_val != before_val => {
                        changes.push(format!("{}: {}", key, describe_change(before_val, after_val)));
                    }
                    Some(_) => {}
                    None => changes.push(format!("{}: {} -> (removed)", key, format_value(before_val))),
                }
            }
            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }
            changes
        }
        _ if before != after => vec![describe_change(before, after)],
        _ => Vec::new(),
    };

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn describe_change(before: &Value, after: &Value) -> String {
    match (string_list(before), string_list(after)) {
        (Some(before_items), Some(after_items)) => {
            let mut parts: Vec<String> = Vec::new();
            for item in &after_items {
                let was = before_items.iter().filter(|b| *b == item).count();
                let now = after_items.iter().filter(|a| *a == item).count();
                if now > was && !parts.contains(&format!("+{}", item)) {
                    parts.push(format!("+{}", item));
                }
            }
            for item in &before_items {
                let was = before_items.iter().filter(|b| *b == item).count();
                let now = after_items.iter().filter(|a| *a == item).count();
                if was > now && !parts.contains(&format!("-{}", item)) {
                    parts.push(format!("-{}", item));
                }
            }
            if parts.is_empty() {
                "reordered".to_string()
            } else {
                parts.join(" ")
            }
        }
        _ => format!("{} -> {}", format_value(before), format_value(after)),
    }
}

fn string_list(value: &Value) -> Option<Vec<&str>> {
    value.as_array()?.iter().map(Value::as_str).collect()
}

/// Format a JSON value for human-readable display
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) if s.chars().count() > 50 => {
            let head: String = s.chars().take(47).collect();
            format!("\"{}...\"", head)
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_amount_change() {
        let before = json!({"name": "Groceries", "setAmount": 10000, "left": 7500});
        let after = json!({"name": "Groceries", "setAmount": 15000, "left": 12500});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "left: 7500 -> 12500, setAmount: 10000 -> 15000");
    }

    #[test]
    fn test_shared_with_members() {
        let before = json!(["a@x.com", "b@x.com"]);
        let after = json!(["a@x.com", "c@x.com"]);

        assert_eq!(generate_diff(&before, &after).unwrap(), "+c@x.com -b@x.com");
    }

    #[test]
    fn test_duplicate_member_added() {
        let before = json!({"sharedWith": ["a@x.com", "b@x.com"]});
        let after = json!({"sharedWith": ["a@x.com", "b@x.com", "b@x.com"]});

        assert_eq!(generate_diff(&before, &after).unwrap(), "sharedWith: +b@x.com");
    }

    #[test]
    fn test_history_cleared() {
        let before = json!({"history": ["25.00:market", "3.50:coffee"]});
        let after = json!({"history": ["none:none"]});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "history: +none:none -25.00:market -3.50:coffee");
    }

    #[test]
    fn test_no_changes() {
        let value = json!({"name": "Test", "spent": 0});
        assert!(generate_diff(&value, &value).is_none());
    }

    #[test]
    fn test_field_added_and_removed() {
        let before = json!({"name": "Test", "old": "value"});
        let after = json!({"name": "Test", "isShared": true});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("old: \"value\" -> (removed)"));
        assert!(diff.contains("isShared: (added) -> true"));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!(null)), "null");
        assert_eq!(format_value(&json!(42)), "42");
        assert_eq!(format_value(&json!([1, 2, 3])), "[3 items]");
        assert!(format_value(&json!("a".repeat(100))).ends_with("...\""));
    }
}
