use serde_json::Value;

pub(crate) fn get_string_value_by_key<'a>(value: &'a Value, key: &'a str) -> Option<&'a str> {
    match &value[key] {
        Value::String(v) if !v.is_empty() => Some(v.as_str()),
        _ => None,
    }
}

/// Mirrors the truthiness the source dialects rely on when chaining aliases.
pub(crate) fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_lookup_ignores_empty_and_non_strings() {
        let config = json!({"source": "gita.json", "empty": "", "number": 3});
        assert_eq!(get_string_value_by_key(&config, "source"), Some("gita.json"));
        assert_eq!(get_string_value_by_key(&config, "empty"), None);
        assert_eq!(get_string_value_by_key(&config, "number"), None);
        assert_eq!(get_string_value_by_key(&config, "missing"), None);
    }

    #[test]
    fn presence_follows_truthiness() {
        assert!(!is_present(&Value::Null));
        assert!(!is_present(&json!("")));
        assert!(!is_present(&json!(0)));
        assert!(!is_present(&json!(false)));
        assert!(is_present(&json!("x")));
        assert!(is_present(&json!(7)));
        assert!(is_present(&json!([])));
    }
}
