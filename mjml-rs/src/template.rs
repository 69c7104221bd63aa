//! Placeholder substitution for MJML templates
//!
//! A data file is a flat JSON object. Each key `name` replaces every literal
//! `{{name}}` occurrence in the markup before it is rendered.

use serde_json::Value;
use std::path::Path;
use tracing::debug;

use crate::error::{MjmlError, Result};

/// Ordered key/value pairs loaded from a JSON data file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateData {
    entries: Vec<(String, String)>,
}

impl TemplateData {
    /// Load placeholder values from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let data = Self::from_json_str(&content)?;
        debug!(path = %path.display(), keys = data.len(), "Loaded template data");
        Ok(data)
    }

    /// Parse placeholder values from JSON text
    ///
    /// The document root must be an object. Keys keep their document order.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(MjmlError::Data(format!(
                    "expected a JSON object at the root, found {}",
                    json_kind(&other)
                )))
            }
        };

        let entries = map
            .into_iter()
            .map(|(key, value)| (key, value_to_string(value)))
            .collect();

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Substitute every `{{key}}` in `markup`
    ///
    /// Keys are applied one after another in document order, so a value that
    /// itself contains `{{other}}` is filled in by a later key.
    pub fn apply(&self, markup: &str) -> String {
        let mut result = markup.to_string();

        for (key, value) in &self.entries {
            let placeholder = format!("{{{{{}}}}}", key);
            result = result.replace(&placeholder, value);
        }

        result
    }
}

impl<K, V> FromIterator<(K, V)> for TemplateData
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn value_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Names of the `{{...}}` placeholders present in `text`
///
/// Returns a sorted list without duplicates and without the braces.
pub fn extract_placeholders(text: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut rest = text;

    while let Some(end) = rest.find("}}") {
        let head = &rest[..end];
        // Innermost opening brace starts the name
        if let Some(start) = head.rfind("{{") {
            let name = &head[start + 2..];
            if !name.is_empty() {
                names.push(name.to_string());
            }
        }
        rest = &rest[end + 2..];
    }

    names.sort();
    names.dedup();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_basic_placeholders() {
        let data: TemplateData = [("name", "John Doe"), ("company", "Acme Inc")]
            .into_iter()
            .collect();

        let rendered = data.apply("Hello {{name}} from {{company}}, {{name}}!");
        assert_eq!(rendered, "Hello John Doe from Acme Inc, John Doe!");
    }

    #[test]
    fn test_apply_leaves_unknown_placeholders() {
        let data: TemplateData = [("name", "Ann")].into_iter().collect();
        assert_eq!(data.apply("{{name}} {{missing}}"), "Ann {{missing}}");
    }

    #[test]
    fn test_apply_requires_exact_braces() {
        let data: TemplateData = [("name", "Ann")].into_iter().collect();
        assert_eq!(data.apply("{{ name }} {name}"), "{{ name }} {name}");
    }

    #[test]
    fn test_keys_with_regex_metacharacters_are_literal() {
        let data: TemplateData = [("price.usd", "$10"), ("a+b", "sum")].into_iter().collect();
        let rendered = data.apply("{{price.usd}} {{priceXusd}} {{a+b}}");
        assert_eq!(rendered, "$10 {{priceXusd}} sum");
    }

    #[test]
    fn test_values_are_not_expanded() {
        let data: TemplateData = [("v", "$0 ${1} $$")].into_iter().collect();
        assert_eq!(data.apply("[{{v}}]"), "[$0 ${1} $$]");
    }

    #[test]
    fn test_substitution_is_sequential() {
        let data = TemplateData::from_json_str(r#"{"greeting": "Hi {{name}}", "name": "Bo"}"#)
            .unwrap();
        assert_eq!(data.apply("{{greeting}}"), "Hi Bo");
    }

    #[test]
    fn test_non_string_values() {
        let data = TemplateData::from_json_str(
            r#"{"count": 3, "ratio": 1.5, "ok": true, "none": null, "tags": ["a", "b"], "obj": {"k": 1}}"#,
        )
        .unwrap();

        assert_eq!(data.get("count"), Some("3"));
        assert_eq!(data.get("ratio"), Some("1.5"));
        assert_eq!(data.get("ok"), Some("true"));
        assert_eq!(data.get("none"), Some("null"));
        assert_eq!(data.get("tags"), Some(r#"["a","b"]"#));
        assert_eq!(data.get("obj"), Some(r#"{"k":1}"#));
    }

    #[test]
    fn test_root_must_be_object() {
        let err = TemplateData::from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, MjmlError::Data(_)));
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn test_malformed_json() {
        let err = TemplateData::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, MjmlError::Json(_)));
    }

    #[test]
    fn test_empty_object() {
        let data = TemplateData::from_json_str("{}").unwrap();
        assert!(data.is_empty());
        assert_eq!(data.apply("{{x}}"), "{{x}}");
    }

    #[test]
    fn test_extract_placeholders() {
        let names = extract_placeholders("Hi {{name}}, order {{order_id}} for {{name}} {{}}");
        assert_eq!(names, vec!["name", "order_id"]);
    }

    #[test]
    fn test_extract_placeholders_unterminated() {
        assert_eq!(extract_placeholders("{{open and {{done}}"), vec!["done"]);
        assert_eq!(extract_placeholders("{{{triple}}}"), vec!["triple"]);
        assert_eq!(extract_placeholders("}} stray {{after}}"), vec!["after"]);
        assert!(extract_placeholders("{{never closed").is_empty());
    }
}
