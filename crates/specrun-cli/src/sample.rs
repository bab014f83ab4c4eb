//! Bundled sample subject: a minimal placeholder-interpolation renderer.
//!
//! Supports `{{key}}` substitution (dotted keys resolve through nested
//! objects) and `{{>name}}` partial inclusion. It exists to exercise the
//! harness end to end from the binary; it is not a compliant template
//! engine and will fail most corpus cases beyond basic interpolation.

use std::collections::HashMap;

use serde_json::{Map, Value};
use specrun_runner::{RenderInstance, SubjectError, SubjectFactory, SubjectResult};

/// Partial inclusion depth cap, against self-referential partials.
const MAX_PARTIAL_DEPTH: u8 = 16;

/// Factory for [`SampleRenderer`]: phase one of the adapter protocol.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleFactory;

impl SubjectFactory for SampleFactory {
    fn configure(
        &self,
        partials: &Map<String, Value>,
    ) -> Result<Box<dyn RenderInstance>, SubjectError> {
        let mut templates = HashMap::with_capacity(partials.len());
        for (name, value) in partials {
            match value {
                Value::String(template) => {
                    templates.insert(name.clone(), template.clone());
                }
                _ => {
                    return Err(SubjectError::new(format!(
                        "partial `{name}` is not a string"
                    )))
                }
            }
        }
        Ok(Box::new(SampleRenderer {
            partials: templates,
        }))
    }
}

/// A configured renderer instance holding its partials.
pub struct SampleRenderer {
    partials: HashMap<String, String>,
}

impl SampleRenderer {
    fn render_str(&self, template: &str, data: &Value, depth: u8) -> Result<String, SubjectError> {
        if depth > MAX_PARTIAL_DEPTH {
            return Err(SubjectError::new("partial inclusion too deep"));
        }

        let mut out = String::new();
        let mut rest = template;
        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let end = after
                .find("}}")
                .ok_or_else(|| SubjectError::new("unclosed tag"))?;
            let tag = after[..end].trim();
            rest = &after[end + 2..];

            match tag.strip_prefix('>') {
                Some(name) => {
                    let name = name.trim();
                    let partial = self.partials.get(name).map(String::as_str).unwrap_or("");
                    out.push_str(&self.render_str(partial, data, depth + 1)?);
                }
                None => out.push_str(&lookup(data, tag)),
            }
        }
        out.push_str(rest);
        Ok(out)
    }
}

impl RenderInstance for SampleRenderer {
    fn render(&self, template: &str, data: &Value) -> SubjectResult {
        self.render_str(template, data, 0).map(Value::String)
    }
}

/// Resolve a dotted key against the data context. Missing keys render as
/// the empty string.
fn lookup(data: &Value, key: &str) -> String {
    let mut current = data;
    for part in key.split('.') {
        match current.get(part) {
            Some(value) => current = value,
            None => return String::new(),
        }
    }
    match current {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(template: &str, data: Value) -> SubjectResult {
        let instance = SampleFactory.configure(&Map::new()).unwrap();
        instance.render(template, &data)
    }

    #[test]
    fn test_interpolates_adjacent_tags() {
        let out = render("{{x}}{{y}}", json!({"x": "a", "y": "b"})).unwrap();
        assert_eq!(out, json!("ab"));
    }

    #[test]
    fn test_missing_key_renders_empty() {
        let out = render("[{{missing}}]", json!({})).unwrap();
        assert_eq!(out, json!("[]"));
    }

    #[test]
    fn test_dotted_key_resolves_nested_objects() {
        let out = render("{{a.b}}", json!({"a": {"b": "deep"}})).unwrap();
        assert_eq!(out, json!("deep"));
    }

    #[test]
    fn test_numbers_render_via_display() {
        let out = render("{{n}}!", json!({"n": 3})).unwrap();
        assert_eq!(out, json!("3!"));
    }

    #[test]
    fn test_partial_inclusion() {
        let partials = json!({"greet": "hi {{name}}"});
        let instance = SampleFactory
            .configure(partials.as_object().unwrap())
            .unwrap();
        let out = instance
            .render("<{{>greet}}>", &json!({"name": "ana"}))
            .unwrap();
        assert_eq!(out, json!("<hi ana>"));
    }

    #[test]
    fn test_unknown_partial_renders_empty() {
        let out = render("<{{>nope}}>", json!({})).unwrap();
        assert_eq!(out, json!("<>"));
    }

    #[test]
    fn test_self_referential_partial_is_an_error() {
        let partials = json!({"loop": "{{>loop}}"});
        let instance = SampleFactory
            .configure(partials.as_object().unwrap())
            .unwrap();
        assert!(instance.render("{{>loop}}", &json!({})).is_err());
    }

    #[test]
    fn test_unclosed_tag_is_an_error() {
        assert!(render("{{x", json!({})).is_err());
    }

    #[test]
    fn test_non_string_partial_refuses_configuration() {
        let partials = json!({"p": 42});
        assert!(SampleFactory
            .configure(partials.as_object().unwrap())
            .is_err());
    }
}
