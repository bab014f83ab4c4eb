//! Test record decomposition.
//!
//! A test record is a JSON object. Decomposition removes the well-known
//! fields in a fixed order — `name`, `desc`, `expected`, `args` — and
//! captures whatever remains as the keyword-input mapping. The order
//! matters: the residual must be taken last so consumed fields never appear
//! among the keywords.

use serde_json::{Map, Value};

use crate::errors::{MalformedRecordError, RecordResult};

/// One declarative test description, as it appears in a specification
/// document's `tests` array.
pub type TestRecord = Map<String, Value>;

/// The decomposed fields of one test record.
///
/// Produced by [`CaseFields::decompose`]; immutable thereafter. A test case
/// owns exactly one of these for the duration of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseFields {
    /// The record's `name` field, unprefixed.
    pub name: String,
    /// Identifying string for reporting: `"<Group Title>: <name>"` when a
    /// group was supplied, otherwise just the name.
    pub display_name: String,
    /// The record's `desc` field; empty when absent.
    pub desc: String,
    /// The oracle the subject's result is compared against.
    pub expected: Value,
    /// Positional inputs to the subject, in record order.
    pub args: Vec<Value>,
    /// Named inputs to the subject: every field not consumed above, or the
    /// explicit `keywords` object when the record carries one.
    pub keywords: Map<String, Value>,
}

impl CaseFields {
    /// Decompose a test record, optionally prefixing the display name with a
    /// title-cased group name.
    ///
    /// The input record is not mutated. Fails with [`MalformedRecordError`]
    /// when `name` or `expected` is absent, or when a typed optional field
    /// (`desc`, `args`, `keywords`) carries a value of the wrong shape.
    pub fn decompose(record: &TestRecord, group: Option<&str>) -> RecordResult<Self> {
        let mut rest = record.clone();

        let name = match rest.remove("name") {
            Some(Value::String(s)) => s,
            Some(other) => return Err(MalformedRecordError::InvalidName(other.to_string())),
            None => return Err(MalformedRecordError::MissingName),
        };

        let display_name = match group {
            Some(g) => format!("{}: {}", title_case(g), name),
            None => name.clone(),
        };

        let desc = match rest.remove("desc") {
            Some(Value::String(s)) => s,
            Some(_) => return Err(MalformedRecordError::InvalidDesc { name }),
            None => String::new(),
        };

        let expected = match rest.remove("expected") {
            Some(v) => v,
            None => return Err(MalformedRecordError::MissingExpected { name }),
        };

        let args = match rest.remove("args") {
            Some(Value::Array(items)) => items,
            Some(_) => return Err(MalformedRecordError::InvalidArgs { name }),
            None => Vec::new(),
        };

        // Residual capture happens last. An explicit `keywords` object takes
        // precedence over the residual mapping.
        let keywords = match rest.remove("keywords") {
            Some(Value::Object(map)) => map,
            Some(_) => return Err(MalformedRecordError::InvalidKeywords { name }),
            None => rest,
        };

        Ok(Self {
            name,
            display_name,
            desc,
            expected,
            args,
            keywords,
        })
    }
}

/// Render a group name in title case: first letter of each
/// whitespace-separated word uppercased, the rest lowercased.
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
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

    fn record(value: Value) -> TestRecord {
        value.as_object().expect("fixture must be an object").clone()
    }

    #[test]
    fn test_decompose_minimal_record() {
        let rec = record(json!({"name": "x", "expected": 1}));
        let fields = CaseFields::decompose(&rec, None).unwrap();
        assert_eq!(fields.name, "x");
        assert_eq!(fields.display_name, "x");
        assert_eq!(fields.desc, "");
        assert_eq!(fields.expected, json!(1));
        assert!(fields.args.is_empty());
        assert!(fields.keywords.is_empty());
    }

    #[test]
    fn test_decompose_does_not_mutate_input() {
        let rec = record(json!({"name": "x", "expected": 1, "foo": "bar"}));
        let before = rec.clone();
        let _ = CaseFields::decompose(&rec, None).unwrap();
        assert_eq!(rec, before);
    }

    #[test]
    fn test_group_prefix_is_title_cased() {
        let rec = record(json!({"name": "Basic Interpolation", "expected": "x"}));
        let fields = CaseFields::decompose(&rec, Some("interpolation")).unwrap();
        assert_eq!(fields.display_name, "Interpolation: Basic Interpolation");
        assert_eq!(fields.name, "Basic Interpolation");
    }

    #[test]
    fn test_consumed_fields_never_leak_into_keywords() {
        let rec = record(json!({"name": "x", "expected": 1, "foo": "bar"}));
        let fields = CaseFields::decompose(&rec, None).unwrap();
        assert_eq!(fields.keywords.len(), 1);
        assert_eq!(fields.keywords.get("foo"), Some(&json!("bar")));
        assert!(!fields.keywords.contains_key("name"));
        assert!(!fields.keywords.contains_key("expected"));
    }

    #[test]
    fn test_args_become_positional_inputs_in_order() {
        let rec = record(json!({"name": "x", "expected": 1, "args": [1, "two", null]}));
        let fields = CaseFields::decompose(&rec, None).unwrap();
        assert_eq!(fields.args, vec![json!(1), json!("two"), json!(null)]);
        assert!(!fields.keywords.contains_key("args"));
    }

    #[test]
    fn test_explicit_keywords_object_replaces_residual() {
        let rec = record(json!({
            "name": "x",
            "expected": 1,
            "keywords": {"a": 1},
            "ignored": true
        }));
        let fields = CaseFields::decompose(&rec, None).unwrap();
        assert_eq!(fields.keywords.len(), 1);
        assert_eq!(fields.keywords.get("a"), Some(&json!(1)));
    }

    #[test]
    fn test_missing_name_is_malformed() {
        let rec = record(json!({"expected": 1}));
        assert_eq!(
            CaseFields::decompose(&rec, None),
            Err(MalformedRecordError::MissingName)
        );
    }

    #[test]
    fn test_missing_expected_is_malformed() {
        let rec = record(json!({"name": "x"}));
        assert_eq!(
            CaseFields::decompose(&rec, None),
            Err(MalformedRecordError::MissingExpected { name: "x".into() })
        );
    }

    #[test]
    fn test_expected_null_is_a_valid_oracle() {
        // `expected: null` is present, not missing.
        let rec = record(json!({"name": "x", "expected": null}));
        let fields = CaseFields::decompose(&rec, None).unwrap();
        assert_eq!(fields.expected, Value::Null);
    }

    #[test]
    fn test_non_array_args_is_malformed() {
        let rec = record(json!({"name": "x", "expected": 1, "args": "oops"}));
        assert_eq!(
            CaseFields::decompose(&rec, None),
            Err(MalformedRecordError::InvalidArgs { name: "x".into() })
        );
    }

    #[test]
    fn test_non_object_keywords_is_malformed() {
        let rec = record(json!({"name": "x", "expected": 1, "keywords": [1]}));
        assert_eq!(
            CaseFields::decompose(&rec, None),
            Err(MalformedRecordError::InvalidKeywords { name: "x".into() })
        );
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("interpolation"), "Interpolation");
        assert_eq!(title_case("inverted sections"), "Inverted Sections");
        assert_eq!(title_case("LAMBDAS"), "Lambdas");
        assert_eq!(title_case(""), "");
    }
}
