//! End-to-end batch scenarios against an in-memory document provider.

use std::sync::Arc;

use serde_json::{json, Map, Value};
use specrun_loader::{LoadError, StaticProvider};
use specrun_runner::{
    BatchRunner, BuildError, CaseVariant, GroupSelection, MemorySink, RenderInstance,
    ResultSink, Subject, SubjectError, SubjectFactory, SubjectResult,
};
use specrun_types::{SpecDocument, TestRecord};

fn record(value: Value) -> TestRecord {
    value.as_object().expect("fixture must be an object").clone()
}

/// Interpolation-only renderer: `{{key}}` is replaced with the string value
/// under `key` in the data object.
struct MiniRenderer;

impl RenderInstance for MiniRenderer {
    fn render(&self, template: &str, data: &Value) -> SubjectResult {
        let mut out = template.to_string();
        if let Value::Object(map) = data {
            for (key, value) in map {
                if let Value::String(s) = value {
                    out = out.replace(&format!("{{{{{key}}}}}"), s);
                }
            }
        }
        Ok(Value::String(out))
    }
}

struct MiniFactory;

impl SubjectFactory for MiniFactory {
    fn configure(
        &self,
        _partials: &Map<String, Value>,
    ) -> Result<Box<dyn RenderInstance>, SubjectError> {
        Ok(Box::new(MiniRenderer))
    }
}

fn adapter_variant() -> CaseVariant {
    CaseVariant::ConfigureThenInvoke(Arc::new(MiniFactory))
}

#[test]
fn batch_reports_passing_group_and_surfaces_unreachable_group() {
    // g1 has no document (retrieval failure); g2 has one always-passing
    // record. The run must report g2's case and carry g1 as a build
    // failure with no case entries.
    let provider = StaticProvider::new().with(SpecDocument::new(
        "g2",
        vec![record(json!({
            "name": "pass",
            "expected": "a",
            "template": "{{x}}",
            "data": {"x": "a"}
        }))],
    ));

    let groups = GroupSelection::from_names(["g1", "g2"]).selected(false);
    let runner = BatchRunner::new(&provider, adapter_variant());
    let mut sink = MemorySink::new();
    let report = runner.run(&groups, &mut sink);

    assert_eq!(report.suites.len(), 1);
    assert_eq!(report.suites[0].group, "g2");
    assert!(report.suites[0].all_passed());

    assert_eq!(report.build_failures.len(), 1);
    assert_eq!(report.build_failures[0].group, "g1");
    assert!(matches!(
        report.build_failures[0].error,
        BuildError::Load(LoadError::Retrieval { .. })
    ));

    // No case entry for g1 anywhere.
    assert!(sink.results.iter().all(|(group, _)| group == "g2"));
    assert_eq!(sink.failures.len(), 1);
    assert!(!report.all_passed());
}

#[test]
fn batch_fail_fast_runs_no_case_from_a_malformed_group() {
    let provider = StaticProvider::new().with(SpecDocument::new(
        "bad",
        vec![
            record(json!({"name": "valid", "expected": "", "template": ""})),
            record(json!({"name": "no-oracle"})),
        ],
    ));

    let groups = GroupSelection::from_names(["bad"]).selected(false);
    let runner = BatchRunner::new(&provider, adapter_variant());
    let mut sink = MemorySink::new();
    let report = runner.run(&groups, &mut sink);

    assert!(sink.results.is_empty());
    assert_eq!(report.build_failures.len(), 1);
    assert!(matches!(
        report.build_failures[0].error,
        BuildError::Record { .. }
    ));
}

#[test]
fn batch_adapter_protocol_end_to_end() {
    let provider = StaticProvider::new().with(SpecDocument::new(
        "interpolation",
        vec![
            record(json!({
                "name": "Two Variables",
                "desc": "Adjacent tags render in order.",
                "expected": "ab",
                "template": "{{x}}{{y}}",
                "data": {"x": "a", "y": "b"},
                "partials": {}
            })),
            record(json!({
                "name": "Mismatch",
                "expected": "ba",
                "template": "{{x}}{{y}}",
                "data": {"x": "a", "y": "b"}
            })),
        ],
    ));

    let groups = GroupSelection::from_names(["interpolation"]).selected(false);
    let runner = BatchRunner::new(&provider, adapter_variant());
    let mut sink = MemorySink::new();
    let report = runner.run(&groups, &mut sink);

    let results = &report.suites[0].results;
    assert_eq!(results[0].name, "Interpolation: Two Variables");
    assert!(results[0].outcome.is_pass());

    assert!(results[1].outcome.is_fail());
    match &results[1].outcome {
        specrun_types::CaseOutcome::Fail { expected, .. } => {
            assert_eq!(expected, &json!("ba"));
        }
        other => panic!("expected Fail, got {other:?}"),
    }
}

#[test]
fn batch_generic_variant_runs_plain_callables() {
    // A subject that sums its positional arguments.
    let subject: Arc<dyn Subject> =
        Arc::new(|args: &[Value], _kw: &Map<String, Value>| -> SubjectResult {
            let sum: i64 = args.iter().filter_map(Value::as_i64).sum();
            Ok(json!(sum))
        });

    let provider = StaticProvider::new().with(SpecDocument::new(
        "sums",
        vec![
            record(json!({"name": "three", "expected": 3, "args": [1, 2]})),
            record(json!({"name": "zero", "expected": 0})),
        ],
    ));

    let groups = GroupSelection::from_names(["sums"]).selected(false);
    let runner = BatchRunner::new(&provider, CaseVariant::Generic(subject));
    let mut sink = MemorySink::new();
    let report = runner.run(&groups, &mut sink);

    assert!(report.all_passed());
    assert_eq!(report.summary.total, 2);
}

/// A sink that counts callbacks, proving every outcome is forwarded as it
/// happens rather than batched at the end.
#[derive(Default)]
struct CountingSink {
    cases: usize,
    failures: usize,
}

impl ResultSink for CountingSink {
    fn case_finished(&mut self, _group: &str, _result: &specrun_types::CaseResult) {
        self.cases += 1;
    }

    fn suite_failed(&mut self, _group: &str, _error: &BuildError) {
        self.failures += 1;
    }
}

#[test]
fn batch_forwards_every_outcome_to_the_sink() {
    let provider = StaticProvider::new().with(SpecDocument::new(
        "g",
        vec![
            record(json!({"name": "a", "expected": "", "template": ""})),
            record(json!({"name": "b", "expected": "x", "template": ""})),
        ],
    ));

    let groups = GroupSelection::from_names(["g", "absent"]).selected(false);
    let runner = BatchRunner::new(&provider, adapter_variant());
    let mut sink = CountingSink::default();
    let report = runner.run(&groups, &mut sink);

    assert_eq!(sink.cases, 2);
    assert_eq!(sink.failures, 1);
    assert_eq!(report.summary.total, 2);
    assert_eq!(report.summary.failed, 1);
}
