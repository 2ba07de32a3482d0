use serde_json::json;
use templet::{EngineError, FragmentProcessor};
use templet_test::{assert_eq_ignoring_whitespace, fragment, init_logging, processor};

const TEMPLATE_EMPTY: &str = include_str!("fixtures/templates/empty.tpl");
const TEMPLATE_SAMPLE: &str = include_str!("fixtures/templates/sample.tpl");
const TEMPLATE_SERVICE: &str = include_str!("fixtures/templates/service.hbs");
const TEMPLATE_UNCLOSED: &str = include_str!("fixtures/templates/unclosed.hbs");
const TEMPLATE_UNKNOWN_HELPER: &str = include_str!("fixtures/templates/unknown_helper.hbs");

const CONTEXT_EMPTY: &str = include_str!("fixtures/data/empty_context.json");
const CONTEXT_SAMPLE: &str = include_str!("fixtures/data/sample_context.json");
const CONTEXT_SAMPLE_MISSING_FIELD: &str =
    include_str!("fixtures/data/sample_context_missing_field.json");
const CONTEXT_SERVICE: &str = include_str!("fixtures/data/service_context.json");

const RESULT_EMPTY_CONTENT: &str = include_str!("fixtures/results/empty_content.txt");
const RESULT_EMPTY_CONTEXT: &str = include_str!("fixtures/results/empty_context.txt");
const RESULT_SAMPLE: &str = include_str!("fixtures/results/sample.txt");
const RESULT_SAMPLE_MISSING_FIELD: &str =
    include_str!("fixtures/results/sample_missing_field.txt");
const RESULT_SERVICE: &str = include_str!("fixtures/results/service.txt");

fn default_mode() -> FragmentProcessor {
    processor("handlebars", json!({"cacheSize": 100}))
}

fn strict_mode() -> FragmentProcessor {
    processor("handlebars", json!({"cacheSize": 100, "strict": true}))
}

#[test]
fn renders_templates_in_default_mode() {
    init_logging();
    let engine = default_mode();
    let cases = [
        (TEMPLATE_EMPTY, CONTEXT_SAMPLE, RESULT_EMPTY_CONTENT),
        (TEMPLATE_SAMPLE, CONTEXT_EMPTY, RESULT_EMPTY_CONTEXT),
        (TEMPLATE_SAMPLE, CONTEXT_SAMPLE, RESULT_SAMPLE),
        (TEMPLATE_SERVICE, CONTEXT_SERVICE, RESULT_SERVICE),
        (
            TEMPLATE_SAMPLE,
            CONTEXT_SAMPLE_MISSING_FIELD,
            RESULT_SAMPLE_MISSING_FIELD,
        ),
    ];
    for (template, context, expected) in cases {
        let result = engine.process(&fragment(template, context)).unwrap();
        assert_eq_ignoring_whitespace(expected, &result);
    }
}

#[test]
fn renders_templates_in_strict_mode() {
    init_logging();
    let engine = strict_mode();
    let cases = [
        (TEMPLATE_EMPTY, CONTEXT_SAMPLE, RESULT_EMPTY_CONTENT),
        (TEMPLATE_SAMPLE, CONTEXT_SAMPLE, RESULT_SAMPLE),
        (TEMPLATE_SERVICE, CONTEXT_SERVICE, RESULT_SERVICE),
    ];
    for (template, context, expected) in cases {
        let result = engine.process(&fragment(template, context)).unwrap();
        assert_eq_ignoring_whitespace(expected, &result);
    }
}

#[test]
fn unclosed_block_fails_compilation() {
    init_logging();
    let err = default_mode()
        .process(&fragment(TEMPLATE_UNCLOSED, CONTEXT_SERVICE))
        .unwrap_err();
    assert!(matches!(err, EngineError::Compilation { .. }), "{err}");
}

// An unknown helper parses fine; handlebars only resolves helpers while
// rendering, so the failure surfaces as an evaluation error.
#[test]
fn unknown_helper_fails_evaluation() {
    init_logging();
    let err = default_mode()
        .process(&fragment(TEMPLATE_UNKNOWN_HELPER, CONTEXT_SERVICE))
        .unwrap_err();
    assert!(matches!(err, EngineError::Evaluation { .. }), "{err}");
}

#[test]
fn missing_field_fails_evaluation_in_strict_mode() {
    init_logging();
    let err = strict_mode()
        .process(&fragment(TEMPLATE_SAMPLE, CONTEXT_SAMPLE_MISSING_FIELD))
        .unwrap_err();
    assert!(matches!(err, EngineError::Evaluation { .. }), "{err}");
}

#[test]
fn empty_context_fails_evaluation_in_strict_mode() {
    init_logging();
    let err = strict_mode()
        .process(&fragment(TEMPLATE_SAMPLE, CONTEXT_EMPTY))
        .unwrap_err();
    assert!(matches!(err, EngineError::Evaluation { .. }), "{err}");
}
