//! In-process harness for exercising templet backends end to end.
//!
//! The integration tests in this crate drive both built-in backends through
//! the public registry, the way a deployment would: an
//! [`EngineDefinition`](templet::EngineDefinition) selects a factory, the
//! resulting engine processes fixture fragments, and outputs are compared
//! against expected results ignoring whitespace (backends differ in how
//! they trim around tags).
//!
//! Fixtures live under `tests/fixtures/` as template / context / result
//! triples.

use templet::{EngineDefinition, EngineRegistry, Fragment, FragmentProcessor};

/// Initializes test logging once; safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds a snippet fragment from a template body and a JSON context string.
///
/// Panics on malformed context JSON — fixtures are test inputs.
pub fn fragment(template: &str, context_json: &str) -> Fragment {
    let context: serde_json::Value =
        serde_json::from_str(context_json).expect("fixture context must be valid JSON");
    let mut fragment = Fragment::new("snippet", serde_json::json!({}), template.trim());
    fragment.merge_in_payload(context);
    fragment
}

/// Resolves a processor for the given factory/config through the default
/// registry.
pub fn processor(factory: &str, config: serde_json::Value) -> FragmentProcessor {
    let definition = EngineDefinition::new(factory).with_config(config);
    FragmentProcessor::from_definition(&EngineRegistry::with_defaults(), &definition)
        .expect("built-in factory must resolve")
}

/// Asserts two renderings are equal ignoring all whitespace.
///
/// Engines differ in newline trimming around tags; what matters for the
/// fixtures is the rendered content.
pub fn assert_eq_ignoring_whitespace(expected: &str, actual: &str) {
    let squash = |s: &str| s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
    assert_eq!(
        squash(expected),
        squash(actual),
        "rendered output mismatch\nexpected:\n{expected}\nactual:\n{actual}"
    );
}
