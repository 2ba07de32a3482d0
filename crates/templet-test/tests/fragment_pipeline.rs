use serde_json::json;
use templet::{EngineDefinition, EngineRegistry, Fragment, FragmentProcessor};
use templet_test::init_logging;

fn minijinja_processor() -> FragmentProcessor {
    FragmentProcessor::from_definition(
        &EngineRegistry::with_defaults(),
        &EngineDefinition::new("minijinja"),
    )
    .unwrap()
}

#[test]
fn process_all_rewrites_fragment_bodies() {
    init_logging();
    let mut fragments: Vec<Fragment> = serde_json::from_value(json!([
        {
            "type": "snippet",
            "body": "Hello {{ name }}!",
            "payload": {"name": "World"}
        },
        {
            "type": "snippet",
            "body": "{% for n in numbers %}{{ n }};{% endfor %}",
            "payload": {"numbers": [1, 2, 3]}
        }
    ]))
    .unwrap();

    minijinja_processor().process_all(&mut fragments).unwrap();

    assert_eq!(fragments[0].body, "Hello World!");
    assert_eq!(fragments[1].body, "1;2;3;");
    // ids were generated during deserialization and survive processing
    assert!(!fragments[0].id.is_empty());
}

#[test]
fn process_all_stops_at_the_first_failing_fragment() {
    init_logging();
    let mut fragments = vec![
        Fragment::new("snippet", json!({}), "fine"),
        Fragment::new("snippet", json!({}), "{% broken %}"),
        Fragment::new("snippet", json!({}), "never reached {{ x }}"),
    ];

    assert!(minijinja_processor().process_all(&mut fragments).is_err());

    assert_eq!(fragments[0].body, "fine");
    assert_eq!(fragments[1].body, "{% broken %}");
    assert_eq!(fragments[2].body, "never reached {{ x }}");
}

#[test]
fn merged_payload_is_the_rendering_context() {
    init_logging();
    let mut fragment = Fragment::new("snippet", json!({}), "{{ a }}-{{ b }}");
    fragment.merge_in_payload(json!({"a": "first", "b": "stale"}));
    fragment.merge_in_payload(json!({"b": "second"}));

    let result = minijinja_processor().process(&fragment).unwrap();
    assert_eq!(result, "first-second");
}
