//! Resolution properties that hold for every built-in schema

use std::sync::Arc;
use std::thread;
use yamltag::domain::schema::{failsafe, json};
use yamltag::domain::{
    CollectionStart, NodeEvent, Resolution, Scalar, ScalarStyle, ScalarValue, SchemaBuilder,
    SchemaKind, TagRegistry, TagResolver,
};
use yamltag::YamlTagError;

const MAP: &str = "tag:yaml.org,2002:map";
const SEQ: &str = "tag:yaml.org,2002:seq";
const STR: &str = "tag:yaml.org,2002:str";

const SAMPLES: &[&str] = &[
    "", "~", "null", "NULL", "true", "False", "yes", "0", "-17", "+3", "0o17", "0x1f", "0b11",
    "1.5", "-.inf", ".NaN", "1e9", "2001-12-14", "<<", "190:20:30", "hello", "hello world",
    "a: b", "- x", "#not a comment", "\u{1F600}",
];

#[test]
fn test_bijection_for_every_schema() {
    for kind in SchemaKind::ALL {
        let schema = kind.build().unwrap();
        for alias in schema.registry().aliases() {
            assert_eq!(
                schema.registry().short_to_long(&alias.short),
                Some(alias.long.as_str())
            );
            assert_eq!(
                schema.registry().long_to_short(&alias.long),
                Some(alias.short.as_str())
            );
        }
    }
}

#[test]
fn test_duplicate_alias_scenario() {
    let mut registry = TagRegistry::new();
    registry.register("!!map", MAP).unwrap();

    let result = registry.register("!!map", "tag:custom,2020:map");
    assert!(matches!(result, Err(YamlTagError::DuplicateAlias { .. })));

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.aliases()[0].long, MAP);
}

#[test]
fn test_builder_duplicate_alias_leaves_builder_usable() {
    let mut builder = failsafe::builder().unwrap();
    assert!(builder.register_tag("!!map", "tag:custom,2020:map").is_err());
    assert_eq!(builder.registry().len(), 3);

    let schema = builder.build().unwrap();
    assert_eq!(schema.expand_tag("!!map"), MAP);
}

#[test]
fn test_resolution_is_deterministic() {
    for kind in SchemaKind::ALL {
        let schema = kind.build().unwrap();
        for text in SAMPLES {
            let scalar = Scalar::plain(*text);
            let first = schema.try_resolve_scalar(&scalar, true);
            let second = schema.try_resolve_scalar(&scalar, true);
            // NaN never equals itself; compare tags for it
            match (&first, &second) {
                (Some(a), Some(b)) => assert_eq!(a.tag, b.tag, "{} {:?}", kind, text),
                (None, None) => {}
                _ => panic!("{} resolved {:?} inconsistently", kind, text),
            }
        }
    }
}

#[test]
fn test_parse_value_never_changes_tag() {
    for kind in SchemaKind::ALL {
        let schema = kind.build().unwrap();
        for text in SAMPLES {
            let scalar = Scalar::plain(*text);
            let with_value = schema.try_resolve_scalar(&scalar, true).map(|r| r.tag);
            let without_value = schema.try_resolve_scalar(&scalar, false);
            assert_eq!(
                with_value,
                without_value.as_ref().map(|r| r.tag.clone()),
                "{} {:?}",
                kind,
                text
            );
            if let Some(resolved) = without_value {
                assert_eq!(resolved.value, None);
            }
        }
    }
}

#[test]
fn test_fallback_gating() {
    for kind in [SchemaKind::Failsafe, SchemaKind::Core, SchemaKind::Extended] {
        let schema = kind.build().unwrap();
        for text in SAMPLES {
            assert!(
                schema.try_resolve_scalar(&Scalar::plain(*text), true).is_some(),
                "{} failed to resolve {:?}",
                kind,
                text
            );
        }
    }

    let mut builder = SchemaKind::Core.builder().unwrap();
    builder.allow_failsafe_string(false);
    let strict = builder.build().unwrap();
    assert!(strict
        .try_resolve_scalar(&Scalar::plain("not: [a number]"), true)
        .is_none());

    let json = json::schema().unwrap();
    assert!(json.try_resolve_scalar(&Scalar::plain("hello"), true).is_none());
}

#[test]
fn test_collection_defaults() {
    for kind in SchemaKind::ALL {
        let schema = kind.build().unwrap();
        assert_eq!(
            schema.resolve_mapping_tag(&CollectionStart::untagged()).as_deref(),
            Some(MAP)
        );
        assert_eq!(
            schema.resolve_sequence_tag(&CollectionStart::untagged()).as_deref(),
            Some(SEQ)
        );

        for parse_value in [true, false] {
            let event = NodeEvent::MappingStart(CollectionStart::untagged());
            assert_eq!(
                schema.resolve_node(&event, parse_value),
                Some(Resolution::Collection(MAP.to_string()))
            );
            let event = NodeEvent::SequenceStart(CollectionStart::untagged());
            assert_eq!(
                schema.resolve_node(&event, parse_value),
                Some(Resolution::Collection(SEQ.to_string()))
            );
        }
    }
}

#[test]
fn test_quoted_scalar_immunity() {
    let styles = [
        ScalarStyle::SingleQuoted,
        ScalarStyle::DoubleQuoted,
        ScalarStyle::Literal,
        ScalarStyle::Folded,
    ];
    for kind in SchemaKind::ALL {
        let schema = kind.build().unwrap();
        for style in styles {
            for text in ["42", "true", "null", "~", "", "1.5", "2001-12-14"] {
                let resolved = schema
                    .try_resolve_scalar(&Scalar::with_style(text, style), true)
                    .unwrap();
                assert_eq!(resolved.tag, STR, "{} {:?} {:?}", kind, style, text);
                assert_eq!(resolved.value, Some(ScalarValue::Str(text.to_string())));
            }
        }
    }
}

#[test]
fn test_failsafe_hello_scenario() {
    let schema = failsafe::schema().unwrap();
    let resolved = schema.try_resolve_scalar(&Scalar::plain("hello"), true).unwrap();
    assert_eq!(resolved.tag, STR);
    assert_eq!(resolved.value, Some(ScalarValue::Str("hello".to_string())));
}

#[test]
fn test_implicit_tags_and_value_tags() {
    let core = SchemaKind::Core.build().unwrap();
    assert!(core.is_tag_implicit(STR));
    assert!(core.is_tag_implicit(MAP));
    assert!(core.is_tag_implicit("tag:yaml.org,2002:int"));
    assert!(!core.is_tag_implicit("tag:yaml.org,2002:timestamp"));

    assert_eq!(
        core.default_tag_for_value(&ScalarValue::Int(5)),
        Some("tag:yaml.org,2002:int")
    );
    assert_eq!(
        core.default_tag_for_value(&ScalarValue::Float(0.1)),
        Some("tag:yaml.org,2002:float")
    );
    assert_eq!(
        core.default_tag_for_value(&ScalarValue::Null),
        Some("tag:yaml.org,2002:null")
    );

    let failsafe = failsafe::schema().unwrap();
    assert_eq!(failsafe.default_tag_for_value(&ScalarValue::Bool(true)), None);
    assert_eq!(
        failsafe.default_tag_for_value(&ScalarValue::Str("x".to_string())),
        Some(STR)
    );

    let extended = SchemaKind::Extended.build().unwrap();
    assert!(extended.is_tag_implicit("tag:yaml.org,2002:timestamp"));
}

#[test]
fn test_custom_schema_from_scratch() {
    let mut builder = SchemaBuilder::new("points");
    builder
        .register_tag("!point", "tag:example.com,2024:point")
        .unwrap()
        .register_tag("!!str", STR)
        .unwrap();
    builder
        .add_scalar_rule(
            "tag:example.com,2024:point",
            r"\([0-9]+, ?[0-9]+\)",
            |text| Some(ScalarValue::Str(text.to_string())),
        )
        .unwrap();
    builder.allow_failsafe_string(true);
    let schema = builder.build().unwrap();

    let resolved = schema.try_resolve_scalar(&Scalar::plain("(1, 2)"), false).unwrap();
    assert_eq!(resolved.tag, "tag:example.com,2024:point");
    assert_eq!(schema.default_tag_for_mapping(), None);
}

#[test]
fn test_sealed_schema_shared_across_threads() {
    let schema = Arc::new(SchemaKind::Core.build().unwrap());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let schema = Arc::clone(&schema);
            thread::spawn(move || {
                let text = i.to_string();
                for _ in 0..100 {
                    let resolved = schema
                        .try_resolve_scalar(&Scalar::plain(text.as_str()), true)
                        .unwrap();
                    assert_eq!(resolved.value, Some(ScalarValue::Int(i)));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
