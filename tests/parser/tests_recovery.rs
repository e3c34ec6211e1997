//! Parser Tests - Diagnostics and error recovery

use amper::parser::{ErrorCode, ObjectElement, SyntaxKind, Value, parse};
use rstest::rstest;

use crate::helpers::parse_helpers::{count_kind, error_codes, first_element, top_property};
use crate::helpers::source_fixtures::MIXED_FILE;

#[rstest]
#[case("obj { a = }", vec![ErrorCode::E0401])]
#[case("a = ", vec![ErrorCode::E0401])]
#[case("obj { a = 1", vec![ErrorCode::E0201])]
#[case("@jvm { a = 1", vec![ErrorCode::E0201])]
#[case("a = f(1, 2", vec![ErrorCode::E0202])]
#[case("a = 1 }", vec![ErrorCode::E0203])]
#[case("a = 1 )", vec![ErrorCode::E0203])]
#[case("a = 'open", vec![ErrorCode::E0102])]
#[case("a = 1 /* open", vec![ErrorCode::E0103])]
#[case("a = 1 %", vec![ErrorCode::E0101])]
#[case("a = %", vec![ErrorCode::E0401, ErrorCode::E0101])]
#[case("a = % %", vec![ErrorCode::E0401, ErrorCode::E0101, ErrorCode::E0101])]
#[case("o { = % 'open\n }", vec![ErrorCode::E0901, ErrorCode::E0101, ErrorCode::E0102])]
#[case("a = f(%)", vec![ErrorCode::E0101])]
#[case("val", vec![ErrorCode::E0301])]
#[case("val v", vec![ErrorCode::E0302])]
#[case("val v =", vec![ErrorCode::E0401])]
#[case("@jvm", vec![ErrorCode::E0303])]
#[case("@ { }", vec![ErrorCode::E0304])]
#[case("a = f(=)", vec![ErrorCode::E0402])]
#[case("a = [1]", vec![ErrorCode::E0401, ErrorCode::E0203])]
#[case("obj { : , a }", vec![ErrorCode::E0901])]
#[case("a = f(1, =, 3)", vec![ErrorCode::E0402])]
fn test_error_codes(#[case] input: &str, #[case] expected: Vec<ErrorCode>) {
    assert_eq!(error_codes(input), expected, "for {input:?}");
}

#[test]
fn test_missing_value_gives_error_slot() {
    let parsed = parse("obj { a = }");
    assert_eq!(parsed.errors.len(), 1);
    assert_eq!(count_kind(&parsed, SyntaxKind::ERROR), 1);

    let object = top_property(&parsed, "obj").nested_object().unwrap();
    let property = object.find_property("a").unwrap();
    assert!(property.has_assignment());
    assert!(property.has_error_value());
    assert!(object.is_closed());
}

#[test]
fn test_missing_value_error_points_at_next_token() {
    let parsed = parse("obj { a = }");
    let error = &parsed.errors[0];
    assert_eq!(u32::from(error.range.start()), 10);
    assert!(error.expected.as_deref().unwrap().contains("value"));
}

#[test]
fn test_unclosed_brace_points_back_at_opening() {
    let parsed = parse("obj {\n  a = 1\n");
    let error = &parsed.errors[0];
    assert_eq!(error.code, ErrorCode::E0201);
    assert_eq!(error.related.len(), 1);
    assert_eq!(u32::from(error.related[0].range.start()), 4);
}

#[test]
fn test_recovery_resumes_at_next_element() {
    let parsed = parse("a = 1\n) ) )\nb = 2\nc { : }\nd = 4");
    assert_eq!(
        parsed.errors.iter().map(|e| e.code).collect::<Vec<_>>(),
        vec![ErrorCode::E0203, ErrorCode::E0901]
    );
    for name in ["a", "b", "c", "d"] {
        assert!(
            parsed.file().find_property(name).is_some(),
            "property {name} lost in recovery"
        );
    }
}

#[rstest]
#[case::block_after_invocation("o { f(1) { x = 1 } y = 2 }")]
#[case::block_after_stray_token("o { : { x = 1 } y = 2 }")]
#[case::parens_after_stray_token("o { : (x, 1) y = 2 }")]
fn test_skipped_group_does_not_close_enclosing_object(#[case] source: &str) {
    let parsed = parse(source);
    assert_eq!(
        parsed.errors.iter().map(|e| e.code).collect::<Vec<_>>(),
        vec![ErrorCode::E0901],
        "for {source:?}"
    );
    assert_eq!(parsed.file().elements().count(), 1);

    let object = top_property(&parsed, "o").nested_object().unwrap();
    assert!(object.find_property("y").is_some());
    assert!(object.find_property("x").is_none());
    assert!(object.is_closed());
    assert_eq!(count_kind(&parsed, SyntaxKind::ERROR), 1);
}

#[test]
fn test_skipped_group_in_arguments() {
    let parsed = parse("a = f(= (1), 2)");
    assert_eq!(
        parsed.errors.iter().map(|e| e.code).collect::<Vec<_>>(),
        vec![ErrorCode::E0402]
    );
    let Some(Value::Invocation(invocation)) = top_property(&parsed, "a").value() else {
        panic!("expected an invocation");
    };
    assert_eq!(invocation.arguments().count(), 1);
    assert!(invocation.is_closed());
}

#[test]
fn test_bad_argument_keeps_invocation() {
    let parsed = parse("a = f(1, =, 3)");
    assert_eq!(parsed.errors.len(), 1);
    let Some(Value::Invocation(invocation)) = top_property(&parsed, "a").value() else {
        panic!("expected an invocation");
    };
    assert_eq!(invocation.arguments().count(), 2);
    assert!(invocation.is_closed());
}

#[test]
fn test_unclosed_invocation_stops_at_closing_brace() {
    let parsed = parse("o { a = f(1 }\nb = 2");
    assert_eq!(
        parsed.errors.iter().map(|e| e.code).collect::<Vec<_>>(),
        vec![ErrorCode::E0202]
    );
    assert!(parsed.file().find_property("b").is_some());
}

#[test]
fn test_variable_declaration_completes_after_error() {
    let parsed = parse("val 1\nb = 2");
    assert_eq!(parsed.errors.len(), 1);
    assert!(matches!(first_element(&parsed), ObjectElement::Variable(_)));
    assert!(parsed.file().find_property("b").is_some());
}

#[test]
fn test_mixed_file_keeps_valid_parts() {
    let parsed = parse(MIXED_FILE);
    assert!(!parsed.ok());
    let file = parsed.file();
    assert!(file.find_property("product").is_some());
    assert!(file.find_property("dependencies").is_some());
    assert!(file.find_property("settings").is_some());
}

#[test]
fn test_diagnostics_sorted_by_position() {
    let parsed = parse("x { a = f(1 }\n} ]\ny = 'z\n/*");
    let starts: Vec<_> = parsed.errors.iter().map(|e| e.range.start()).collect();
    let mut sorted = starts.clone();
    sorted.sort();
    assert_eq!(starts, sorted);
    assert!(parsed.errors.len() >= 4, "errors: {:?}", parsed.errors);
}

#[test]
fn test_nesting_limit() {
    let depth = 10_000;
    let source = format!("{}{}", "a { ".repeat(depth), "}".repeat(depth));
    let parsed = parse(&source);
    assert!(parsed.errors.iter().any(|e| e.code == ErrorCode::E0204));
    assert_eq!(parsed.syntax().text().to_string(), source);
}

#[test]
fn test_nesting_limit_is_configurable() {
    use amper::parser::{ParseConfig, parse_with_config};

    let source = "a { b { c { d = 1 } } }";
    assert!(parse(source).ok());

    let config = ParseConfig::default().with_max_depth(2);
    let parsed = parse_with_config(source, &config);
    assert_eq!(
        parsed.errors.iter().map(|e| e.code).collect::<Vec<_>>(),
        vec![ErrorCode::E0204]
    );
    assert_eq!(parsed.syntax().text().to_string(), source);
    assert!(parsed.file().find_property("a").is_some());
}

#[test]
fn test_smallest_nesting_limit_parses_flat_files() {
    use amper::parser::{ParseConfig, parse_with_config};

    let config = ParseConfig::default().with_max_depth(1);
    assert_eq!(config.max_depth, 2);
    assert!(parse_with_config("a = 1\nb = 'x'", &config).ok());

    let parsed = parse_with_config("a = f(1)", &config);
    assert_eq!(
        parsed.errors.iter().map(|e| e.code).collect::<Vec<_>>(),
        vec![ErrorCode::E0204]
    );
    assert_eq!(parsed.syntax().text().to_string(), "a = f(1)");
}
