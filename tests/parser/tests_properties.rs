//! Parser Tests - Properties, objects and variable declarations

use amper::parser::{AstNode, ObjectElement, PropertyName, SyntaxKind, Value, parse};
use rstest::rstest;

use crate::helpers::parse_helpers::{first_element, parse_ok, shape_of, top_property};
use crate::helpers::source_fixtures::{EMPTY, SIMPLE_PROPERTY};

// ============================================================================
// Property forms
// ============================================================================

#[rstest]
#[case("name", "FILE(PROPERTY(REFERENCE_EXPRESSION))")]
#[case("name = 1", "FILE(PROPERTY(REFERENCE_EXPRESSION NUMBER_LITERAL))")]
#[case(
    "name { x = 1 }",
    "FILE(PROPERTY(REFERENCE_EXPRESSION OBJECT(PROPERTY(REFERENCE_EXPRESSION NUMBER_LITERAL))))"
)]
#[case(
    "name = { x = 1 }",
    "FILE(PROPERTY(REFERENCE_EXPRESSION OBJECT(PROPERTY(REFERENCE_EXPRESSION NUMBER_LITERAL))))"
)]
#[case("'quoted' = true", "FILE(PROPERTY(STRING_LITERAL BOOLEAN_LITERAL))")]
#[case("42 = null", "FILE(PROPERTY(NUMBER_LITERAL NULL_LITERAL))")]
#[case("a.b.c = \"x\"", "FILE(PROPERTY(REFERENCE_EXPRESSION STRING_LITERAL))")]
fn test_property_shapes(#[case] input: &str, #[case] expected: &str) {
    parse_ok(input);
    assert_eq!(shape_of(input), expected);
}

#[test]
fn test_value_and_nested_object_are_exclusive() {
    let assigned = top_property(&parse_ok("name = 1"), "name");
    assert!(assigned.has_assignment());
    assert!(assigned.value().is_some());
    assert!(assigned.nested_object().is_none());

    let nested = top_property(&parse_ok("name { x = 1 }"), "name");
    assert!(!nested.has_assignment());
    assert!(nested.value().is_none());
    assert_eq!(nested.nested_object().unwrap().properties().count(), 1);
}

#[test]
fn test_dotted_property_name() {
    let parsed = parse_ok("settings.kotlin.version = '2.0'");
    let ObjectElement::Property(property) = first_element(&parsed) else {
        panic!("expected a property");
    };
    let Some(PropertyName::Reference(name)) = property.name() else {
        panic!("expected a reference name");
    };
    assert_eq!(name.segments(), vec!["settings", "kotlin", "version"]);
    assert_eq!(property.name_text().as_deref(), Some("settings.kotlin.version"));
}

#[rstest]
#[case(EMPTY, 0)]
#[case(SIMPLE_PROPERTY, 1)]
#[case("a = 1\nb = 2\nc { }", 3)]
#[case("a b c", 3)]
#[case("// only a comment\n", 0)]
fn test_top_level_element_count(#[case] input: &str, #[case] expected: usize) {
    let parsed = parse_ok(input);
    assert_eq!(parsed.file().elements().count(), expected);
}

// ============================================================================
// Objects
// ============================================================================

#[rstest]
#[case("o { a = 1, b = 2 }", 2)]
#[case("o { a = 1 b = 2 }", 2)]
#[case("o { a = 1,\n b = 2, }", 2)]
#[case("o { }", 0)]
#[case("o {\n  a\n  b\n  c\n}", 3)]
fn test_object_element_separators(#[case] input: &str, #[case] expected: usize) {
    let parsed = parse_ok(input);
    let object = top_property(&parsed, "o").nested_object().unwrap();
    assert_eq!(object.elements().count(), expected);
    assert!(object.is_closed());
}

#[test]
fn test_object_find_property_through_contexts() {
    let parsed = parse_ok("o { @jvm { release = 17 }, @test name = 'x' }");
    let object = top_property(&parsed, "o").nested_object().unwrap();
    assert_eq!(object.properties().count(), 0);
    assert!(object.find_property("release").is_some());
    assert!(object.find_property("name").is_some());
    assert!(object.find_property("missing").is_none());
}

#[test]
fn test_object_used_as_collection() {
    let parsed = parse_ok("platforms = { jvm, android, 'iosArm64' }");
    let Some(Value::Object(object)) = top_property(&parsed, "platforms").value() else {
        panic!("expected an object value");
    };
    assert_eq!(object.items(), vec!["jvm", "android", "iosArm64"]);
}

// ============================================================================
// Variable declarations
// ============================================================================

#[rstest]
#[case("val v = 1", "v", SyntaxKind::NUMBER_LITERAL)]
#[case("val name = 'x'", "name", SyntaxKind::STRING_LITERAL)]
#[case("val obj = { a = 1 }", "obj", SyntaxKind::OBJECT)]
#[case("val call = f()", "call", SyntaxKind::INVOCATION_EXPRESSION)]
#[case("val other = a.b", "other", SyntaxKind::REFERENCE_EXPRESSION)]
fn test_variable_declaration(
    #[case] input: &str,
    #[case] expected_name: &str,
    #[case] expected_value: SyntaxKind,
) {
    let parsed = parse_ok(input);
    let ObjectElement::Variable(declaration) = first_element(&parsed) else {
        panic!("expected a variable declaration for {input}");
    };
    assert_eq!(declaration.name().as_deref(), Some(expected_name));
    assert_eq!(
        declaration.value().map(|v| v.syntax().kind()),
        Some(expected_value)
    );
}

#[test]
fn test_val_is_a_keyword() {
    // `val` cannot name a property
    let parsed = parse("val = 1");
    assert!(!parsed.ok());
    assert!(matches!(first_element(&parsed), ObjectElement::Variable(_)));
}
