//! Parser Tests - Context names, context blocks and contextual statements

use amper::parser::{AstNode, ContextualElement, ObjectElement, SyntaxKind};
use rstest::rstest;

use crate::helpers::parse_helpers::{first_element, parse_ok, shape_of};

fn first_contextual(source: &str) -> ContextualElement {
    let parsed = parse_ok(source);
    first_element(&parsed)
        .as_contextual()
        .unwrap_or_else(|| panic!("expected a contextual element for {source}"))
}

#[rstest]
#[case("@test { x = 1 }", vec![("test", false)])]
#[case("!@test { x = 1 }", vec![("test", true)])]
#[case("@test, @other { x = 1 }", vec![("test", false), ("other", false)])]
#[case("@a @b { }", vec![("a", false), ("b", false)])]
#[case("!@android, @ios { }", vec![("android", true), ("ios", false)])]
fn test_context_names(#[case] input: &str, #[case] expected: Vec<(&str, bool)>) {
    let contextual = first_contextual(input);
    assert!(matches!(contextual, ContextualElement::Block(_)));
    let names: Vec<_> = contextual
        .context_names()
        .iter()
        .map(|n| (n.name().unwrap().to_string(), n.is_negated()))
        .collect();
    let expected: Vec<_> = expected
        .into_iter()
        .map(|(name, negated)| (name.to_string(), negated))
        .collect();
    assert_eq!(names, expected);
}

#[test]
fn test_context_block_elements() {
    let ContextualElement::Block(block) = first_contextual("@jvm { a = 1, b { }, f(), val v = 2 }")
    else {
        panic!("expected a context block");
    };
    let kinds: Vec<_> = block.elements().map(|e| e.syntax().kind()).collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::PROPERTY,
            SyntaxKind::PROPERTY,
            SyntaxKind::INVOCATION_ELEMENT,
            SyntaxKind::VARIABLE_DECLARATION,
        ]
    );
}

#[rstest]
#[case("@jvm a = 1", SyntaxKind::PROPERTY)]
#[case("@jvm a", SyntaxKind::PROPERTY)]
#[case("@jvm a { b = 1 }", SyntaxKind::PROPERTY)]
#[case("@jvm f(1)", SyntaxKind::INVOCATION_ELEMENT)]
#[case("@jvm val v = 1", SyntaxKind::VARIABLE_DECLARATION)]
#[case("@jvm 'org.example:lib:1.0'", SyntaxKind::PROPERTY)]
fn test_contextual_statement(#[case] input: &str, #[case] expected: SyntaxKind) {
    let ContextualElement::Statement(statement) = first_contextual(input) else {
        panic!("expected a contextual statement for {input}");
    };
    assert_eq!(statement.context_names().count(), 1);
    assert_eq!(statement.statement().map(|s| s.syntax().kind()), Some(expected));
}

#[test]
fn test_nested_contexts() {
    assert_eq!(
        shape_of("@a { @b { x } }"),
        "FILE(CONTEXT_BLOCK(CONTEXT_NAME CONTEXT_BLOCK(CONTEXT_NAME PROPERTY(REFERENCE_EXPRESSION))))"
    );
}

#[test]
fn test_contexts_inside_objects() {
    let parsed = parse_ok("dependencies { @test junit, !@jvm { a } }");
    let ObjectElement::Property(property) = first_element(&parsed) else {
        panic!("expected a property");
    };
    let object = property.nested_object().unwrap();
    let contextual: Vec<_> = object
        .elements()
        .filter_map(|e| e.as_contextual())
        .map(|c| c.contexts())
        .collect();
    assert_eq!(contextual, vec![vec!["test"], vec!["jvm"]]);
    assert_eq!(object.items(), vec!["junit", "a"]);
}
