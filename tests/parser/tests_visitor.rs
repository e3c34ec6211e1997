//! Parser Tests - Visitor dispatch and traversal

use amper::parser::{
    AmperNode, AmperVisitor, AstNode, ErrorNode, Object, ObjectElement, Property, SyntaxKind,
    Value, parse, walk_children,
};

use crate::helpers::source_fixtures::MODULE_FILE;

fn visit(source: &str, visitor: &mut impl AmperVisitor) {
    let parsed = parse(source);
    AmperNode::File(parsed.file()).accept(visitor);
}

/// Records every value, then keeps walking
#[derive(Default)]
struct ValueKinds(Vec<SyntaxKind>);

impl AmperVisitor for ValueKinds {
    fn visit_value(&mut self, value: &Value) {
        self.0.push(value.syntax().kind());
        walk_children(self, &AmperNode::from(value.clone()));
    }
}

#[test]
fn test_value_category_sees_every_value_kind() {
    let mut visitor = ValueKinds::default();
    visit("a = f(1, .x, { b = null })", &mut visitor);
    assert_eq!(
        visitor.0,
        vec![
            SyntaxKind::REFERENCE_EXPRESSION,
            SyntaxKind::INVOCATION_EXPRESSION,
            SyntaxKind::REFERENCE_EXPRESSION,
            SyntaxKind::NUMBER_LITERAL,
            SyntaxKind::CONTEXTUAL_PROPERTY_REFERENCE,
            SyntaxKind::REFERENCE_EXPRESSION,
            SyntaxKind::OBJECT,
            SyntaxKind::REFERENCE_EXPRESSION,
            SyntaxKind::NULL_LITERAL,
        ]
    );
}

/// Records every object element, then keeps walking
#[derive(Default)]
struct ElementKinds(Vec<SyntaxKind>);

impl AmperVisitor for ElementKinds {
    fn visit_object_element(&mut self, element: &ObjectElement) {
        self.0.push(element.syntax().kind());
        walk_children(self, &AmperNode::from(element.clone()));
    }
}

#[test]
fn test_object_element_category_includes_contextual_elements() {
    let mut visitor = ElementKinds::default();
    visit("@jvm { a = 1 }\nf()\nval v = 2\n@test b", &mut visitor);
    assert_eq!(
        visitor.0,
        vec![
            SyntaxKind::CONTEXT_BLOCK,
            SyntaxKind::PROPERTY,
            SyntaxKind::INVOCATION_ELEMENT,
            SyntaxKind::VARIABLE_DECLARATION,
            SyntaxKind::CONTEXTUAL_STATEMENT,
            SyntaxKind::PROPERTY,
        ]
    );
}

/// Collects property names but does not descend into objects
#[derive(Default)]
struct ShallowProperties(Vec<String>);

impl AmperVisitor for ShallowProperties {
    fn visit_property(&mut self, property: &Property) {
        if let Some(name) = property.name_text() {
            self.0.push(name);
        }
        walk_children(self, &AmperNode::Property(property.clone()));
    }

    fn visit_object(&mut self, _object: &Object) {}
}

#[test]
fn test_override_can_stop_traversal() {
    let mut visitor = ShallowProperties::default();
    visit("top = 1\nobj { inner = 2 }\nlast = { hidden = 3 }", &mut visitor);
    assert_eq!(visitor.0, vec!["top", "obj", "last"]);
}

/// Counts every node through the most general method
#[derive(Default)]
struct NodeCounter(usize);

impl AmperVisitor for NodeCounter {
    fn visit_node(&mut self, node: &AmperNode) {
        self.0 += 1;
        walk_children(self, node);
    }
}

#[test]
fn test_node_fallback_reaches_every_node() {
    let parsed = parse(MODULE_FILE);
    let mut visitor = NodeCounter::default();
    AmperNode::File(parsed.file()).accept(&mut visitor);
    assert_eq!(visitor.0, parsed.syntax().descendants().count());
}

#[derive(Default)]
struct ErrorTexts(Vec<String>);

impl AmperVisitor for ErrorTexts {
    fn visit_error(&mut self, error: &ErrorNode) {
        self.0.push(error.text());
    }
}

#[test]
fn test_error_nodes_are_visited() {
    let mut visitor = ErrorTexts::default();
    visit("a = 1 }\nb { : }", &mut visitor);
    assert_eq!(visitor.0, vec!["}", ":"]);
}

#[test]
fn test_visitor_as_trait_object() {
    let parsed = parse("a = 1\nb = 2");
    let mut counter = NodeCounter::default();
    let visitor: &mut dyn AmperVisitor = &mut counter;
    AmperNode::File(parsed.file()).accept(visitor);
    assert_eq!(counter.0, 7);
}
