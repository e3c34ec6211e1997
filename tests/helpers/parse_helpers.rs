//! Helpers for inspecting parse results.

use amper::parser::{
    AmperNode, AstNode, ErrorCode, ObjectElement, Parse, Property, SyntaxKind, SyntaxNode, parse,
};

/// Parse and assert the source is well-formed
pub fn parse_ok(source: &str) -> Parse {
    let parsed = parse(source);
    assert!(
        parsed.ok(),
        "expected no errors for {:?}, got: {:?}",
        source,
        parsed.errors
    );
    parsed
}

/// Error codes of a parse, in order
pub fn error_codes(source: &str) -> Vec<ErrorCode> {
    parse(source).errors.iter().map(|e| e.code).collect()
}

/// Kinds of all nodes in pre-order, root included
pub fn node_kinds(node: &SyntaxNode) -> Vec<SyntaxKind> {
    node.descendants().map(|n| n.kind()).collect()
}

/// Count nodes of a kind anywhere in the tree
pub fn count_kind(parsed: &Parse, kind: SyntaxKind) -> usize {
    parsed
        .syntax()
        .descendants()
        .filter(|n| n.kind() == kind)
        .count()
}

/// The top-level property with the given name
pub fn top_property(parsed: &Parse, name: &str) -> Property {
    parsed
        .file()
        .find_property(name)
        .unwrap_or_else(|| panic!("no property named {name}"))
}

/// First top-level element
pub fn first_element(parsed: &Parse) -> ObjectElement {
    parsed
        .file()
        .elements()
        .next()
        .expect("file has no elements")
}

/// Compact structural dump, e.g. `FILE(PROPERTY(REFERENCE_EXPRESSION NUMBER_LITERAL))`
pub fn tree_shape(node: &AmperNode) -> String {
    let children: Vec<_> = node.children().map(|child| tree_shape(&child)).collect();
    if children.is_empty() {
        format!("{:?}", node.kind())
    } else {
        format!("{:?}({})", node.kind(), children.join(" "))
    }
}

pub fn shape_of(source: &str) -> String {
    let parsed = parse(source);
    tree_shape(&AmperNode::from_syntax(parsed.syntax()))
}

/// Text of every token in order, trivia included
pub fn token_texts(node: &SyntaxNode) -> Vec<String> {
    node.descendants_with_tokens()
        .filter_map(|e| e.into_token())
        .map(|t| t.text().to_string())
        .collect()
}

#[allow(dead_code)]
pub fn assert_node_text(node: &impl AstNode, expected: &str) {
    assert_eq!(node.syntax().text().to_string(), expected);
}
