//! Typed AST wrappers over the untyped rowan CST.
//!
//! This module provides strongly-typed accessors for Amper syntax nodes.
//! Each struct wraps a SyntaxNode and provides methods to access children.
//! The abstract categories of the language (object elements, values,
//! literals, property names) are enums over the concrete wrappers.

use super::syntax_kind::SyntaxKind;
use super::{SyntaxNode, SyntaxToken};

// ============================================================================
// Helper utilities for reducing code duplication
// ============================================================================

/// Check if a syntax node has a direct child token of the specified kind.
#[inline]
fn has_token(node: &SyntaxNode, kind: SyntaxKind) -> bool {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .any(|t| t.kind() == kind)
}

/// Find the first direct child token of the specified kind.
#[inline]
fn find_token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .find(|t| t.kind() == kind)
}

/// Macro to generate boolean property methods that check for a specific token kind.
///
/// Usage:
/// ```ignore
/// impl MyStruct {
///     has_token_method!(is_negated, NEGAT, "!@test");
/// }
/// ```
macro_rules! has_token_method {
    ($name:ident, $kind:ident) => {
        #[doc = concat!("Check if this node has the `", stringify!($kind), "` token.")]
        pub fn $name(&self) -> bool {
            has_token(&self.0, SyntaxKind::$kind)
        }
    };
    ($name:ident, $kind:ident, $example:literal) => {
        #[doc = concat!("Check if this node has the `", stringify!($kind), "` token (e.g., `", $example, "`).")]
        pub fn $name(&self) -> bool {
            has_token(&self.0, SyntaxKind::$kind)
        }
    };
}

/// Macro to generate a method that finds the first child of a specific AST type.
///
/// Usage:
/// ```ignore
/// impl MyStruct {
///     first_child_method!(callee, ReferenceExpression);
/// }
/// ```
macro_rules! first_child_method {
    ($name:ident, $type:ident) => {
        #[doc = concat!("Get the first `", stringify!($type), "` child of this node.")]
        pub fn $name(&self) -> Option<$type> {
            self.0.children().find_map($type::cast)
        }
    };
}

/// Macro to generate a method that returns an iterator over children of a specific AST type.
///
/// Usage:
/// ```ignore
/// impl MyStruct {
///     children_method!(elements, ObjectElement);
/// }
/// ```
macro_rules! children_method {
    ($name:ident, $type:ident) => {
        #[doc = concat!("Get all `", stringify!($type), "` children of this node.")]
        pub fn $name(&self) -> impl Iterator<Item = $type> + '_ {
            self.0.children().filter_map($type::cast)
        }
    };
}

/// Macro to generate a method that gets the first child node of a type after a specific token.
///
/// Usage:
/// ```ignore
/// impl MyStruct {
///     child_after_token_method!(value, Value, EQ, "Get the value after '='.");
/// }
/// ```
macro_rules! child_after_token_method {
    ($name:ident, $type:ident, $token:ident, $doc:literal) => {
        #[doc = $doc]
        pub fn $name(&self) -> Option<$type> {
            let mut seen_token = false;
            for child in self.0.children_with_tokens() {
                match child {
                    rowan::NodeOrToken::Token(t) if t.kind() == SyntaxKind::$token => {
                        seen_token = true;
                    }
                    rowan::NodeOrToken::Node(n) if seen_token => {
                        if let Some(result) = $type::cast(n) {
                            return Some(result);
                        }
                    }
                    _ => {}
                }
            }
            None
        }
    };
}

/// Trait for AST nodes that wrap a SyntaxNode
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;

    /// Find all descendant nodes of a specific AST type
    fn descendants<T: AstNode>(&self) -> impl Iterator<Item = T> {
        self.syntax().descendants().filter_map(T::cast)
    }

    /// Source range of the node, trivia inside the node included
    fn text_range(&self) -> rowan::TextRange {
        self.syntax().text_range()
    }

    /// Extract the comment preceding this node.
    /// Looks for a block comment (`/* ... */`) or consecutive line comments (`// ...`)
    /// immediately preceding the node (separated only by whitespace).
    fn doc_comment(&self) -> Option<String> {
        extract_doc_comment(self.syntax())
    }
}

/// Extract the comment written in front of a syntax node.
pub fn extract_doc_comment(node: &SyntaxNode) -> Option<String> {
    let mut comments = Vec::new();
    let mut current = node.prev_sibling_or_token();

    while let Some(rowan::NodeOrToken::Token(t)) = current {
        match t.kind() {
            SyntaxKind::WHITESPACE => {
                // A blank line separates the comment from the node
                if t.text().matches('\n').count() > 1 {
                    break;
                }
                current = t.prev_sibling_or_token();
            }
            SyntaxKind::BLOCK_COMMENT => {
                let content = t
                    .text()
                    .strip_prefix("/*")
                    .and_then(|s| s.strip_suffix("*/"))
                    .map(clean_doc_comment)
                    .unwrap_or_default();
                if !content.is_empty() {
                    comments.push(content);
                }
                break;
            }
            SyntaxKind::LINE_COMMENT => {
                let text = t.text();
                let content = text.strip_prefix("//").unwrap_or(text).trim();
                if !content.is_empty() {
                    comments.push(content.to_string());
                }
                current = t.prev_sibling_or_token();
            }
            _ => break,
        }
    }

    if comments.is_empty() {
        return None;
    }

    // Reverse because we collected bottom-up
    comments.reverse();
    Some(comments.join("\n"))
}

/// Clean up comment content by removing leading asterisks and normalizing whitespace.
fn clean_doc_comment(s: &str) -> String {
    s.lines()
        .map(|line| {
            let trimmed = line.trim();
            if let Some(rest) = trimmed.strip_prefix('*') {
                rest.trim_start().to_string()
            } else {
                trimmed.to_string()
            }
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Helper macros
// ============================================================================

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(pub(crate) SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self(node))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

/// Macro to generate an enum over concrete node wrappers, one variant per kind.
///
/// Usage:
/// ```ignore
/// ast_enum!(
///     /// A literal value
///     Literal { String(StringLiteral), Number(NumberLiteral) }
/// );
/// ```
macro_rules! ast_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident($type:ident)),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant($type),)+
        }

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                $($type::can_cast(kind))||+
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                let kind = node.kind();
                $(
                    if $type::can_cast(kind) {
                        return Some(Self::$variant($type(node)));
                    }
                )+
                None
            }

            fn syntax(&self) -> &SyntaxNode {
                match self {
                    $(Self::$variant(n) => n.syntax(),)+
                }
            }
        }

        $(
            impl From<$type> for $name {
                fn from(node: $type) -> Self {
                    Self::$variant(node)
                }
            }
        )+
    };
}

// Submodules are declared after the macros so macro_rules! are in scope
mod elements;
mod node;
mod values;

pub use self::elements::*;
pub use self::node::*;
pub use self::values::*;
