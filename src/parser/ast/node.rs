//! One closed enum over every concrete node kind.
//!
//! [`AmperNode::from_syntax`] is the factory from raw CST nodes to typed
//! wrappers and [`AmperNode::accept`] dispatches to an [`AmperVisitor`].

use super::*;
use crate::parser::visitor::AmperVisitor;

/// Any concrete syntax node, typed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AmperNode {
    File(File),
    Object(Object),
    Property(Property),
    ConstructorReference(ConstructorReference),
    ReferenceExpression(ReferenceExpression),
    ContextualPropertyReference(ContextualPropertyReference),
    InvocationExpression(InvocationExpression),
    InvocationElement(InvocationElement),
    ContextBlock(ContextBlock),
    ContextualStatement(ContextualStatement),
    ContextName(ContextName),
    VariableDeclaration(VariableDeclaration),
    StringLiteral(StringLiteral),
    NumberLiteral(NumberLiteral),
    BooleanLiteral(BooleanLiteral),
    NullLiteral(NullLiteral),
    Error(ErrorNode),
}

impl AmperNode {
    /// Wrap a CST node.
    ///
    /// # Panics
    ///
    /// When given a node whose kind is a token kind. Trees built by the
    /// parser never contain such nodes.
    pub fn from_syntax(node: SyntaxNode) -> Self {
        match node.kind() {
            SyntaxKind::FILE => Self::File(File(node)),
            SyntaxKind::OBJECT => Self::Object(Object(node)),
            SyntaxKind::PROPERTY => Self::Property(Property(node)),
            SyntaxKind::CONSTRUCTOR_REFERENCE => {
                Self::ConstructorReference(ConstructorReference(node))
            }
            SyntaxKind::REFERENCE_EXPRESSION => {
                Self::ReferenceExpression(ReferenceExpression(node))
            }
            SyntaxKind::CONTEXTUAL_PROPERTY_REFERENCE => {
                Self::ContextualPropertyReference(ContextualPropertyReference(node))
            }
            SyntaxKind::INVOCATION_EXPRESSION => {
                Self::InvocationExpression(InvocationExpression(node))
            }
            SyntaxKind::INVOCATION_ELEMENT => Self::InvocationElement(InvocationElement(node)),
            SyntaxKind::CONTEXT_BLOCK => Self::ContextBlock(ContextBlock(node)),
            SyntaxKind::CONTEXTUAL_STATEMENT => {
                Self::ContextualStatement(ContextualStatement(node))
            }
            SyntaxKind::CONTEXT_NAME => Self::ContextName(ContextName(node)),
            SyntaxKind::VARIABLE_DECLARATION => {
                Self::VariableDeclaration(VariableDeclaration(node))
            }
            SyntaxKind::STRING_LITERAL => Self::StringLiteral(StringLiteral(node)),
            SyntaxKind::NUMBER_LITERAL => Self::NumberLiteral(NumberLiteral(node)),
            SyntaxKind::BOOLEAN_LITERAL => Self::BooleanLiteral(BooleanLiteral(node)),
            SyntaxKind::NULL_LITERAL => Self::NullLiteral(NullLiteral(node)),
            SyntaxKind::ERROR => Self::Error(ErrorNode(node)),
            kind @ (SyntaxKind::WHITESPACE
            | SyntaxKind::LINE_COMMENT
            | SyntaxKind::BLOCK_COMMENT
            | SyntaxKind::IDENTIFIER
            | SyntaxKind::NUMBER
            | SyntaxKind::SINGLE_QUOTED_STRING
            | SyntaxKind::DOUBLE_QUOTED_STRING
            | SyntaxKind::TRUE_KW
            | SyntaxKind::FALSE_KW
            | SyntaxKind::NULL_KW
            | SyntaxKind::VAL_KW
            | SyntaxKind::L_CURLY
            | SyntaxKind::R_CURLY
            | SyntaxKind::L_PAREN
            | SyntaxKind::R_PAREN
            | SyntaxKind::L_BRACKET
            | SyntaxKind::R_BRACKET
            | SyntaxKind::COMMA
            | SyntaxKind::DOT
            | SyntaxKind::COLON
            | SyntaxKind::EQ
            | SyntaxKind::AT
            | SyntaxKind::NEGAT
            | SyntaxKind::SHARP
            | SyntaxKind::EOF
            | SyntaxKind::TOMBSTONE
            | SyntaxKind::__LAST) => {
                unreachable!("{kind:?} is not a node kind")
            }
        }
    }

    /// Call the visitor method for this node's kind
    pub fn accept<V: AmperVisitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Self::File(n) => visitor.visit_file(n),
            Self::Object(n) => visitor.visit_object(n),
            Self::Property(n) => visitor.visit_property(n),
            Self::ConstructorReference(n) => visitor.visit_constructor_reference(n),
            Self::ReferenceExpression(n) => visitor.visit_reference_expression(n),
            Self::ContextualPropertyReference(n) => {
                visitor.visit_contextual_property_reference(n)
            }
            Self::InvocationExpression(n) => visitor.visit_invocation_expression(n),
            Self::InvocationElement(n) => visitor.visit_invocation_element(n),
            Self::ContextBlock(n) => visitor.visit_context_block(n),
            Self::ContextualStatement(n) => visitor.visit_contextual_statement(n),
            Self::ContextName(n) => visitor.visit_context_name(n),
            Self::VariableDeclaration(n) => visitor.visit_variable_declaration(n),
            Self::StringLiteral(n) => visitor.visit_string_literal(n),
            Self::NumberLiteral(n) => visitor.visit_number_literal(n),
            Self::BooleanLiteral(n) => visitor.visit_boolean_literal(n),
            Self::NullLiteral(n) => visitor.visit_null_literal(n),
            Self::Error(n) => visitor.visit_error(n),
        }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.syntax().kind()
    }

    /// Typed children, in source order
    pub fn children(&self) -> impl Iterator<Item = AmperNode> + '_ {
        self.syntax().children().map(AmperNode::from_syntax)
    }
}

impl AstNode for AmperNode {
    fn can_cast(kind: SyntaxKind) -> bool {
        kind.is_node()
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        if Self::can_cast(node.kind()) {
            Some(Self::from_syntax(node))
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::File(n) => n.syntax(),
            Self::Object(n) => n.syntax(),
            Self::Property(n) => n.syntax(),
            Self::ConstructorReference(n) => n.syntax(),
            Self::ReferenceExpression(n) => n.syntax(),
            Self::ContextualPropertyReference(n) => n.syntax(),
            Self::InvocationExpression(n) => n.syntax(),
            Self::InvocationElement(n) => n.syntax(),
            Self::ContextBlock(n) => n.syntax(),
            Self::ContextualStatement(n) => n.syntax(),
            Self::ContextName(n) => n.syntax(),
            Self::VariableDeclaration(n) => n.syntax(),
            Self::StringLiteral(n) => n.syntax(),
            Self::NumberLiteral(n) => n.syntax(),
            Self::BooleanLiteral(n) => n.syntax(),
            Self::NullLiteral(n) => n.syntax(),
            Self::Error(n) => n.syntax(),
        }
    }
}

// ============================================================================
// Widening conversions between the categories
// ============================================================================

impl From<Literal> for Value {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::String(n) => Self::String(n),
            Literal::Number(n) => Self::Number(n),
            Literal::Boolean(n) => Self::Boolean(n),
            Literal::Null(n) => Self::Null(n),
        }
    }
}

impl From<ContextualElement> for ObjectElement {
    fn from(element: ContextualElement) -> Self {
        match element {
            ContextualElement::Block(n) => Self::ContextBlock(n),
            ContextualElement::Statement(n) => Self::ContextualStatement(n),
        }
    }
}

impl From<Value> for AmperNode {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(n) => Self::Object(n),
            Value::String(n) => Self::StringLiteral(n),
            Value::Number(n) => Self::NumberLiteral(n),
            Value::Boolean(n) => Self::BooleanLiteral(n),
            Value::Null(n) => Self::NullLiteral(n),
            Value::Invocation(n) => Self::InvocationExpression(n),
            Value::ContextualReference(n) => Self::ContextualPropertyReference(n),
            Value::Reference(n) => Self::ReferenceExpression(n),
        }
    }
}

impl From<ObjectElement> for AmperNode {
    fn from(element: ObjectElement) -> Self {
        match element {
            ObjectElement::ContextBlock(n) => Self::ContextBlock(n),
            ObjectElement::ContextualStatement(n) => Self::ContextualStatement(n),
            ObjectElement::Invocation(n) => Self::InvocationElement(n),
            ObjectElement::Variable(n) => Self::VariableDeclaration(n),
            ObjectElement::Property(n) => Self::Property(n),
        }
    }
}
