//! Visitor pattern for Amper CST traversal.
//!
//! Every concrete node kind has its own method. Unless overridden, a method
//! forwards to the method of the category the node belongs to, so a visitor
//! that only implements `visit_literal` still sees every string, number,
//! boolean and null literal:
//!
//! ```text
//! string/number/boolean/null literal → literal → value → node
//! object, invocation, reference, contextual reference → value → node
//! context block, contextual statement → contextual element → object element → node
//! property, invocation element, variable declaration → object element → node
//! file, context name, constructor reference, error → node
//! ```
//!
//! `visit_node` walks the children, so the default behaviour of a visitor is
//! a full pre-order traversal.

use crate::parser::ast::{
    AmperNode, AstNode, BooleanLiteral, ConstructorReference, ContextBlock, ContextName,
    ContextualElement, ContextualPropertyReference, ContextualStatement, ErrorNode, File,
    InvocationElement, InvocationExpression, Literal, NullLiteral, NumberLiteral, Object,
    ObjectElement, Property, ReferenceExpression, StringLiteral, Value, VariableDeclaration,
};

/// Visitor trait for Amper syntax nodes.
pub trait AmperVisitor {
    // ------------------------------------------------------------------------
    // Categories
    // ------------------------------------------------------------------------

    fn visit_node(&mut self, node: &AmperNode) {
        walk_children(self, node);
    }

    fn visit_object_element(&mut self, element: &ObjectElement) {
        self.visit_node(&AmperNode::from(element.clone()));
    }

    fn visit_contextual_element(&mut self, element: &ContextualElement) {
        self.visit_object_element(&ObjectElement::from(element.clone()));
    }

    fn visit_value(&mut self, value: &Value) {
        self.visit_node(&AmperNode::from(value.clone()));
    }

    fn visit_literal(&mut self, literal: &Literal) {
        self.visit_value(&Value::from(literal.clone()));
    }

    // ------------------------------------------------------------------------
    // Concrete nodes
    // ------------------------------------------------------------------------

    fn visit_file(&mut self, file: &File) {
        self.visit_node(&AmperNode::File(file.clone()));
    }

    fn visit_object(&mut self, object: &Object) {
        self.visit_value(&Value::Object(object.clone()));
    }

    fn visit_property(&mut self, property: &Property) {
        self.visit_object_element(&ObjectElement::Property(property.clone()));
    }

    fn visit_constructor_reference(&mut self, reference: &ConstructorReference) {
        self.visit_node(&AmperNode::ConstructorReference(reference.clone()));
    }

    fn visit_reference_expression(&mut self, reference: &ReferenceExpression) {
        self.visit_value(&Value::Reference(reference.clone()));
    }

    fn visit_contextual_property_reference(&mut self, reference: &ContextualPropertyReference) {
        self.visit_value(&Value::ContextualReference(reference.clone()));
    }

    fn visit_invocation_expression(&mut self, invocation: &InvocationExpression) {
        self.visit_value(&Value::Invocation(invocation.clone()));
    }

    fn visit_invocation_element(&mut self, element: &InvocationElement) {
        self.visit_object_element(&ObjectElement::Invocation(element.clone()));
    }

    fn visit_context_block(&mut self, block: &ContextBlock) {
        self.visit_contextual_element(&ContextualElement::Block(block.clone()));
    }

    fn visit_contextual_statement(&mut self, statement: &ContextualStatement) {
        self.visit_contextual_element(&ContextualElement::Statement(statement.clone()));
    }

    fn visit_context_name(&mut self, name: &ContextName) {
        self.visit_node(&AmperNode::ContextName(name.clone()));
    }

    fn visit_variable_declaration(&mut self, declaration: &VariableDeclaration) {
        self.visit_object_element(&ObjectElement::Variable(declaration.clone()));
    }

    fn visit_string_literal(&mut self, literal: &StringLiteral) {
        self.visit_literal(&Literal::String(literal.clone()));
    }

    fn visit_number_literal(&mut self, literal: &NumberLiteral) {
        self.visit_literal(&Literal::Number(literal.clone()));
    }

    fn visit_boolean_literal(&mut self, literal: &BooleanLiteral) {
        self.visit_literal(&Literal::Boolean(literal.clone()));
    }

    fn visit_null_literal(&mut self, literal: &NullLiteral) {
        self.visit_literal(&Literal::Null(literal.clone()));
    }

    fn visit_error(&mut self, error: &ErrorNode) {
        self.visit_node(&AmperNode::Error(error.clone()));
    }
}

/// Visit every child of `node` in source order
pub fn walk_children<V: AmperVisitor + ?Sized>(visitor: &mut V, node: &AmperNode) {
    for child in node.syntax().children() {
        AmperNode::from_syntax(child).accept(visitor);
    }
}
