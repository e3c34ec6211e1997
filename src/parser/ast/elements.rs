use smol_str::SmolStr;

use super::*;

// ============================================================================
// Root
// ============================================================================

ast_node!(File, FILE);

impl File {
    children_method!(elements, ObjectElement);

    /// First property with the given name among the top-level elements,
    /// looking through contextual wrappers
    pub fn find_property(&self, name: &str) -> Option<Property> {
        find_property_in(self.elements(), name)
    }
}

fn find_property_in(
    elements: impl Iterator<Item = ObjectElement>,
    name: &str,
) -> Option<Property> {
    flatten_elements(elements)
        .into_iter()
        .filter_map(|element| match element {
            ObjectElement::Property(property) => Some(property),
            _ => None,
        })
        .find(|property| property.name_text().as_deref() == Some(name))
}

/// Replace contextual elements by the elements they hold
fn flatten_elements(elements: impl Iterator<Item = ObjectElement>) -> Vec<ObjectElement> {
    let mut result = Vec::new();
    for element in elements {
        match element {
            ObjectElement::ContextBlock(block) => {
                result.extend(flatten_elements(block.elements()));
            }
            ObjectElement::ContextualStatement(statement) => {
                result.extend(statement.statement());
            }
            other => result.push(other),
        }
    }
    result
}

// ============================================================================
// Object elements
// ============================================================================

ast_enum!(
    /// Anything that can appear in a file or between the braces of an object
    ObjectElement {
        ContextBlock(ContextBlock),
        ContextualStatement(ContextualStatement),
        Invocation(InvocationElement),
        Variable(VariableDeclaration),
        Property(Property),
    }
);

impl ObjectElement {
    /// The contextual wrapper, if this element is one
    pub fn as_contextual(&self) -> Option<ContextualElement> {
        ContextualElement::cast(self.syntax().clone())
    }
}

ast_enum!(
    /// An element guarded by `@name` / `!@name` markers
    ContextualElement {
        Block(ContextBlock),
        Statement(ContextualStatement),
    }
);

impl ContextualElement {
    pub fn context_names(&self) -> Vec<ContextName> {
        self.syntax().children().filter_map(ContextName::cast).collect()
    }

    /// The context names as written after the marker, negation dropped
    pub fn contexts(&self) -> Vec<SmolStr> {
        self.context_names()
            .iter()
            .filter_map(ContextName::name)
            .collect()
    }
}

// ============================================================================
// Property
// ============================================================================

ast_enum!(
    /// The name of a property: a dotted reference or a literal
    PropertyName {
        Reference(ReferenceExpression),
        String(StringLiteral),
        Number(NumberLiteral),
        Boolean(BooleanLiteral),
        Null(NullLiteral),
    }
);

impl PropertyName {
    /// The name as text: a dotted reference or the literal's text value
    pub fn text(&self) -> String {
        match self {
            Self::Reference(reference) => reference.text(),
            Self::String(s) => s.value(),
            Self::Number(n) => n.text(),
            Self::Boolean(b) => b.text().to_string(),
            Self::Null(_) => "null".to_string(),
        }
    }
}

ast_node!(Property, PROPERTY);

impl Property {
    /// The property name (always the first child node)
    pub fn name(&self) -> Option<PropertyName> {
        self.0.first_child().and_then(PropertyName::cast)
    }

    pub fn name_text(&self) -> Option<String> {
        self.name().map(|name| name.text())
    }

    has_token_method!(has_assignment, EQ, "name = value");

    child_after_token_method!(value, Value, EQ, "Get the value after `=`.");

    /// The object of `name { ... }`; `None` when the property is assigned
    pub fn nested_object(&self) -> Option<Object> {
        if self.has_assignment() {
            return None;
        }
        self.0.children().skip(1).find_map(Object::cast)
    }

    /// True when `=` is followed by an ERROR node instead of a value
    pub fn has_error_value(&self) -> bool {
        self.has_assignment()
            && self
                .0
                .children()
                .skip(1)
                .any(|child| child.kind() == SyntaxKind::ERROR)
    }
}

// ============================================================================
// Object
// ============================================================================

ast_node!(Object, OBJECT);

impl Object {
    first_child_method!(constructor_reference, ConstructorReference);
    children_method!(elements, ObjectElement);

    /// Direct properties, contextual wrappers not included
    pub fn properties(&self) -> impl Iterator<Item = Property> + '_ {
        self.0.children().filter_map(Property::cast)
    }

    /// Elements with context blocks and contextual statements replaced by
    /// what they hold
    pub fn all_elements(&self) -> Vec<ObjectElement> {
        flatten_elements(self.elements())
    }

    /// Names of properties without a value. Such objects are used as
    /// collections, e.g. `dependencies { a, b }`.
    pub fn items(&self) -> Vec<String> {
        self.all_elements()
            .into_iter()
            .filter_map(|element| match element {
                ObjectElement::Property(property)
                    if !property.has_assignment() && property.nested_object().is_none() =>
                {
                    property.name_text()
                }
                _ => None,
            })
            .collect()
    }

    pub fn find_property(&self, name: &str) -> Option<Property> {
        find_property_in(self.elements(), name)
    }

    has_token_method!(is_closed, R_CURLY, "{ }");
}

ast_enum!(
    /// What a constructor reference points at
    ConstructorTarget {
        Invocation(InvocationExpression),
        Reference(ReferenceExpression),
        String(StringLiteral),
    }
);

ast_node!(ConstructorReference, CONSTRUCTOR_REFERENCE);

impl ConstructorReference {
    first_child_method!(target, ConstructorTarget);
}

// ============================================================================
// Invocation element and variables
// ============================================================================

ast_node!(InvocationElement, INVOCATION_ELEMENT);

impl InvocationElement {
    first_child_method!(expression, InvocationExpression);
}

ast_node!(VariableDeclaration, VARIABLE_DECLARATION);

impl VariableDeclaration {
    pub fn name(&self) -> Option<SmolStr> {
        find_token(&self.0, SyntaxKind::IDENTIFIER).map(|t| SmolStr::new(t.text()))
    }

    child_after_token_method!(value, Value, EQ, "Get the initializer after `=`.");
}

// ============================================================================
// Contexts
// ============================================================================

ast_node!(ContextName, CONTEXT_NAME);

impl ContextName {
    has_token_method!(is_negated, NEGAT, "!@test");

    pub fn name(&self) -> Option<SmolStr> {
        find_token(&self.0, SyntaxKind::IDENTIFIER).map(|t| SmolStr::new(t.text()))
    }
}

ast_node!(ContextBlock, CONTEXT_BLOCK);

impl ContextBlock {
    children_method!(context_names, ContextName);

    /// Elements between the braces
    pub fn elements(&self) -> impl Iterator<Item = ObjectElement> + '_ {
        self.0.children().filter_map(ObjectElement::cast)
    }
}

ast_node!(ContextualStatement, CONTEXTUAL_STATEMENT);

impl ContextualStatement {
    children_method!(context_names, ContextName);

    /// The guarded statement; `None` when it is missing
    pub fn statement(&self) -> Option<ObjectElement> {
        self.0.children().find_map(ObjectElement::cast)
    }
}

// ============================================================================
// Errors
// ============================================================================

ast_node!(ErrorNode, ERROR);

impl ErrorNode {
    /// The skipped source text
    pub fn text(&self) -> String {
        self.0.text().to_string()
    }
}
