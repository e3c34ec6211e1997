use smol_str::SmolStr;

use super::*;

// ============================================================================
// Value
// ============================================================================

ast_enum!(
    /// Anything that can stand on the right of `=`, as an argument, or as a
    /// `val` initializer
    Value {
        Object(Object),
        String(StringLiteral),
        Number(NumberLiteral),
        Boolean(BooleanLiteral),
        Null(NullLiteral),
        Invocation(InvocationExpression),
        ContextualReference(ContextualPropertyReference),
        Reference(ReferenceExpression),
    }
);

impl Value {
    /// The literal, if this value is one
    pub fn as_literal(&self) -> Option<Literal> {
        Literal::cast(self.syntax().clone())
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }
}

// ============================================================================
// Literals
// ============================================================================

ast_enum!(
    /// A single-token scalar
    Literal {
        String(StringLiteral),
        Number(NumberLiteral),
        Boolean(BooleanLiteral),
        Null(NullLiteral),
    }
);

impl Literal {
    /// Scalar text of the literal: strings are unquoted and unescaped, other
    /// literals are returned as written
    pub fn text_value(&self) -> String {
        match self {
            Self::String(s) => s.value(),
            Self::Number(n) => n.text().to_string(),
            Self::Boolean(b) => b.text().to_string(),
            Self::Null(_) => "null".to_string(),
        }
    }
}

/// Text of the first non-trivia token of a node
fn literal_token(node: &SyntaxNode) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .find(|t| !t.kind().is_trivia())
}

ast_node!(StringLiteral, STRING_LITERAL);

impl StringLiteral {
    fn token(&self) -> Option<SyntaxToken> {
        literal_token(&self.0)
    }

    /// The literal as written, quotes included
    pub fn text(&self) -> String {
        self.token().map(|t| t.text().to_string()).unwrap_or_default()
    }

    pub fn is_single_quoted(&self) -> bool {
        self.token()
            .is_some_and(|t| t.kind() == SyntaxKind::SINGLE_QUOTED_STRING)
    }

    /// False when the closing quote is missing
    pub fn is_terminated(&self) -> bool {
        let text = self.text();
        let quote = if self.is_single_quoted() { '\'' } else { '"' };
        if text.len() < 2 || !text.ends_with(quote) {
            return false;
        }
        let body = &text[1..text.len() - 1];
        body.bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 0
    }

    /// The string contents without quotes, escape sequences resolved
    pub fn value(&self) -> String {
        let text = self.text();
        let mut body = text.get(1..).unwrap_or("");
        if self.is_terminated() {
            body = &body[..body.len() - 1];
        }
        unescape(body)
    }
}

/// Resolve `\n`, `\t`, `\r`, `\b`, `\f`, `\uXXXX` and escaped punctuation.
/// An unknown escape keeps the escaped character.
fn unescape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('b') => result.push('\u{8}'),
            Some('f') => result.push('\u{c}'),
            Some('u') => {
                let hex: String = chars.clone().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) if hex.len() == 4 => {
                        result.push(decoded);
                        chars.nth(3);
                    }
                    _ => result.push('u'),
                }
            }
            Some(other) => result.push(other),
            None => result.push('\\'),
        }
    }
    result
}

ast_node!(NumberLiteral, NUMBER_LITERAL);

impl NumberLiteral {
    pub fn text(&self) -> String {
        literal_token(&self.0)
            .map(|t| t.text().to_string())
            .unwrap_or_default()
    }

    /// The value as an integer; `None` for fractions, exponents or overflow
    pub fn as_i64(&self) -> Option<i64> {
        self.text().parse().ok()
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.text().parse().ok()
    }
}

ast_node!(BooleanLiteral, BOOLEAN_LITERAL);

impl BooleanLiteral {
    has_token_method!(value, TRUE_KW, "true");

    pub fn text(&self) -> &'static str {
        if self.value() { "true" } else { "false" }
    }
}

ast_node!(NullLiteral, NULL_LITERAL);

// ============================================================================
// References
// ============================================================================

ast_node!(ReferenceExpression, REFERENCE_EXPRESSION);

impl ReferenceExpression {
    /// The dotted segments, e.g. `["a", "b", "c"]` for `a.b.c`
    pub fn segments(&self) -> Vec<SmolStr> {
        self.segment_tokens()
            .map(|t| SmolStr::new(t.text()))
            .collect()
    }

    /// Segment tokens with their ranges
    pub fn segment_tokens(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| t.kind() == SyntaxKind::IDENTIFIER)
    }

    /// The reference without inner trivia, e.g. `a.b.c`
    pub fn text(&self) -> String {
        self.segments().join(".")
    }

    /// The last segment
    pub fn name(&self) -> Option<SmolStr> {
        self.segment_tokens().last().map(|t| SmolStr::new(t.text()))
    }
}

ast_node!(ContextualPropertyReference, CONTEXTUAL_PROPERTY_REFERENCE);

impl ContextualPropertyReference {
    first_child_method!(reference, ReferenceExpression);
}

// ============================================================================
// Invocation
// ============================================================================

ast_node!(InvocationExpression, INVOCATION_EXPRESSION);

impl InvocationExpression {
    first_child_method!(callee, ReferenceExpression);

    /// Arguments between the parentheses, in order
    pub fn arguments(&self) -> impl Iterator<Item = Value> + '_ {
        let mut seen_paren = false;
        self.0.children_with_tokens().filter_map(move |child| match child {
            rowan::NodeOrToken::Token(t) => {
                if t.kind() == SyntaxKind::L_PAREN {
                    seen_paren = true;
                }
                None
            }
            rowan::NodeOrToken::Node(n) if seen_paren => Value::cast(n),
            rowan::NodeOrToken::Node(_) => None,
        })
    }

    has_token_method!(is_closed, R_PAREN, "f(1)");
}
