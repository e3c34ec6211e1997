//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all possible node and token kinds in the syntax tree.
//! It follows the Amper configuration grammar structure.

/// All syntax kinds (tokens and nodes) of the Amper language
///
/// Tokens are leaf nodes (identifiers, literals, punctuation).
/// Nodes are composite (objects, properties, context blocks).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENTIFIER,           // name, $catalog
    NUMBER,               // 42, 1.5
    SINGLE_QUOTED_STRING, // 'text'
    DOUBLE_QUOTED_STRING, // "text"

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    TRUE_KW,
    FALSE_KW,
    NULL_KW,
    VAL_KW,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_CURLY,   // {
    R_CURLY,   // }
    L_PAREN,   // (
    R_PAREN,   // )
    L_BRACKET, // [
    R_BRACKET, // ]
    COMMA,     // ,
    DOT,       // .
    COLON,     // :
    EQ,        // =
    AT,        // @
    NEGAT,     // !@
    SHARP,     // #

    /// End of input. Produced by `tokenize`, never stored in a tree.
    EOF,

    // =========================================================================
    // NODES
    // =========================================================================
    FILE,
    OBJECT,
    PROPERTY,
    CONSTRUCTOR_REFERENCE,
    REFERENCE_EXPRESSION,
    CONTEXTUAL_PROPERTY_REFERENCE,
    INVOCATION_EXPRESSION,
    INVOCATION_ELEMENT,
    CONTEXT_BLOCK,
    CONTEXTUAL_STATEMENT,
    CONTEXT_NAME,
    VARIABLE_DECLARATION,
    STRING_LITERAL,
    NUMBER_LITERAL,
    BOOLEAN_LITERAL,
    NULL_LITERAL,

    // Special
    ERROR,
    TOMBSTONE, // Start event whose kind is not set yet

    #[doc(hidden)]
    __LAST,
}

/// Node kinds that can stand in an object element position
pub const OBJECT_ELEMENT_KINDS: &[SyntaxKind] = &[
    SyntaxKind::CONTEXT_BLOCK,
    SyntaxKind::CONTEXTUAL_STATEMENT,
    SyntaxKind::INVOCATION_ELEMENT,
    SyntaxKind::VARIABLE_DECLARATION,
    SyntaxKind::PROPERTY,
];

/// Node kinds that can stand in a value position
pub const VALUE_KINDS: &[SyntaxKind] = &[
    SyntaxKind::OBJECT,
    SyntaxKind::STRING_LITERAL,
    SyntaxKind::NUMBER_LITERAL,
    SyntaxKind::BOOLEAN_LITERAL,
    SyntaxKind::NULL_LITERAL,
    SyntaxKind::INVOCATION_EXPRESSION,
    SyntaxKind::CONTEXTUAL_PROPERTY_REFERENCE,
    SyntaxKind::REFERENCE_EXPRESSION,
];

pub const LITERAL_KINDS: &[SyntaxKind] = &[
    SyntaxKind::STRING_LITERAL,
    SyntaxKind::NUMBER_LITERAL,
    SyntaxKind::BOOLEAN_LITERAL,
    SyntaxKind::NULL_LITERAL,
];

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::TRUE_KW as u16) && (self as u16) <= (Self::VAL_KW as u16)
    }

    /// Check if this is a punctuation token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::L_CURLY as u16) && (self as u16) <= (Self::SHARP as u16)
    }

    /// Check if this is a string token of either quote style
    pub fn is_string(self) -> bool {
        matches!(self, Self::SINGLE_QUOTED_STRING | Self::DOUBLE_QUOTED_STRING)
    }

    /// Check if this kind is a token (as opposed to a composite node)
    pub fn is_token(self) -> bool {
        (self as u16) <= (Self::EOF as u16)
    }

    /// Check if this kind denotes a tree node (including ERROR)
    pub fn is_node(self) -> bool {
        (self as u16) >= (Self::FILE as u16) && (self as u16) <= (Self::ERROR as u16)
    }

    pub fn is_object_element(self) -> bool {
        OBJECT_ELEMENT_KINDS.contains(&self)
    }

    pub fn is_value(self) -> bool {
        VALUE_KINDS.contains(&self)
    }

    pub fn is_literal(self) -> bool {
        LITERAL_KINDS.contains(&self)
    }

    /// Short human-readable description used in diagnostics
    pub fn description(self) -> &'static str {
        match self {
            Self::WHITESPACE => "whitespace",
            Self::LINE_COMMENT | Self::BLOCK_COMMENT => "comment",
            Self::IDENTIFIER => "identifier",
            Self::NUMBER => "number",
            Self::SINGLE_QUOTED_STRING | Self::DOUBLE_QUOTED_STRING => "string",
            Self::TRUE_KW => "'true'",
            Self::FALSE_KW => "'false'",
            Self::NULL_KW => "'null'",
            Self::VAL_KW => "'val'",
            Self::L_CURLY => "'{'",
            Self::R_CURLY => "'}'",
            Self::L_PAREN => "'('",
            Self::R_PAREN => "')'",
            Self::L_BRACKET => "'['",
            Self::R_BRACKET => "']'",
            Self::COMMA => "','",
            Self::DOT => "'.'",
            Self::COLON => "':'",
            Self::EQ => "'='",
            Self::AT => "'@'",
            Self::NEGAT => "'!@'",
            Self::SHARP => "'#'",
            Self::EOF => "end of file",
            Self::ERROR => "invalid character",
            _ => "syntax node",
        }
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AmperLanguage {}

impl rowan::Language for AmperLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<AmperLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<AmperLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<AmperLanguage>;
pub type SyntaxNodeChildren = rowan::SyntaxNodeChildren<AmperLanguage>;
