//! Parse context tracking for context-aware error messages
//!
//! Grammar rules pass the context they are parsing in when they report an
//! error, so messages can say where in the source structure it occurred and
//! recovery can stop at tokens that make sense there.

use crate::parser::SyntaxKind;

/// Represents the current parsing context
///
/// Used to generate context-aware error messages and determine
/// appropriate recovery strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParseContext {
    /// At the top level of a file
    #[default]
    TopLevel,
    /// Inside the braces of an object
    ObjectBody,
    /// Inside the braces of a context block
    ContextBlockBody,
    /// Between the parentheses of an invocation
    ArgumentList,
    /// After the `=` of a property
    PropertyValue,
    /// Inside a `val` declaration
    VariableDeclaration,
    /// After one or more `@name` / `!@name` markers
    ContextNames,
}

impl ParseContext {
    /// Get a human-readable description of this context for error messages
    pub fn description(&self) -> &'static str {
        match self {
            Self::TopLevel => "at top level",
            Self::ObjectBody => "in object body",
            Self::ContextBlockBody => "in context block",
            Self::ArgumentList => "in argument list",
            Self::PropertyValue => "in property value",
            Self::VariableDeclaration => "in variable declaration",
            Self::ContextNames => "after context names",
        }
    }

    /// Get a description of what tokens are expected in this context
    pub fn expected_description(&self) -> &'static str {
        match self {
            Self::TopLevel => "a property, invocation, variable declaration or context",
            Self::ObjectBody | Self::ContextBlockBody => {
                "a property, invocation, variable declaration, context or '}'"
            }
            Self::ArgumentList => "an argument value or ')'",
            Self::PropertyValue | Self::VariableDeclaration => {
                "a value (object, literal, invocation or reference)"
            }
            Self::ContextNames => "'{', an invocation, a variable declaration or a property",
        }
    }

    /// Get the recovery tokens appropriate for this context
    ///
    /// Recovery skips tokens until one of these (or end of input) is reached.
    pub fn recovery_tokens(&self) -> &'static [SyntaxKind] {
        match self {
            Self::TopLevel => &[
                SyntaxKind::IDENTIFIER,
                SyntaxKind::SINGLE_QUOTED_STRING,
                SyntaxKind::DOUBLE_QUOTED_STRING,
                SyntaxKind::NUMBER,
                SyntaxKind::TRUE_KW,
                SyntaxKind::FALSE_KW,
                SyntaxKind::NULL_KW,
                SyntaxKind::VAL_KW,
                SyntaxKind::AT,
                SyntaxKind::NEGAT,
                SyntaxKind::SHARP,
            ],
            Self::ObjectBody | Self::ContextBlockBody | Self::ContextNames => &[
                SyntaxKind::R_CURLY,
                SyntaxKind::COMMA,
                SyntaxKind::IDENTIFIER,
                SyntaxKind::SINGLE_QUOTED_STRING,
                SyntaxKind::DOUBLE_QUOTED_STRING,
                SyntaxKind::NUMBER,
                SyntaxKind::TRUE_KW,
                SyntaxKind::FALSE_KW,
                SyntaxKind::NULL_KW,
                SyntaxKind::VAL_KW,
                SyntaxKind::AT,
                SyntaxKind::NEGAT,
                SyntaxKind::SHARP,
            ],
            Self::ArgumentList => &[
                SyntaxKind::R_PAREN,
                SyntaxKind::R_CURLY,
                SyntaxKind::COMMA,
                SyntaxKind::L_CURLY,
                SyntaxKind::DOT,
                SyntaxKind::IDENTIFIER,
                SyntaxKind::SINGLE_QUOTED_STRING,
                SyntaxKind::DOUBLE_QUOTED_STRING,
                SyntaxKind::NUMBER,
                SyntaxKind::TRUE_KW,
                SyntaxKind::FALSE_KW,
                SyntaxKind::NULL_KW,
            ],
            Self::PropertyValue | Self::VariableDeclaration => &[
                SyntaxKind::R_CURLY,
                SyntaxKind::R_PAREN,
                SyntaxKind::COMMA,
                SyntaxKind::L_CURLY,
                SyntaxKind::IDENTIFIER,
                SyntaxKind::SINGLE_QUOTED_STRING,
                SyntaxKind::DOUBLE_QUOTED_STRING,
                SyntaxKind::NUMBER,
                SyntaxKind::TRUE_KW,
                SyntaxKind::FALSE_KW,
                SyntaxKind::NULL_KW,
                SyntaxKind::VAL_KW,
                SyntaxKind::AT,
                SyntaxKind::NEGAT,
                SyntaxKind::SHARP,
            ],
        }
    }
}
