//! Grammar rules for the Amper language
//!
//! The rules are organised by construct:
//! - `elements` - file, object elements, properties, objects, `val` declarations
//! - `values` - values, literals, references and invocations
//! - `contexts` - `@name` / `!@name` markers, context blocks and contextual statements
//!
//! Every rule is a function generic over [`AmperParser`] returning a
//! [`MatchResult`]. `NotMatched` always leaves the parser where it was, so
//! callers can try the next alternative. Once a rule passes its commit point
//! it completes its node even when pieces are missing, reporting the first
//! missing piece as a diagnostic.

pub mod contexts;
pub mod elements;
pub mod values;

pub use contexts::{context_name, context_names, contextual_element};
pub use elements::{element_list, file, object, object_element, property, variable_declaration};
pub use values::{
    contextual_property_reference, invocation_element, invocation_expression, literal,
    reference_expression, value,
};

use rowan::TextRange;

use crate::parser::errors::{ErrorCode, ParseContext, SyntaxError};
use crate::parser::event::{Checkpoint, CompletedMarker, Marker};
use crate::parser::syntax_kind::SyntaxKind;

/// Trait for grammar operations
///
/// This trait defines the interface between the grammar rules and the parser.
/// The parser implements it to provide the token cursor, the event stream and
/// error reporting.
pub trait AmperParser {
    // Token inspection (trivia is never visible here)
    fn current_kind(&self) -> SyntaxKind;
    /// Kind of the nth significant token ahead; `EOF` past the end
    fn nth(&self, n: usize) -> SyntaxKind;
    fn current_range(&self) -> TextRange;

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current_kind() == kind
    }

    fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        kinds.contains(&self.current_kind())
    }

    fn at_eof(&self) -> bool {
        self.at(SyntaxKind::EOF)
    }

    // Position tracking
    fn get_pos(&self) -> usize;

    // Token consumption
    fn bump(&mut self);

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    // Node building
    fn start(&mut self) -> Marker;
    fn complete(&mut self, marker: Marker, kind: SyntaxKind) -> CompletedMarker;
    /// Open a node that will become the parent of an already completed one
    fn precede(&mut self, completed: CompletedMarker) -> Marker;

    // Backtracking
    fn mark(&self) -> Checkpoint;
    fn rewind(&mut self, checkpoint: Checkpoint);

    // Error reporting
    fn error_count(&self) -> usize;
    fn push_error(&mut self, error: SyntaxError);

    /// Report an error at the current token
    fn error(&mut self, code: ErrorCode, message: impl Into<String>, expected: &str) {
        let error = SyntaxError::new(message, self.current_range(), code).with_expected(expected);
        self.push_error(error);
    }

    /// Report the current token as unexpected and wrap it, plus everything up
    /// to the next recovery token of `context`, in an ERROR node.
    /// Always consumes at least one token unless at end of input.
    fn error_recover(&mut self, context: ParseContext);

    /// Report a missing construct and fill its slot with an ERROR node that
    /// holds everything up to the next recovery token of `context`
    fn error_slot(&mut self, code: ErrorCode, message: impl Into<String>, context: ParseContext);

    // Nesting guard
    /// Returns false when the nesting limit is reached
    fn enter(&mut self) -> bool;
    fn exit(&mut self);
}

/// Result of running a grammar rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    /// The rule produced a well-formed node
    Matched(CompletedMarker),
    /// The rule did not apply; nothing was consumed
    NotMatched,
    /// The rule committed and produced a node, but reported errors on the way
    MatchedWithErrors(CompletedMarker),
}

impl MatchResult {
    pub fn is_matched(&self) -> bool {
        !self.is_not_matched()
    }

    pub fn is_not_matched(&self) -> bool {
        matches!(self, Self::NotMatched)
    }

    pub fn marker(&self) -> Option<CompletedMarker> {
        match self {
            Self::Matched(marker) | Self::MatchedWithErrors(marker) => Some(*marker),
            Self::NotMatched => None,
        }
    }
}

// =============================================================================
// First-token sets
// =============================================================================

/// Tokens that start a property name
pub const PROPERTY_NAME_FIRST: &[SyntaxKind] = &[
    SyntaxKind::IDENTIFIER,
    SyntaxKind::SINGLE_QUOTED_STRING,
    SyntaxKind::DOUBLE_QUOTED_STRING,
    SyntaxKind::NUMBER,
    SyntaxKind::TRUE_KW,
    SyntaxKind::FALSE_KW,
    SyntaxKind::NULL_KW,
];

/// Tokens that start a value
pub const VALUE_FIRST: &[SyntaxKind] = &[
    SyntaxKind::L_CURLY,
    SyntaxKind::IDENTIFIER,
    SyntaxKind::DOT,
    SyntaxKind::SINGLE_QUOTED_STRING,
    SyntaxKind::DOUBLE_QUOTED_STRING,
    SyntaxKind::NUMBER,
    SyntaxKind::TRUE_KW,
    SyntaxKind::FALSE_KW,
    SyntaxKind::NULL_KW,
];

/// `@` and `!@`
pub const CONTEXT_MARKERS: &[SyntaxKind] = &[SyntaxKind::AT, SyntaxKind::NEGAT];

/// Tokens that start an object element
pub const OBJECT_ELEMENT_FIRST: &[SyntaxKind] = &[
    SyntaxKind::AT,
    SyntaxKind::NEGAT,
    SyntaxKind::VAL_KW,
    SyntaxKind::IDENTIFIER,
    SyntaxKind::SINGLE_QUOTED_STRING,
    SyntaxKind::DOUBLE_QUOTED_STRING,
    SyntaxKind::NUMBER,
    SyntaxKind::TRUE_KW,
    SyntaxKind::FALSE_KW,
    SyntaxKind::NULL_KW,
];

/// Delimiters that open a group skipped as a whole during recovery
pub const GROUP_OPENERS: &[SyntaxKind] = &[SyntaxKind::L_CURLY, SyntaxKind::L_PAREN];

/// Closing delimiters that never start anything
pub const CLOSING_DELIMITERS: &[SyntaxKind] = &[
    SyntaxKind::R_CURLY,
    SyntaxKind::R_PAREN,
    SyntaxKind::R_BRACKET,
];

// =============================================================================
// Shared helpers
// =============================================================================

/// Complete `marker` as `kind`, classifying the result by whether any error
/// was reported since `errors_before`
pub(crate) fn finish<P: AmperParser>(
    p: &mut P,
    marker: Marker,
    kind: SyntaxKind,
    errors_before: usize,
) -> MatchResult {
    let completed = p.complete(marker, kind);
    if p.error_count() > errors_before {
        MatchResult::MatchedWithErrors(completed)
    } else {
        MatchResult::Matched(completed)
    }
}

/// Wrap the node of `inner` in a new parent of `kind`, keeping its error status
pub(crate) fn wrap<P: AmperParser>(p: &mut P, inner: MatchResult, kind: SyntaxKind) -> MatchResult {
    match inner {
        MatchResult::Matched(completed) => {
            let marker = p.precede(completed);
            MatchResult::Matched(p.complete(marker, kind))
        }
        MatchResult::MatchedWithErrors(completed) => {
            let marker = p.precede(completed);
            MatchResult::MatchedWithErrors(p.complete(marker, kind))
        }
        MatchResult::NotMatched => MatchResult::NotMatched,
    }
}

/// Called instead of a rule when the nesting limit is hit: skips the
/// construct starting at the current token, including anything it opens,
/// into an ERROR node.
pub(crate) fn nesting_too_deep<P: AmperParser>(p: &mut P) -> MatchResult {
    let errors_before = p.error_count();
    p.error(
        ErrorCode::E0204,
        "nesting too deep, construct skipped",
        "a shallower construct",
    );
    tracing::trace!("nesting limit reached at {:?}", p.current_range());

    let marker = p.start();
    let stop = [SyntaxKind::COMMA, SyntaxKind::R_CURLY, SyntaxKind::R_PAREN];
    while !p.at_eof() && !p.at_any(&stop) {
        if p.at_any(GROUP_OPENERS) {
            skip_group(p);
            break;
        }
        p.bump();
    }
    finish(p, marker, SyntaxKind::ERROR, errors_before)
}

/// Consume the `{ }` or `( )` group opening at the current token, nested
/// groups included. An unclosed group runs to the end of input.
pub(crate) fn skip_group<P: AmperParser>(p: &mut P) {
    let mut open = 0usize;
    while !p.at_eof() {
        let kind = p.current_kind();
        p.bump();
        match kind {
            SyntaxKind::L_CURLY | SyntaxKind::L_PAREN => open += 1,
            SyntaxKind::R_CURLY | SyntaxKind::R_PAREN => {
                open = open.saturating_sub(1);
                if open == 0 {
                    break;
                }
            }
            _ => {}
        }
    }
}
