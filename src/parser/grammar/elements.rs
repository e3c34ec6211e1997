//! File, object elements, properties, objects and `val` declarations
//!
//! ```text
//! file                 = object_element*
//! object_element       = contextual_element | invocation_element
//!                      | variable_declaration | property
//! property             = property_name ('=' value | &'{' object)?
//! property_name        = literal | reference_expression
//! object               = constructor_reference? '{' (object_element (',' | &'}')?)* '}'
//! variable_declaration = 'val' IDENTIFIER '=' value
//! ```

use super::contexts::contextual_element;
use super::values::{invocation_element, literal, reference_expression, value};
use super::{
    AmperParser, CONTEXT_MARKERS, MatchResult, OBJECT_ELEMENT_FIRST, PROPERTY_NAME_FIRST, finish,
    nesting_too_deep,
};
use crate::parser::errors::{ErrorCode, ParseContext, SyntaxError};
use crate::parser::event::{CompletedMarker, Marker};
use crate::parser::syntax_kind::SyntaxKind;

/// Parse a whole file. Always succeeds; anything that is not an element is
/// wrapped in ERROR nodes.
pub fn file<P: AmperParser>(p: &mut P) -> CompletedMarker {
    let marker = p.start();
    while !p.at_eof() {
        let start_pos = p.get_pos();
        object_element(p);
        if p.get_pos() == start_pos {
            p.error_recover(ParseContext::TopLevel);
        }
    }
    p.complete(marker, SyntaxKind::FILE)
}

/// Parse one object element
pub fn object_element<P: AmperParser>(p: &mut P) -> MatchResult {
    if !p.at_any(OBJECT_ELEMENT_FIRST) {
        return MatchResult::NotMatched;
    }
    if !p.enter() {
        return nesting_too_deep(p);
    }

    let result = if p.at_any(CONTEXT_MARKERS) {
        contextual_element(p)
    } else {
        statement(p)
    };

    p.exit();
    result
}

/// The elements allowed after context names: invocation, `val` or property
pub(crate) fn statement<P: AmperParser>(p: &mut P) -> MatchResult {
    match p.current_kind() {
        SyntaxKind::VAL_KW => variable_declaration(p),
        SyntaxKind::IDENTIFIER => match invocation_element(p) {
            MatchResult::NotMatched => property(p),
            matched => matched,
        },
        _ => property(p),
    }
}

/// Parse the elements of an object or context block up to (not including)
/// the closing `}`
pub fn element_list<P: AmperParser>(p: &mut P, context: ParseContext) {
    while !p.at(SyntaxKind::R_CURLY) && !p.at_eof() {
        let start_pos = p.get_pos();
        object_element(p);
        if p.get_pos() == start_pos {
            p.error_recover(context);
        }
        p.eat(SyntaxKind::COMMA);
    }
}

/// Parse `name`, `name = value` or `name { ... }`
pub fn property<P: AmperParser>(p: &mut P) -> MatchResult {
    if !p.at_any(PROPERTY_NAME_FIRST) {
        return MatchResult::NotMatched;
    }
    let errors_before = p.error_count();
    let marker = p.start();
    property_name(p);

    if p.eat(SyntaxKind::EQ) {
        // Committed: a value must follow
        if value(p).is_not_matched() {
            p.error_slot(
                ErrorCode::E0401,
                "expected a value after '='",
                ParseContext::PropertyValue,
            );
        }
    } else if p.at(SyntaxKind::L_CURLY) {
        object(p);
    }

    finish(p, marker, SyntaxKind::PROPERTY, errors_before)
}

fn property_name<P: AmperParser>(p: &mut P) -> MatchResult {
    if p.at(SyntaxKind::IDENTIFIER) {
        reference_expression(p)
    } else {
        literal(p)
    }
}

/// Parse an object without constructor reference: `{ ... }`
pub fn object<P: AmperParser>(p: &mut P) -> MatchResult {
    if !p.at(SyntaxKind::L_CURLY) {
        return MatchResult::NotMatched;
    }
    let errors_before = p.error_count();
    let marker = p.start();
    object_body(p, marker, errors_before)
}

/// Parse `{ elements }` into the already opened object `marker`
pub(crate) fn object_body<P: AmperParser>(
    p: &mut P,
    marker: Marker,
    errors_before: usize,
) -> MatchResult {
    let open = p.current_range();
    p.bump(); // {
    element_list(p, ParseContext::ObjectBody);
    expect_closing_curly(p, "object", open);
    finish(p, marker, SyntaxKind::OBJECT, errors_before)
}

/// Report a missing `}` pointing back at the brace it should close
pub(crate) fn expect_closing_curly<P: AmperParser>(
    p: &mut P,
    what: &str,
    open: rowan::TextRange,
) {
    if p.eat(SyntaxKind::R_CURLY) {
        return;
    }
    let error = SyntaxError::builder(ErrorCode::E0201)
        .message(format!("expected '}}' to close the {}", what))
        .range(p.current_range())
        .expected("'}'")
        .related(format!("{} opened here", what), open)
        .build();
    p.push_error(error);
}

/// Parse `val name = value`
pub fn variable_declaration<P: AmperParser>(p: &mut P) -> MatchResult {
    if !p.at(SyntaxKind::VAL_KW) {
        return MatchResult::NotMatched;
    }
    let errors_before = p.error_count();
    let marker = p.start();
    p.bump(); // val

    // Committed: report the first missing piece only
    if !p.eat(SyntaxKind::IDENTIFIER) {
        p.error(
            ErrorCode::E0301,
            "expected a variable name after 'val'",
            "identifier",
        );
    } else if !p.eat(SyntaxKind::EQ) {
        p.error(
            ErrorCode::E0302,
            "expected '=' after the variable name",
            "'='",
        );
    } else if value(p).is_not_matched() {
        p.error_slot(
            ErrorCode::E0401,
            "expected a value after '='",
            ParseContext::VariableDeclaration,
        );
    }

    finish(p, marker, SyntaxKind::VARIABLE_DECLARATION, errors_before)
}
