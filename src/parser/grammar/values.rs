//! Values, literals, references and invocations
//!
//! ```text
//! value                         = object | literal | invocation_expression
//!                               | contextual_property_reference | reference_expression
//! object                        = constructor_reference? '{' ... '}'
//! constructor_reference         = invocation_expression | reference_expression | string_literal
//! reference_expression          = IDENTIFIER ('.' IDENTIFIER)*
//! invocation_expression         = reference_expression '(' (value ','?)* ')'
//! contextual_property_reference = '.' reference_expression
//! ```
//!
//! A constructor reference is only known to be one once the `{` after it is
//! seen. Values therefore parse the prefix first and, if a `{` follows, wrap
//! it in CONSTRUCTOR_REFERENCE and OBJECT with `precede`.

use super::elements::{object, object_body};
use super::{
    AmperParser, MatchResult, VALUE_FIRST, finish, nesting_too_deep, wrap,
};
use crate::parser::errors::{ErrorCode, ParseContext, SyntaxError};
use crate::parser::event::Marker;
use crate::parser::syntax_kind::SyntaxKind;

/// Parse a value
pub fn value<P: AmperParser>(p: &mut P) -> MatchResult {
    if !p.at_any(VALUE_FIRST) {
        return MatchResult::NotMatched;
    }
    if !p.enter() {
        return nesting_too_deep(p);
    }

    let errors_before = p.error_count();
    let result = match p.current_kind() {
        SyntaxKind::L_CURLY => object(p),
        SyntaxKind::SINGLE_QUOTED_STRING | SyntaxKind::DOUBLE_QUOTED_STRING => {
            let name = literal(p);
            constructed_object(p, name, errors_before)
        }
        SyntaxKind::IDENTIFIER => {
            let callee = reference_or_invocation(p, errors_before);
            constructed_object(p, callee, errors_before)
        }
        SyntaxKind::DOT => contextual_property_reference(p),
        _ => literal(p),
    };

    p.exit();
    result
}

/// Parse a single-token literal
pub fn literal<P: AmperParser>(p: &mut P) -> MatchResult {
    let kind = match p.current_kind() {
        SyntaxKind::SINGLE_QUOTED_STRING | SyntaxKind::DOUBLE_QUOTED_STRING => {
            SyntaxKind::STRING_LITERAL
        }
        SyntaxKind::NUMBER => SyntaxKind::NUMBER_LITERAL,
        SyntaxKind::TRUE_KW | SyntaxKind::FALSE_KW => SyntaxKind::BOOLEAN_LITERAL,
        SyntaxKind::NULL_KW => SyntaxKind::NULL_LITERAL,
        _ => return MatchResult::NotMatched,
    };
    let errors_before = p.error_count();
    let marker = p.start();
    p.bump();
    finish(p, marker, kind, errors_before)
}

/// Parse a dotted name. A dot not followed by an identifier is left alone.
pub fn reference_expression<P: AmperParser>(p: &mut P) -> MatchResult {
    if !p.at(SyntaxKind::IDENTIFIER) {
        return MatchResult::NotMatched;
    }
    let marker = p.start();
    p.bump();
    while p.at(SyntaxKind::DOT) && p.nth(1) == SyntaxKind::IDENTIFIER {
        p.bump(); // .
        p.bump(); // identifier
    }
    MatchResult::Matched(p.complete(marker, SyntaxKind::REFERENCE_EXPRESSION))
}

/// Parse `.name`, a reference to a property of the enclosing context
pub fn contextual_property_reference<P: AmperParser>(p: &mut P) -> MatchResult {
    if !p.at(SyntaxKind::DOT) || p.nth(1) != SyntaxKind::IDENTIFIER {
        return MatchResult::NotMatched;
    }
    let marker = p.start();
    p.bump(); // .
    reference_expression(p);
    MatchResult::Matched(p.complete(marker, SyntaxKind::CONTEXTUAL_PROPERTY_REFERENCE))
}

/// Parse `callee(args)`. A reference that is not followed by `(` is not an
/// invocation; the parser is rewound to where it started.
pub fn invocation_expression<P: AmperParser>(p: &mut P) -> MatchResult {
    if !p.at(SyntaxKind::IDENTIFIER) {
        return MatchResult::NotMatched;
    }
    let checkpoint = p.mark();
    let errors_before = p.error_count();
    let Some(callee) = reference_expression(p).marker() else {
        return MatchResult::NotMatched;
    };
    if !p.at(SyntaxKind::L_PAREN) {
        p.rewind(checkpoint);
        return MatchResult::NotMatched;
    }
    let marker = p.precede(callee);
    arguments(p, marker, errors_before)
}

/// Parse an invocation used as an object element
pub fn invocation_element<P: AmperParser>(p: &mut P) -> MatchResult {
    let invocation = invocation_expression(p);
    wrap(p, invocation, SyntaxKind::INVOCATION_ELEMENT)
}

/// Reference or invocation with the callee scanned once
fn reference_or_invocation<P: AmperParser>(p: &mut P, errors_before: usize) -> MatchResult {
    let reference = reference_expression(p);
    match reference.marker() {
        Some(callee) if p.at(SyntaxKind::L_PAREN) => {
            let marker = p.precede(callee);
            arguments(p, marker, errors_before)
        }
        _ => reference,
    }
}

/// Parse `( value ,? ... )` into the already opened invocation `marker`
fn arguments<P: AmperParser>(p: &mut P, marker: Marker, errors_before: usize) -> MatchResult {
    let open = p.current_range();
    p.bump(); // (

    // Committed: arguments until ')'
    while !p.at_any(&[SyntaxKind::R_PAREN, SyntaxKind::R_CURLY]) && !p.at_eof() {
        if value(p).is_not_matched() {
            p.error_recover(ParseContext::ArgumentList);
        }
        p.eat(SyntaxKind::COMMA);
    }

    if !p.eat(SyntaxKind::R_PAREN) {
        let error = SyntaxError::builder(ErrorCode::E0202)
            .message("expected ')' to close the argument list")
            .range(p.current_range())
            .expected("')'")
            .related("argument list opened here", open)
            .build();
        p.push_error(error);
    }

    finish(p, marker, SyntaxKind::INVOCATION_EXPRESSION, errors_before)
}

/// If a `{` follows the parsed prefix, make the prefix a constructor
/// reference and parse the object it constructs
fn constructed_object<P: AmperParser>(
    p: &mut P,
    prefix: MatchResult,
    errors_before: usize,
) -> MatchResult {
    let Some(completed) = prefix.marker() else {
        return prefix;
    };
    if !p.at(SyntaxKind::L_CURLY) {
        return prefix;
    }
    let reference = p.precede(completed);
    let reference = p.complete(reference, SyntaxKind::CONSTRUCTOR_REFERENCE);
    let marker = p.precede(reference);
    object_body(p, marker, errors_before)
}
