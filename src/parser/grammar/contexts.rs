//! Context markers, context blocks and contextual statements
//!
//! ```text
//! context_name         = ('@' | '!@') IDENTIFIER
//! context_names        = (context_name (',' | &'}')?)+
//! context_block        = context_names '{' (object_element (',' | &'}')?)* '}'
//! contextual_statement = context_names (invocation_element | variable_declaration | property)
//! ```

use super::elements::{element_list, expect_closing_curly, statement};
use super::{AmperParser, CONTEXT_MARKERS, MatchResult, finish};
use crate::parser::errors::{ErrorCode, ParseContext};
use crate::parser::syntax_kind::SyntaxKind;

/// Parse `@name` or `!@name`
pub fn context_name<P: AmperParser>(p: &mut P) -> MatchResult {
    if !p.at_any(CONTEXT_MARKERS) {
        return MatchResult::NotMatched;
    }
    let errors_before = p.error_count();
    let marker = p.start();
    p.bump(); // @ or !@
    if !p.eat(SyntaxKind::IDENTIFIER) {
        p.error(
            ErrorCode::E0304,
            "expected a context name after the context marker",
            "identifier",
        );
    }
    finish(p, marker, SyntaxKind::CONTEXT_NAME, errors_before)
}

/// Parse one or more context names, optionally separated by commas.
/// Returns the number of names parsed.
pub fn context_names<P: AmperParser>(p: &mut P) -> usize {
    let mut count = 0;
    while context_name(p).is_matched() {
        count += 1;
        p.eat(SyntaxKind::COMMA);
    }
    count
}

/// Parse a context block or a contextual statement
pub fn contextual_element<P: AmperParser>(p: &mut P) -> MatchResult {
    if !p.at_any(CONTEXT_MARKERS) {
        return MatchResult::NotMatched;
    }
    let errors_before = p.error_count();
    let marker = p.start();
    context_names(p);

    if p.at(SyntaxKind::L_CURLY) {
        let open = p.current_range();
        p.bump(); // {
        element_list(p, ParseContext::ContextBlockBody);
        expect_closing_curly(p, "context block", open);
        return finish(p, marker, SyntaxKind::CONTEXT_BLOCK, errors_before);
    }

    // Committed after the names: a statement must follow
    if statement(p).is_not_matched() {
        p.error(
            ErrorCode::E0303,
            "expected '{' or a statement after context names",
            ParseContext::ContextNames.expected_description(),
        );
    }
    finish(p, marker, SyntaxKind::CONTEXTUAL_STATEMENT, errors_before)
}
