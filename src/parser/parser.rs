//! Recursive descent parser for the Amper configuration language
//!
//! Drives the grammar rules over the token stream, collects events and
//! diagnostics, then builds a rowan GreenNode tree from them.
//! Supports error recovery and produces a lossless CST.

use rowan::{GreenNode, TextRange};

use super::ast::{AstNode, File};
use super::config::ParseConfig;
use super::errors::{ErrorCode, ParseContext, ParseErrors, SyntaxError, format_context_error};
use super::event::{Checkpoint, CompletedMarker, Event, Marker};
use super::grammar::{self, AmperParser, CLOSING_DELIMITERS, GROUP_OPENERS};
use super::lexer::{Token, tokenize};
use super::sink::TreeSink;
use super::syntax_kind::SyntaxKind;

/// Parse result containing the green tree and any errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> super::SyntaxNode {
        super::SyntaxNode::new_root(self.green.clone())
    }

    /// Get the typed root
    pub fn file(&self) -> File {
        File::cast(self.syntax()).expect("the root of a parse is always a FILE node")
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// The tree if the input was well-formed, all diagnostics otherwise
    pub fn into_result(self) -> Result<File, ParseErrors> {
        if self.errors.is_empty() {
            Ok(self.file())
        } else {
            Err(ParseErrors(self.errors))
        }
    }
}

/// Parse Amper source code into a CST
pub fn parse(input: &str) -> Parse {
    parse_with_config(input, &ParseConfig::default())
}

/// Parse Amper source code with explicit options
pub fn parse_with_config(input: &str, config: &ParseConfig) -> Parse {
    let tokens = tokenize(input);
    let mut parser = Parser::new(&tokens, config);
    grammar::file(&mut parser);
    let (events, mut errors) = parser.finish();

    // Diagnostics are reported as rules complete, not in source order
    errors.sort_by_key(|error| error.range.start());

    let green = TreeSink::new(&tokens).build(events);

    tracing::debug!(
        "parsed {} bytes: {} tokens, {} errors",
        input.len(),
        tokens.len(),
        errors.len()
    );

    Parse { green, errors }
}

/// The parser state
struct Parser<'t> {
    tokens: &'t [Token<'t>],
    /// Indices into `tokens` of every non-trivia token; the last one is EOF
    significant: Vec<usize>,
    pos: usize,
    events: Vec<Event>,
    errors: Vec<SyntaxError>,
    depth: usize,
    max_depth: usize,
}

impl<'t> Parser<'t> {
    fn new(tokens: &'t [Token<'t>], config: &ParseConfig) -> Self {
        let mut errors = Vec::new();
        let mut significant = Vec::with_capacity(tokens.len());
        for (idx, token) in tokens.iter().enumerate() {
            if token.kind.is_trivia() {
                // Comments never reach the grammar, so check them here
                if token.kind == SyntaxKind::BLOCK_COMMENT && token.is_unterminated() {
                    errors.push(
                        SyntaxError::new(
                            "unterminated block comment",
                            token.range(),
                            ErrorCode::E0103,
                        )
                        .with_expected("'*/'"),
                    );
                }
            } else {
                significant.push(idx);
            }
        }

        Self {
            tokens,
            significant,
            pos: 0,
            events: Vec::new(),
            errors,
            depth: 0,
            max_depth: config.max_depth,
        }
    }

    fn finish(self) -> (Vec<Event>, Vec<SyntaxError>) {
        (self.events, self.errors)
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn nth_token(&self, n: usize) -> Option<&'t Token<'t>> {
        let tokens = self.tokens;
        self.significant.get(self.pos + n).map(|&idx| &tokens[idx])
    }

    fn current(&self) -> Option<&'t Token<'t>> {
        self.nth_token(0)
    }

    fn current_text(&self) -> &'t str {
        self.current().map(|t| t.text).unwrap_or("")
    }

    /// How the current token is named in diagnostics
    fn found(&self) -> String {
        match self.current_kind() {
            SyntaxKind::EOF => "end of file".to_string(),
            SyntaxKind::IDENTIFIER => format!("identifier '{}'", self.current_text()),
            kind => kind.description().to_string(),
        }
    }

    /// Consume tokens until one of `recovery` or end of input. Groups are
    /// consumed whole, so a recovery token inside one does not stop the skip.
    fn skip_until(&mut self, recovery: &[SyntaxKind]) {
        while !self.at_eof() && !self.at_any(recovery) {
            if self.at_any(GROUP_OPENERS) {
                grammar::skip_group(self);
            } else {
                self.bump();
            }
        }
    }
}

impl AmperParser for Parser<'_> {
    fn current_kind(&self) -> SyntaxKind {
        self.nth(0)
    }

    fn nth(&self, n: usize) -> SyntaxKind {
        self.nth_token(n)
            .map(|t| t.kind)
            .unwrap_or(SyntaxKind::EOF)
    }

    fn current_range(&self) -> TextRange {
        match self.current() {
            Some(token) => token.range(),
            None => self
                .tokens
                .last()
                .map(|t| TextRange::empty(t.range().end()))
                .unwrap_or_default(),
        }
    }

    fn get_pos(&self) -> usize {
        self.pos
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) {
        let Some(token) = self.current() else {
            return;
        };
        if token.kind == SyntaxKind::EOF {
            return;
        }
        if token.kind == SyntaxKind::ERROR {
            let error = SyntaxError::new(
                format!("invalid character '{}'", token.text),
                token.range(),
                ErrorCode::E0101,
            );
            self.errors.push(error);
        }
        if token.kind.is_string() && token.is_unterminated() {
            let error = SyntaxError::new(
                "unterminated string literal",
                token.range(),
                ErrorCode::E0102,
            )
            .with_expected("closing quote");
            self.errors.push(error);
        }
        self.events.push(Event::Token);
        self.pos += 1;
    }

    // =========================================================================
    // Node building
    // =========================================================================

    fn start(&mut self) -> Marker {
        let pos = self.events.len() as u32;
        self.events.push(Event::tombstone());
        Marker { pos }
    }

    fn complete(&mut self, marker: Marker, kind: SyntaxKind) -> CompletedMarker {
        if let Event::Start { kind: slot, .. } = &mut self.events[marker.pos as usize] {
            *slot = kind;
        }
        self.events.push(Event::Finish);
        CompletedMarker::new(marker.pos, kind)
    }

    fn precede(&mut self, completed: CompletedMarker) -> Marker {
        let parent = self.start();
        if let Event::Start { forward_parent, .. } = &mut self.events[completed.pos as usize] {
            *forward_parent = Some(parent.pos - completed.pos);
        }
        parent
    }

    // =========================================================================
    // Backtracking
    // =========================================================================

    fn mark(&self) -> Checkpoint {
        Checkpoint {
            pos: self.pos,
            events: self.events.len(),
            errors: self.errors.len(),
        }
    }

    fn rewind(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.pos;
        self.events.truncate(checkpoint.events);
        self.errors.truncate(checkpoint.errors);
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn error_count(&self) -> usize {
        self.errors.len()
    }

    fn push_error(&mut self, error: SyntaxError) {
        self.errors.push(error);
    }

    fn error_recover(&mut self, context: ParseContext) {
        if self.at_eof() {
            return;
        }

        let kind = self.current_kind();
        if kind == SyntaxKind::ERROR {
            // Reported by `bump`
            tracing::trace!(
                "recovering {} at invalid character {:?}",
                context.description(),
                self.current_range()
            );
        } else {
            let code = if self.at_any(CLOSING_DELIMITERS) {
                ErrorCode::E0203
            } else if context == ParseContext::ArgumentList {
                ErrorCode::E0402
            } else {
                ErrorCode::E0901
            };
            let mut error = format_context_error(&self.found(), context, code);
            error.range = self.current_range();
            if code == ErrorCode::E0203 {
                error = error.with_hint("remove the unmatched closing delimiter");
            }
            tracing::trace!(
                "recovering {} at {:?}: {}",
                context.description(),
                self.current_range(),
                error.message
            );
            self.errors.push(error);
        }

        let marker = self.start();
        // Always consume at least one token to make progress. A group is
        // skipped whole so its closer cannot end the enclosing construct.
        if GROUP_OPENERS.contains(&kind) {
            grammar::skip_group(self);
        } else {
            self.bump();
        }
        self.skip_until(context.recovery_tokens());
        self.complete(marker, SyntaxKind::ERROR);
    }

    fn error_slot(&mut self, code: ErrorCode, message: impl Into<String>, context: ParseContext) {
        let error = SyntaxError::new(message, self.current_range(), code)
            .with_expected(context.expected_description());
        tracing::trace!(
            "empty slot {} at {:?}: {}",
            context.description(),
            self.current_range(),
            error.message
        );
        self.errors.push(error);

        let marker = self.start();
        self.skip_until(context.recovery_tokens());
        self.complete(marker, SyntaxKind::ERROR);
    }

    // =========================================================================
    // Nesting guard
    // =========================================================================

    fn enter(&mut self) -> bool {
        if self.depth >= self.max_depth {
            return false;
        }
        self.depth += 1;
        true
    }

    fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
