//! Logos-based lexer for the Amper configuration language
//!
//! Fast tokenization using the logos crate. The lexer never fails: characters
//! it does not recognise become `ERROR` tokens and the parser reports them.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use rowan::{TextRange, TextSize};

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, TextSize::of(self.text))
    }

    /// A string literal without its closing quote, or a block comment without `*/`
    pub fn is_unterminated(&self) -> bool {
        match self.kind {
            SyntaxKind::SINGLE_QUOTED_STRING => !is_closed_string(self.text, '\''),
            SyntaxKind::DOUBLE_QUOTED_STRING => !is_closed_string(self.text, '"'),
            SyntaxKind::BLOCK_COMMENT => self.text.len() < 4 || !self.text.ends_with("*/"),
            _ => false,
        }
    }
}

/// The closing quote must not be escaped by an odd number of backslashes
fn is_closed_string(text: &str, quote: char) -> bool {
    if text.len() < 2 || !text.ends_with(quote) {
        return false;
    }
    let body = &text[1..text.len() - 1];
    let backslashes = body.bytes().rev().take_while(|&b| b == b'\\').count();
    backslashes % 2 == 0
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string, terminated by an `EOF` token
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens: Vec<_> = Lexer::new(input).collect();
    tokens.push(Token {
        kind: SyntaxKind::EOF,
        text: "",
        offset: TextSize::of(input),
    });
    tokens
}

/// Consume everything up to and including the next `*/`, or the rest of the input
fn block_comment(lex: &mut logos::Lexer<'_, LogosToken>) {
    let rest = lex.remainder();
    match rest.find("*/") {
        Some(end) => lex.bump(end + 2),
        None => lex.bump(rest.len()),
    }
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*")]
    Ident,

    #[regex(r"-?[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?")]
    Number,

    // A string stops at the closing quote or before the end of the line
    #[regex(r"'([^'\\\n]|\\[^\n])*\\?'?")]
    SingleQuotedString,

    #[regex(r#""([^"\\\n]|\\[^\n])*\\?"?"#)]
    DoubleQuotedString,

    // =========================================================================
    // KEYWORDS (tokens win over the identifier regex on equal length)
    // =========================================================================
    #[token("true")]
    TrueKw,
    #[token("false")]
    FalseKw,
    #[token("null")]
    NullKw,
    #[token("val")]
    ValKw,

    // =========================================================================
    // MULTI-CHARACTER PUNCTUATION (must come before single-char)
    // =========================================================================
    #[token("!@")]
    NegAt,

    // =========================================================================
    // SINGLE-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("{")]
    LCurly,
    #[token("}")]
    RCurly,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token(":")]
    Colon,
    #[token("=")]
    Eq,
    #[token("@")]
    At,
    #[token("#")]
    Sharp,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Whitespace => SyntaxKind::WHITESPACE,
            LogosToken::LineComment => SyntaxKind::LINE_COMMENT,
            LogosToken::BlockComment => SyntaxKind::BLOCK_COMMENT,
            LogosToken::Ident => SyntaxKind::IDENTIFIER,
            LogosToken::Number => SyntaxKind::NUMBER,
            LogosToken::SingleQuotedString => SyntaxKind::SINGLE_QUOTED_STRING,
            LogosToken::DoubleQuotedString => SyntaxKind::DOUBLE_QUOTED_STRING,
            LogosToken::TrueKw => SyntaxKind::TRUE_KW,
            LogosToken::FalseKw => SyntaxKind::FALSE_KW,
            LogosToken::NullKw => SyntaxKind::NULL_KW,
            LogosToken::ValKw => SyntaxKind::VAL_KW,
            LogosToken::NegAt => SyntaxKind::NEGAT,
            LogosToken::LCurly => SyntaxKind::L_CURLY,
            LogosToken::RCurly => SyntaxKind::R_CURLY,
            LogosToken::LParen => SyntaxKind::L_PAREN,
            LogosToken::RParen => SyntaxKind::R_PAREN,
            LogosToken::LBracket => SyntaxKind::L_BRACKET,
            LogosToken::RBracket => SyntaxKind::R_BRACKET,
            LogosToken::Comma => SyntaxKind::COMMA,
            LogosToken::Dot => SyntaxKind::DOT,
            LogosToken::Colon => SyntaxKind::COLON,
            LogosToken::Eq => SyntaxKind::EQ,
            LogosToken::At => SyntaxKind::AT,
            LogosToken::Sharp => SyntaxKind::SHARP,
        }
    }
}
