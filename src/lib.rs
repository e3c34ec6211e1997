//! # amper-syntax
//!
//! Lexer, parser and lossless concrete syntax tree for the Amper
//! configuration language.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! parser    → Logos lexer, recursive-descent parser, CST, typed AST, visitor
//!   ↓
//! base      → Primitives (TextRange, line/column conversion)
//! ```
//!
//! ## Example
//!
//! ```
//! use amper::parse;
//!
//! let parse = parse("settings { kotlin { version = '2.0' } }");
//! assert!(parse.ok());
//!
//! let settings = parse.file().find_property("settings").unwrap();
//! let kotlin = settings.nested_object().unwrap().find_property("kotlin").unwrap();
//! let version = kotlin.nested_object().unwrap().find_property("version").unwrap();
//! let value = version.value().unwrap().as_literal().unwrap();
//! assert_eq!(value.text_value(), "2.0");
//! ```

// ============================================================================
// MODULES (dependency order: base → parser)
// ============================================================================

/// Foundation types: TextRange, line/column conversion
pub mod base;

/// Parser: Logos lexer, recursive-descent parser, CST and typed AST
pub mod parser;

// Re-export the entry points
pub use parser::{Parse, ParseConfig, ParseErrors, SyntaxError, parse, parse_with_config};

// Re-export foundation types
pub use base::{LineCol, LineIndex, Position, Span, TextRange, TextSize};
