//! Rowan-based lossless parser for the Amper configuration language
//!
//! This module provides a lossless parser using:
//! - **logos** for fast lexing
//! - **rowan** for the CST (Concrete Syntax Tree)
//!
//! This is the rust-analyzer approach: we build a lossless CST that preserves
//! all whitespace and comments, then extract an AST layer on top.
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind
//!     ↓
//! Grammar rules → Events (start / token / finish) + diagnostics
//!     ↓
//! Tree sink → GreenNode tree (immutable, cheap to clone, Send + Sync)
//!     ↓
//! SyntaxNode (rowan) → CST with parent pointers, built on demand
//!     ↓
//! AST layer → Typed wrappers, AmperNode factory, AmperVisitor
//! ```
//!
//! ## Error recovery
//!
//! Parsing never fails. Each rule has a commit point; past it, missing
//! pieces are reported and the node is completed anyway. Tokens that fit
//! nowhere are wrapped in ERROR nodes up to the next token the enclosing
//! construct can resume at.

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
pub mod config;
pub mod errors;
mod event;
pub mod grammar;
mod lexer;
mod sink;
mod syntax_kind;
pub mod visitor;

pub use ast::*;
pub use config::ParseConfig;
pub use errors::{ErrorCode, ParseErrors, SyntaxError};
pub use event::{Checkpoint, CompletedMarker, Marker};
pub use grammar::MatchResult;
pub use lexer::{Lexer, Token, tokenize};
pub use parser::{Parse, parse, parse_with_config};
pub use syntax_kind::{
    AmperLanguage, LITERAL_KINDS, OBJECT_ELEMENT_KINDS, SyntaxElement, SyntaxKind, SyntaxNode,
    SyntaxNodeChildren, SyntaxToken, VALUE_KINDS,
};
pub use visitor::{AmperVisitor, walk_children};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};
