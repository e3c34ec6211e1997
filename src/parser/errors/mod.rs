//! Parser error handling module
//!
//! This module provides enhanced error handling for the Amper parser:
//! - Categorized error codes for filtering and documentation
//! - Context-aware error messages
//! - Expected-construct descriptions and hints
//! - Related span tracking (e.g., "opened here" for unclosed braces)

mod codes;
mod context;
mod error;

pub use codes::ErrorCode;
pub use context::ParseContext;
pub use error::{ParseErrors, RelatedInfo, SyntaxError, SyntaxErrorBuilder, format_context_error};
