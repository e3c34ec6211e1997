//! Parser options

/// Default limit on how deeply values and elements may nest
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Smallest usable limit: a top-level element and its value
pub const MIN_MAX_DEPTH: usize = 2;

/// Options controlling a single parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseConfig {
    /// Maximum nesting before the parser stops descending and skips the
    /// construct. Every object element and every value counts one level, so
    /// `a = 1` needs two and `a = f(1)` needs three.
    pub max_depth: usize,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseConfig {
    /// Replace the nesting limit. Limits below [`MIN_MAX_DEPTH`] are raised
    /// to it so that `name = value` at top level always parses.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.max(MIN_MAX_DEPTH);
        self
    }
}
