//! Source location tracking.
//!
//! A [`Span`] is four integers: a 1-based line/column pair for humans, a
//! 0-based byte offset, and a byte length. Spans are created only by the
//! lexer at the start of a lexeme and finalized once the lexeme completes;
//! every later stage only merges existing spans, never forges new ones.

use std::fmt;

/// A location in the original source text.
///
/// Spans never carry a copy of the source text itself — four integers is
/// the whole value, so it is cheap to copy into every token, AST node, and
/// diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Span {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
    pub length: usize,
}

impl Span {
    pub fn new(line: usize, column: usize, offset: usize, length: usize) -> Self {
        Self {
            line,
            column,
            offset,
            length,
        }
    }

    /// A zero-length span at the start of the source, used as a placeholder
    /// for synthesized nodes (e.g. an empty document).
    pub fn start() -> Self {
        Self::new(1, 1, 0, 0)
    }

    pub fn end_offset(&self) -> usize {
        self.offset + self.length
    }

    /// Combine `self` (first token of a production) with `other` (last
    /// token consumed), producing a span that starts where `self` starts
    /// and extends through the end of `other`.
    pub fn merge(&self, other: &Span) -> Span {
        Span {
            line: self.line,
            column: self.column,
            offset: self.offset,
            length: (other.offset + other.length).saturating_sub(self.offset),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
