use super::{Network, Spanned};
use crate::span::Span;

/// The root of the AST: an ordered sequence of [`Network`] declarations.
/// Always present from [`crate::analyze`], even for empty or malformed
/// input — it may simply have zero networks.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Document {
    pub networks: Vec<Network>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// The span covering the whole document, or [`Span::start`] when empty.
    pub fn span(&self) -> Span {
        match (self.networks.first(), self.networks.last()) {
            (Some(first), Some(last)) => first.span().merge(&last.span()),
            _ => Span::start(),
        }
    }
}
