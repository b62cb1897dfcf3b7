use super::{Property, Spanned};
use crate::span::Span;

/// A `net "name" { ... }` declaration inside a [`super::Network`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Net {
    pub name: String,
    pub properties: Vec<Property>,
    pub span: Span,
}

impl Spanned for Net {
    fn span(&self) -> Span {
        self.span
    }
}
