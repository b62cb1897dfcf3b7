use super::{Property, Spanned};
use crate::span::Span;

/// A `terminal "name" { ... }` declaration inside a [`super::Network`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Terminal {
    pub name: String,
    pub properties: Vec<Property>,
    pub span: Span,
}

impl Spanned for Terminal {
    fn span(&self) -> Span {
        self.span
    }
}
