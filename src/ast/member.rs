use super::{Property, Spanned};
use crate::span::Span;

/// A `member "name" { ... }` declaration inside a [`super::Subnetwork`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Member {
    pub name: String,
    pub properties: Vec<Property>,
    pub span: Span,
}

impl Spanned for Member {
    fn span(&self) -> Span {
        self.span
    }
}
