use super::{Property, Spanned};
use crate::span::Span;

/// One entry in a [`MessageCatalog`], e.g. `J3/2 { ... }`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MessageEntry {
    pub message_id: String,
    pub properties: Vec<Property>,
    pub span: Span,
}

impl Spanned for MessageEntry {
    fn span(&self) -> Span {
        self.span
    }
}

/// The `messages { ... }` block of a [`super::Network`]; entries preserve
/// source order and duplicate message IDs are permitted syntactically.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MessageCatalog {
    pub entries: Vec<MessageEntry>,
    pub span: Span,
}

impl Spanned for MessageCatalog {
    fn span(&self) -> Span {
        self.span
    }
}
