use super::{FilterBlock, MessageCatalog, Net, Property, Spanned, Subnetwork, Terminal};
use crate::span::Span;

/// A `network "name" { ... }` declaration: the top-level unit of a
/// [`super::Document`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Network {
    pub name: String,
    pub properties: Vec<Property>,
    pub terminals: Vec<Terminal>,
    pub nets: Vec<Net>,
    pub subnetworks: Vec<Subnetwork>,
    pub messages: Option<MessageCatalog>,
    pub filters: Option<FilterBlock>,
    pub span: Span,
}

impl Spanned for Network {
    fn span(&self) -> Span {
        self.span
    }
}
