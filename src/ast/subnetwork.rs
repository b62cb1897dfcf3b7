use super::{Member, Property, Spanned};
use crate::span::Span;

/// A `subnetwork "name" { ... }` declaration (Link-22) owning an ordered
/// list of [`Member`] declarations alongside its own properties.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Subnetwork {
    pub name: String,
    pub properties: Vec<Property>,
    pub members: Vec<Member>,
    pub span: Span,
}

impl Spanned for Subnetwork {
    fn span(&self) -> Span {
        self.span
    }
}
