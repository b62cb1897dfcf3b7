//! The abstract syntax tree produced by the parser.
//!
//! Every node is tolerant of partial input: a [`Document`] is always
//! producible, even from malformed source, because the parser recovers
//! from errors rather than bailing (see [`crate::parser`]).

mod document;
mod filter;
mod member;
mod message;
mod net;
mod network;
pub(crate) mod property;
mod subnetwork;
mod terminal;

pub use document::Document;
pub use filter::{Condition, FilterBlock, FilterRule, RuleAction, WhereClause};
pub use member::Member;
pub use message::{MessageCatalog, MessageEntry};
pub use net::Net;
pub use network::Network;
pub use property::{Property, PropertyValue};
pub use subnetwork::Subnetwork;
pub use terminal::Terminal;

use crate::span::Span;

/// Every AST node carries a non-empty span covering the extent from its
/// first to its last significant token.
pub trait Spanned {
    fn span(&self) -> Span;
}
