use super::Spanned;
use crate::lexer::TokenKind;
use crate::span::Span;

/// `FilterRule.action` is exactly one of these two; any other producer
/// path is a bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RuleAction {
    Accept,
    Drop,
}

impl RuleAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleAction::Accept => "accept",
            RuleAction::Drop => "drop",
        }
    }
}

/// `field op value` inside a `where { ... }` clause. `value_lexeme` is kept
/// as the raw token text rather than a typed `PropertyValue`, since the
/// comparison's meaning depends on `field`, not on a property schema.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Condition {
    pub field: String,
    pub operator: TokenKind,
    pub value_lexeme: String,
    pub span: Span,
}

impl Spanned for Condition {
    fn span(&self) -> Span {
        self.span
    }
}

/// The `where { ... }` clause of a [`FilterRule`]; owns exactly one
/// [`Condition`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WhereClause {
    pub condition: Condition,
    pub span: Span,
}

impl Spanned for WhereClause {
    fn span(&self) -> Span {
        self.span
    }
}

/// One `accept J3/2` or `drop J7 where { ... }` rule.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FilterRule {
    pub action: RuleAction,
    pub message_id: String,
    pub where_clause: Option<WhereClause>,
    pub span: Span,
}

impl Spanned for FilterRule {
    fn span(&self) -> Span {
        self.span
    }
}

/// The `filters { inbound { ... } outbound { ... } }` block of a
/// [`super::Network`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FilterBlock {
    pub inbound: Vec<FilterRule>,
    pub outbound: Vec<FilterRule>,
    pub span: Span,
}

impl Spanned for FilterBlock {
    fn span(&self) -> Span {
        self.span
    }
}
