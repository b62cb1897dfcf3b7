use crate::span::Span;

/// The closed set of token kinds the lexer ever produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum TokenKind {
    // Literals
    String,
    Number,
    HexNumber,
    Percent,
    Duration,
    Boolean,
    // Identifiers and keywords
    Keyword,
    Identifier,
    JMessage,
    // Punctuation
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Colon,
    Comma,
    // Comparison operators
    GreaterOrEqual,
    LessOrEqual,
    Greater,
    Less,
    EqualEqual,
    NotEqual,
    // Trivia
    Comment,
    Whitespace,
    Newline,
    // Sentinels
    Eof,
    Unknown,
}

impl TokenKind {
    /// Trivia is retained by the lexer but filtered out before parsing.
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            TokenKind::Comment | TokenKind::Whitespace | TokenKind::Newline
        )
    }
}

/// A single lexical token: its kind, the verbatim source slice, and its span.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    pub fn eof(span: Span) -> Self {
        Self::new(TokenKind::Eof, "", span)
    }
}

/// The reserved-word set lexed as [`TokenKind::Keyword`] rather than
/// [`TokenKind::Identifier`].
pub const KEYWORDS: &[&str] = &[
    "network",
    "terminal",
    "net",
    "subnetwork",
    "member",
    "messages",
    "filters",
    "inbound",
    "outbound",
    "accept",
    "drop",
    "where",
    "link",
    "classification",
    "track_number",
    "platform_type",
    "role",
    "subscribes",
    "transmits",
    "net_number",
    "npg",
    "stacked",
    "stacking_level",
    "tsdf",
    "participants",
    "enabled",
    "operating_mode",
    "data_rate",
    "unit_id",
    "forwarding",
    "quality",
    "age",
];

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}
