//! Parser state as a value: a token vector, a cursor, and an accumulating
//! diagnostics list. Every production is a function over `&mut ParseState`
//! rather than a method on a class hierarchy (spec.md §9).

use crate::diagnostic::Diagnostic;
use crate::lexer::{Token, TokenKind};
use crate::span::Span;

pub struct ParseState {
    tokens: Vec<Token>,
    index: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseState {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            index: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Peek at the current token without consuming it. Always returns
    /// `Some` in practice because the token stream is terminated by `Eof`.
    pub fn peek(&self) -> &Token {
        self.tokens
            .get(self.index)
            .unwrap_or_else(|| self.tokens.last().expect("token stream has at least Eof"))
    }

    pub fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    /// Look `ahead` tokens past the cursor without consuming anything,
    /// clamped to the trailing `Eof` token.
    pub fn peek_ahead_kind(&self, ahead: usize) -> TokenKind {
        self.tokens
            .get(self.index + ahead)
            .map(|t| t.kind)
            .unwrap_or(TokenKind::Eof)
    }

    pub fn at_eof(&self) -> bool {
        self.peek_kind() == TokenKind::Eof
    }

    /// Consume and return the current token, advancing the cursor (never
    /// past `Eof`).
    pub fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !self.at_eof() {
            self.index += 1;
        }
        token
    }

    pub fn get_index(&self) -> usize {
        self.index
    }

    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    /// Consume the current token if it matches `kind`, emitting a syntax
    /// diagnostic and returning `None` otherwise. Callers that accept
    /// `None` and continue are responsible for synchronizing.
    pub fn expect(&mut self, kind: TokenKind, description: &str) -> Option<Token> {
        if self.peek_kind() == kind {
            Some(self.advance())
        } else {
            let found = self.peek().clone();
            self.diagnostics.push(Diagnostic::syntax_error(
                format!(
                    "Expected '{description}', got '{}'",
                    describe(&found)
                ),
                found.span,
            ));
            None
        }
    }

    pub fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    pub fn check_keyword(&self, word: &str) -> bool {
        self.peek_kind() == TokenKind::Keyword && self.peek().lexeme == word
    }

    /// Consume a specific keyword lexeme, if present.
    pub fn eat_keyword(&mut self, word: &str) -> Option<Token> {
        if self.check_keyword(word) {
            Some(self.advance())
        } else {
            None
        }
    }

    pub fn last_span(&self) -> Span {
        if self.index == 0 {
            self.peek().span
        } else {
            self.tokens[self.index - 1].span
        }
    }
}

fn describe(token: &Token) -> String {
    if token.kind == TokenKind::Eof {
        "end of input".to_string()
    } else {
        token.lexeme.clone()
    }
}
