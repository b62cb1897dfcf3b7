//! Lexical analysis: source text in, an ordered token stream (with trivia)
//! out. The lexer never errors — unrecognized input becomes [`TokenKind::Unknown`]
//! tokens so a host editor always gets a usable, total token stream.

mod token;

pub use token::{is_keyword, Token, TokenKind, KEYWORDS};

use crate::span::Span;

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || is_digit(c) || c == '-'
}

struct Lexer<'a> {
    source: &'a str,
    chars: Vec<(usize, char)>,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().collect(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    fn byte_offset(&self, pos: usize) -> usize {
        self.chars.get(pos).map(|(o, _)| *o).unwrap_or(self.source.len())
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).map(|(_, c)| *c)
    }

    fn peek_at(&self, ahead: usize) -> Option<char> {
        self.chars.get(self.pos + ahead).map(|(_, c)| *c)
    }

    fn start_span(&self) -> (usize, usize, usize) {
        (self.line, self.column, self.byte_offset(self.pos))
    }

    fn finish(&self, start: (usize, usize, usize)) -> Span {
        let (line, column, offset) = start;
        let end_offset = self.byte_offset(self.pos);
        Span::new(line, column, offset, end_offset - offset)
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn next_token(&mut self) -> Token {
        let start = self.start_span();

        // Rule 1: horizontal whitespace runs.
        if matches!(self.peek(), Some(' ') | Some('\t') | Some('\r')) {
            while matches!(self.peek(), Some(' ') | Some('\t') | Some('\r')) {
                self.advance();
            }
            return Token::new(TokenKind::Whitespace, self.slice(start), self.finish(start));
        }

        // Rule 2: newline.
        if self.peek() == Some('\n') {
            self.advance();
            return Token::new(TokenKind::Newline, self.slice(start), self.finish(start));
        }

        // Rule 3: line comment.
        if self.peek() == Some('-') && self.peek_at(1) == Some('-') {
            self.advance();
            self.advance();
            while let Some(c) = self.peek() {
                if c == '\n' {
                    break;
                }
                self.advance();
            }
            return Token::new(TokenKind::Comment, self.slice(start), self.finish(start));
        }

        // Rule 4: string literal.
        if self.peek() == Some('"') {
            self.advance();
            while let Some(c) = self.peek() {
                if c == '"' {
                    self.advance();
                    break;
                }
                if c == '\n' {
                    break;
                }
                self.advance();
            }
            return Token::new(TokenKind::String, self.slice(start), self.finish(start));
        }

        // Rule 5: numbers, hex, percent, duration.
        if let Some(c) = self.peek() {
            if is_digit(c) {
                return self.lex_number(start);
            }
        }

        // Rule 6: J-message.
        if self.peek() == Some('J') && self.peek_at(1).is_some_and(is_digit) {
            self.advance(); // 'J'
            while self.peek().is_some_and(is_digit) {
                self.advance();
            }
            if self.peek() == Some('/') && self.peek_at(1).is_some_and(is_digit) {
                self.advance(); // '/'
                while self.peek().is_some_and(is_digit) {
                    self.advance();
                }
            }
            return Token::new(TokenKind::JMessage, self.slice(start), self.finish(start));
        }

        // Rule 7: identifiers, keywords, booleans.
        if let Some(c) = self.peek() {
            if is_ident_start(c) {
                while self.peek().is_some_and(is_ident_continue) {
                    self.advance();
                }
                let lexeme = self.slice(start);
                let kind = if lexeme == "true" || lexeme == "false" {
                    TokenKind::Boolean
                } else if is_keyword(&lexeme) {
                    TokenKind::Keyword
                } else {
                    TokenKind::Identifier
                };
                return Token::new(kind, lexeme, self.finish(start));
            }
        }

        // Rule 9: multi/single-char comparison operators (checked before
        // generic single-char punctuation since `>`/`<` overlap).
        if let Some(kind) = self.lex_operator() {
            return Token::new(kind, self.slice(start), self.finish(start));
        }

        // Rule 8: single-character punctuation.
        if let Some(kind) = self.peek().and_then(punctuation_kind) {
            self.advance();
            return Token::new(kind, self.slice(start), self.finish(start));
        }

        // Rule 10: anything else is Unknown, one character at a time.
        if self.peek().is_some() {
            self.advance();
            return Token::new(TokenKind::Unknown, self.slice(start), self.finish(start));
        }

        Token::eof(self.finish(start))
    }

    fn lex_operator(&mut self) -> Option<TokenKind> {
        match (self.peek(), self.peek_at(1)) {
            (Some('>'), Some('=')) => {
                self.advance();
                self.advance();
                Some(TokenKind::GreaterOrEqual)
            }
            (Some('<'), Some('=')) => {
                self.advance();
                self.advance();
                Some(TokenKind::LessOrEqual)
            }
            (Some('='), Some('=')) => {
                self.advance();
                self.advance();
                Some(TokenKind::EqualEqual)
            }
            (Some('!'), Some('=')) => {
                self.advance();
                self.advance();
                Some(TokenKind::NotEqual)
            }
            (Some('>'), _) => {
                self.advance();
                Some(TokenKind::Greater)
            }
            (Some('<'), _) => {
                self.advance();
                Some(TokenKind::Less)
            }
            (Some('!'), _) | (Some('='), _) => {
                self.advance();
                Some(TokenKind::Unknown)
            }
            _ => None,
        }
    }

    fn lex_number(&mut self, start: (usize, usize, usize)) -> Token {
        // Hex: 0x / 0X followed by at least one hex digit.
        if self.peek() == Some('0')
            && matches!(self.peek_at(1), Some('x') | Some('X'))
            && self.peek_at(2).is_some_and(is_hex_digit)
        {
            self.advance(); // '0'
            self.advance(); // x/X
            while self.peek().is_some_and(is_hex_digit) {
                self.advance();
            }
            return Token::new(TokenKind::HexNumber, self.slice(start), self.finish(start));
        }

        while self.peek().is_some_and(is_digit) {
            self.advance();
        }

        if self.peek() == Some('.') && self.peek_at(1).is_some_and(is_digit) {
            self.advance(); // '.'
            while self.peek().is_some_and(is_digit) {
                self.advance();
            }
        }

        if self.peek() == Some('%') {
            self.advance();
            return Token::new(TokenKind::Percent, self.slice(start), self.finish(start));
        }

        if let Some(len) = self.duration_suffix_len() {
            for _ in 0..len {
                self.advance();
            }
            return Token::new(TokenKind::Duration, self.slice(start), self.finish(start));
        }

        Token::new(TokenKind::Number, self.slice(start), self.finish(start))
    }

    /// Returns the length (in chars) of a duration suffix (`s|ms|min|h`) at
    /// the cursor, only when it is followed by a non-identifier-continue
    /// character (or end of input), per §4.2 rule 5.
    fn duration_suffix_len(&self) -> Option<usize> {
        const SUFFIXES: &[&str] = &["ms", "min", "h", "s"];
        for suffix in SUFFIXES {
            let n = suffix.chars().count();
            if self.matches_ahead(suffix) {
                let after = self.peek_at(n);
                if !after.is_some_and(is_ident_continue) {
                    return Some(n);
                }
            }
        }
        None
    }

    fn matches_ahead(&self, text: &str) -> bool {
        text.chars()
            .enumerate()
            .all(|(i, c)| self.peek_at(i) == Some(c))
    }

    fn slice(&self, start: (usize, usize, usize)) -> String {
        let (_, _, start_offset) = start;
        let end_offset = self.byte_offset(self.pos);
        self.source[start_offset..end_offset].to_string()
    }
}

fn punctuation_kind(c: char) -> Option<TokenKind> {
    match c {
        '{' => Some(TokenKind::LBrace),
        '}' => Some(TokenKind::RBrace),
        '[' => Some(TokenKind::LBracket),
        ']' => Some(TokenKind::RBracket),
        ':' => Some(TokenKind::Colon),
        ',' => Some(TokenKind::Comma),
        _ => None,
    }
}

/// Scan `source` into an ordered token stream terminated by a synthetic
/// [`TokenKind::Eof`] token. Trivia (whitespace, newlines, comments) is
/// retained; the parser is responsible for filtering it out.
pub fn lex(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    while !lexer.at_end() {
        tokens.push(lexer.next_token());
    }

    let eof_span = Span::new(lexer.line, lexer.column, lexer.byte_offset(lexer.pos), 0);
    tokens.push(Token::eof(eof_span));

    log::debug!("lexed {} tokens ({} bytes)", tokens.len(), source.len());

    tokens
}

/// Filter trivia out of a token stream, leaving only tokens significant to
/// the parser.
pub fn significant_tokens(tokens: &[Token]) -> Vec<Token> {
    tokens
        .iter()
        .filter(|t| !t.kind.is_trivia())
        .cloned()
        .collect()
}

/// Extract the comment tokens from a full (trivia-included) token stream,
/// for a host that wants to attach them to AST nodes by offset.
pub fn comments(tokens: &[Token]) -> Vec<Token> {
    tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Comment)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_lex_empty() {
        let tokens = lex("");
        assert_eq!(kinds(&tokens), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_lex_identifier_and_keyword() {
        let tokens = lex("network foo");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Keyword,
                TokenKind::Whitespace,
                TokenKind::Identifier,
                TokenKind::Eof
            ]
        );
        assert_eq!(tokens[0].lexeme, "network");
        assert_eq!(tokens[2].lexeme, "foo");
    }

    #[test]
    fn test_lex_identifier_with_hyphen() {
        let tokens = lex("link-16");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].lexeme, "link-16");
    }

    #[test]
    fn test_lex_string() {
        let tokens = lex("\"hello world\"");
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].lexeme, "\"hello world\"");
    }

    #[test]
    fn test_lex_unterminated_string_stops_before_newline() {
        let tokens = lex("\"hello\nworld");
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].lexeme, "\"hello");
        assert_eq!(tokens[1].kind, TokenKind::Newline);
    }

    #[test]
    fn test_lex_number() {
        let tokens = lex("1400");
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].lexeme, "1400");
    }

    #[test]
    fn test_lex_fractional_number() {
        let tokens = lex("3.5");
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].lexeme, "3.5");
    }

    #[test]
    fn test_lex_hex_number() {
        let tokens = lex("0x1A");
        assert_eq!(tokens[0].kind, TokenKind::HexNumber);
        assert_eq!(tokens[0].lexeme, "0x1A");
    }

    #[test]
    fn test_lex_invalid_hex_falls_back_to_number() {
        // "0x" with no following hex digit is not a HexNumber: "0" lexes as
        // Number, then "x" starts a fresh identifier.
        let tokens = lex("0x");
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].lexeme, "0");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].lexeme, "x");
    }

    #[test]
    fn test_lex_percent() {
        let tokens = lex("60%");
        assert_eq!(tokens[0].kind, TokenKind::Percent);
        assert_eq!(tokens[0].lexeme, "60%");
    }

    #[test]
    fn test_lex_duration_suffixes() {
        for (text, expected) in [("10s", "10s"), ("10ms", "10ms"), ("5min", "5min"), ("2h", "2h")]
        {
            let tokens = lex(text);
            assert_eq!(tokens[0].kind, TokenKind::Duration, "input {text}");
            assert_eq!(tokens[0].lexeme, expected);
        }
    }

    #[test]
    fn test_lex_duration_suffix_requires_boundary() {
        // "10spare" must not be split into a Duration "10s" + Identifier
        // "pare": the suffix is only valid when followed by a
        // non-identifier-continue character.
        let tokens = lex("10spare");
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].lexeme, "10");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].lexeme, "spare");
    }

    #[test]
    fn test_lex_j_message_two_part() {
        let tokens = lex("J3/2");
        assert_eq!(tokens[0].kind, TokenKind::JMessage);
        assert_eq!(tokens[0].lexeme, "J3/2");
    }

    #[test]
    fn test_lex_j_message_one_part() {
        let tokens = lex("J7");
        assert_eq!(tokens[0].kind, TokenKind::JMessage);
        assert_eq!(tokens[0].lexeme, "J7");
    }

    #[test]
    fn test_lex_booleans() {
        let tokens = lex("true false");
        assert_eq!(tokens[0].kind, TokenKind::Boolean);
        assert_eq!(tokens[2].kind, TokenKind::Boolean);
    }

    #[test]
    fn test_lex_comparison_operators() {
        let tokens = lex(">= <= == != > <");
        let ops: Vec<_> = tokens
            .iter()
            .filter(|t| !t.kind.is_trivia() && t.kind != TokenKind::Eof)
            .map(|t| t.kind)
            .collect();
        assert_eq!(
            ops,
            vec![
                TokenKind::GreaterOrEqual,
                TokenKind::LessOrEqual,
                TokenKind::EqualEqual,
                TokenKind::NotEqual,
                TokenKind::Greater,
                TokenKind::Less,
            ]
        );
    }

    #[test]
    fn test_lex_bare_equals_and_bang_are_unknown() {
        let tokens = lex("= !");
        assert_eq!(tokens[0].kind, TokenKind::Unknown);
        assert_eq!(tokens[2].kind, TokenKind::Unknown);
    }

    #[test]
    fn test_lex_comment() {
        let tokens = lex("-- a comment\nnext");
        assert_eq!(tokens[0].kind, TokenKind::Comment);
        assert_eq!(tokens[0].lexeme, "-- a comment");
        assert_eq!(tokens[1].kind, TokenKind::Newline);
    }

    #[test]
    fn test_lex_punctuation() {
        let tokens = lex("{}[]:,");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::LBracket,
                TokenKind::RBracket,
                TokenKind::Colon,
                TokenKind::Comma,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_lex_unknown_character() {
        let tokens = lex("@");
        assert_eq!(tokens[0].kind, TokenKind::Unknown);
        assert_eq!(tokens[0].lexeme, "@");
    }

    #[test]
    fn test_spans_cover_source_for_well_formed_input() {
        let source = "network \"X\" {\n  link: Link16\n}";
        let tokens = lex(source);
        for t in &tokens {
            assert!(t.span.offset + t.span.length <= source.len());
        }
    }

    #[test]
    fn test_significant_tokens_drops_trivia() {
        let tokens = lex("network -- hi\n \"X\"");
        let significant = significant_tokens(&tokens);
        assert!(significant.iter().all(|t| !t.kind.is_trivia()));
    }

    #[test]
    fn test_comments_extracted() {
        let tokens = lex("-- one\n-- two\nnetwork");
        let cs = comments(&tokens);
        assert_eq!(cs.len(), 2);
        assert_eq!(cs[0].lexeme, "-- one");
        assert_eq!(cs[1].lexeme, "-- two");
    }
}
