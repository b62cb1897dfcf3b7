use crate::ast::PropertyValue;
use crate::lexer::{Token, TokenKind};

use super::state::ParseState;

/// Strip the surrounding quotes the lexer preserved on a `String` token.
/// An unterminated string (no trailing quote) is left as-is past the
/// opening quote.
pub fn strip_quotes(lexeme: &str) -> String {
    let inner = lexeme.strip_prefix('"').unwrap_or(lexeme);
    inner.strip_suffix('"').unwrap_or(inner).to_string()
}

fn strip_percent(lexeme: &str) -> &str {
    lexeme.strip_suffix('%').unwrap_or(lexeme)
}

fn item_text(token: &Token) -> Option<String> {
    match token.kind {
        TokenKind::String => Some(strip_quotes(&token.lexeme)),
        TokenKind::Identifier | TokenKind::Keyword | TokenKind::JMessage => {
            Some(token.lexeme.clone())
        }
        _ => None,
    }
}

/// Parse `value = string | number | percent | duration | boolean | hex |
/// identifier | keyword | array | j-message`. Returns `None` (with a
/// diagnostic already recorded) when the current token is none of these.
pub fn parse_value(state: &mut ParseState) -> Option<PropertyValue> {
    let token = state.peek().clone();
    match token.kind {
        TokenKind::String => {
            state.advance();
            Some(PropertyValue::String(strip_quotes(&token.lexeme)))
        }
        TokenKind::Number => {
            state.advance();
            Some(PropertyValue::Number(token.lexeme.parse().unwrap_or(0.0)))
        }
        TokenKind::Percent => {
            state.advance();
            Some(PropertyValue::Percent(
                strip_percent(&token.lexeme).parse().unwrap_or(0.0),
            ))
        }
        TokenKind::Duration => {
            state.advance();
            Some(PropertyValue::Duration(token.lexeme.clone()))
        }
        TokenKind::Boolean => {
            state.advance();
            Some(PropertyValue::Boolean(token.lexeme == "true"))
        }
        TokenKind::HexNumber => {
            state.advance();
            Some(PropertyValue::Hex(token.lexeme.clone()))
        }
        TokenKind::Identifier | TokenKind::Keyword | TokenKind::JMessage => {
            state.advance();
            Some(PropertyValue::Identifier(token.lexeme.clone()))
        }
        TokenKind::LBracket => parse_array(state),
        _ => {
            use crate::diagnostic::Diagnostic;
            state.diagnostics.push(Diagnostic::syntax_error(
                format!("Expected a value, got '{}'", token.lexeme),
                token.span,
            ));
            None
        }
    }
}

/// `array = "[" [ item { "," item } ] "]"`, `item = identifier | keyword |
/// j-message | string`.
fn parse_array(state: &mut ParseState) -> Option<PropertyValue> {
    state.expect(TokenKind::LBracket, "[")?;

    let mut items = Vec::new();
    if !state.check(TokenKind::RBracket) {
        loop {
            let token = state.peek().clone();
            match item_text(&token) {
                Some(text) => {
                    state.advance();
                    items.push(text);
                }
                None => {
                    use crate::diagnostic::Diagnostic;
                    state.diagnostics.push(Diagnostic::syntax_error(
                        format!("Expected an array item, got '{}'", token.lexeme),
                        token.span,
                    ));
                    break;
                }
            }

            if state.check(TokenKind::Comma) {
                state.advance();
                continue;
            }
            break;
        }
    }

    state.expect(TokenKind::RBracket, "]")?;
    Some(PropertyValue::Array(items))
}
