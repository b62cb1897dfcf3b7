use crate::ast::Property;
use crate::lexer::TokenKind;

use super::state::ParseState;
use super::value::parse_value;

/// `property = key ":" value [","]`. `key` is any `Identifier` or
/// `Keyword` lexeme — keywords double as property names throughout the
/// grammar (e.g. `role`, `npg`, `tsdf`).
pub fn parse_property(state: &mut ParseState) -> Option<Property> {
    let key_token = state.peek().clone();
    if !matches!(key_token.kind, TokenKind::Identifier | TokenKind::Keyword) {
        return None;
    }
    state.advance();

    state.expect(TokenKind::Colon, ":")?;
    let value = parse_value(state)?;

    let end_span = state.last_span();
    if state.check(TokenKind::Comma) {
        state.advance();
    }

    Some(Property {
        key: key_token.lexeme,
        value,
        span: key_token.span.merge(&end_span),
    })
}

/// True when the cursor is positioned at the start of a `property`
/// production: an identifier-or-keyword lexeme immediately followed by
/// `:`. Used by declaration-body dispatch to disambiguate a property from
/// a nested declaration keyword.
pub fn at_property_start(state: &ParseState) -> bool {
    matches!(state.peek_kind(), TokenKind::Identifier | TokenKind::Keyword)
        && state.peek_ahead_kind(1) == TokenKind::Colon
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::PropertyValue;
    use crate::lexer::{lex, significant_tokens};

    fn state_for(src: &str) -> ParseState {
        ParseState::new(significant_tokens(&lex(src)))
    }

    #[test]
    fn test_parse_simple_property() {
        let mut state = state_for("link: Link16,");
        let prop = parse_property(&mut state).unwrap();
        assert_eq!(prop.key, "link");
        assert_eq!(prop.value, PropertyValue::Identifier("Link16".into()));
    }

    #[test]
    fn test_parse_property_without_trailing_comma() {
        let mut state = state_for("tsdf: 60%");
        let prop = parse_property(&mut state).unwrap();
        assert_eq!(prop.key, "tsdf");
        assert_eq!(prop.value, PropertyValue::Percent(60.0));
        assert!(state.at_eof());
    }

    #[test]
    fn test_keyword_can_be_property_key() {
        let mut state = state_for("role: NetControlStation");
        let prop = parse_property(&mut state).unwrap();
        assert_eq!(prop.key, "role");
    }

    #[test]
    fn test_at_property_start_true_for_identifier_colon() {
        let state = state_for("npg: NPG_7");
        assert!(at_property_start(&state));
    }

    #[test]
    fn test_at_property_start_false_for_declaration_keyword() {
        let state = state_for("terminal \"T1\" {}");
        assert!(!at_property_start(&state));
    }
}
