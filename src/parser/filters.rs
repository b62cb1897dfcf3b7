//! `filters = "filters" "{" { ("inbound"|"outbound") "{" { rule } "}" } "}"`,
//! `rule = ("accept"|"drop") j-message [ "where" "{" cond "}" ]`,
//! `cond = field op value` (spec.md §4.3).

use crate::ast::{Condition, FilterBlock, FilterRule, RuleAction, Spanned, WhereClause};
use crate::lexer::TokenKind;

use super::state::ParseState;
use super::sync::synchronize;
use super::value::strip_quotes;

const COMPARISON_OPERATORS: &[TokenKind] = &[
    TokenKind::GreaterOrEqual,
    TokenKind::LessOrEqual,
    TokenKind::Greater,
    TokenKind::Less,
    TokenKind::EqualEqual,
    TokenKind::NotEqual,
];

fn raw_value_lexeme(state: &mut ParseState) -> String {
    let token = state.advance();
    match token.kind {
        TokenKind::String => strip_quotes(&token.lexeme),
        _ => token.lexeme,
    }
}

fn parse_condition(state: &mut ParseState) -> Option<Condition> {
    let field_token = state.peek().clone();
    if !matches!(field_token.kind, TokenKind::Identifier | TokenKind::Keyword) {
        state.diagnostics.push(crate::diagnostic::Diagnostic::syntax_error(
            format!("Expected a field name, got '{}'", field_token.lexeme),
            field_token.span,
        ));
        return None;
    }
    state.advance();

    let operator = state.peek_kind();
    if !COMPARISON_OPERATORS.contains(&operator) {
        let found = state.peek().clone();
        state.diagnostics.push(crate::diagnostic::Diagnostic::syntax_error(
            format!("Expected a comparison operator, got '{}'", found.lexeme),
            found.span,
        ));
        return None;
    }
    state.advance();

    let value_token_span = state.peek().span;
    let value_lexeme = raw_value_lexeme(state);

    Some(Condition {
        field: field_token.lexeme,
        operator,
        value_lexeme,
        span: field_token.span.merge(&value_token_span),
    })
}

/// `[ "where" "{" cond "}" ]`.
fn parse_where_clause(state: &mut ParseState) -> Option<WhereClause> {
    let where_token = state.eat_keyword("where")?;

    if state.expect(TokenKind::LBrace, "{").is_none() {
        synchronize(state);
        return None;
    }

    let condition = parse_condition(state);
    state.expect(TokenKind::RBrace, "}");

    condition.map(|condition| WhereClause {
        span: where_token.span.merge(&condition.span()),
        condition,
    })
}

fn parse_rule(state: &mut ParseState) -> Option<FilterRule> {
    let action_token = state.peek().clone();
    let action = if state.eat_keyword("accept").is_some() {
        RuleAction::Accept
    } else if state.eat_keyword("drop").is_some() {
        RuleAction::Drop
    } else {
        let bad = state.advance();
        state.diagnostics.push(crate::diagnostic::Diagnostic::syntax_error(
            format!("Expected 'accept' or 'drop', got '{}'", bad.lexeme),
            bad.span,
        ));
        return None;
    };

    let message_id = match state.expect(TokenKind::JMessage, "j-message") {
        Some(token) => token.lexeme,
        None => return None,
    };

    let where_clause = if state.check_keyword("where") {
        parse_where_clause(state)
    } else {
        None
    };

    let end_span = where_clause
        .as_ref()
        .map(|w| w.span)
        .unwrap_or_else(|| state.last_span());

    Some(FilterRule {
        action,
        message_id,
        where_clause,
        span: action_token.span.merge(&end_span),
    })
}

fn parse_direction_block(state: &mut ParseState) -> Vec<FilterRule> {
    state.advance(); // "inbound" | "outbound" keyword

    if state.expect(TokenKind::LBrace, "{").is_none() {
        synchronize(state);
        return Vec::new();
    }

    let mut rules = Vec::new();
    loop {
        if state.check(TokenKind::RBrace) {
            state.advance();
            break;
        }
        if state.at_eof() || super::is_declaration_keyword(state) {
            state.expect(TokenKind::RBrace, "}");
            break;
        }
        if state.check_keyword("accept") || state.check_keyword("drop") {
            if let Some(rule) = parse_rule(state) {
                rules.push(rule);
            }
            continue;
        }
        let bad = state.peek().clone();
        state.diagnostics.push(crate::diagnostic::Diagnostic::syntax_error(
            format!("Unexpected token '{}' in filter direction block", bad.lexeme),
            bad.span,
        ));
        state.advance();
    }
    rules
}

pub fn parse_filters(state: &mut ParseState) -> Option<FilterBlock> {
    let keyword_token = state
        .eat_keyword("filters")
        .expect("caller checked check_keyword");

    if state.expect(TokenKind::LBrace, "{").is_none() {
        synchronize(state);
        return None;
    }

    let mut inbound = Vec::new();
    let mut outbound = Vec::new();
    loop {
        if state.check(TokenKind::RBrace) {
            state.advance();
            break;
        }
        if state.at_eof() || super::is_declaration_keyword(state) {
            state.expect(TokenKind::RBrace, "}");
            break;
        }
        if state.check_keyword("inbound") {
            inbound.extend(parse_direction_block(state));
            continue;
        }
        if state.check_keyword("outbound") {
            outbound.extend(parse_direction_block(state));
            continue;
        }
        let bad = state.peek().clone();
        state.diagnostics.push(crate::diagnostic::Diagnostic::syntax_error(
            format!("Unexpected token '{}' in filters block", bad.lexeme),
            bad.span,
        ));
        state.advance();
    }

    let span = keyword_token.span.merge(&state.last_span());
    Some(FilterBlock { inbound, outbound, span })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{lex, significant_tokens};

    fn state_for(src: &str) -> ParseState {
        ParseState::new(significant_tokens(&lex(src)))
    }

    #[test]
    fn test_parse_filters_with_where_clause() {
        let mut state = state_for(
            r#"filters { inbound { accept J3/2 where { npg == NPG_7 } drop J7 } }"#,
        );
        let block = parse_filters(&mut state).unwrap();
        assert_eq!(block.inbound.len(), 2);
        assert!(block.outbound.is_empty());
        assert_eq!(block.inbound[0].action, RuleAction::Accept);
        assert_eq!(block.inbound[0].message_id, "J3/2");
        let cond = &block.inbound[0].where_clause.as_ref().unwrap().condition;
        assert_eq!(cond.field, "npg");
        assert_eq!(cond.operator, TokenKind::EqualEqual);
        assert_eq!(cond.value_lexeme, "NPG_7");
        assert_eq!(block.inbound[1].action, RuleAction::Drop);
        assert!(block.inbound[1].where_clause.is_none());
    }

    #[test]
    fn test_parse_filters_outbound_only() {
        let mut state = state_for(r#"filters { outbound { accept J3/2 } }"#);
        let block = parse_filters(&mut state).unwrap();
        assert!(block.inbound.is_empty());
        assert_eq!(block.outbound.len(), 1);
    }
}
