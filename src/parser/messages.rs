//! `messages = "messages" "{" { msg-entry } "}"`,
//! `msg-entry = j-message "{" { property } "}"` (spec.md §4.3).

use crate::ast::{MessageCatalog, MessageEntry};
use crate::lexer::TokenKind;

use super::property::{at_property_start, parse_property};
use super::state::ParseState;

fn parse_entry(state: &mut ParseState) -> Option<MessageEntry> {
    let id_token = state.peek().clone();
    if id_token.kind != TokenKind::JMessage {
        let bad = state.advance();
        state.diagnostics.push(crate::diagnostic::Diagnostic::syntax_error(
            format!("Expected a J-message id, got '{}'", bad.lexeme),
            bad.span,
        ));
        return None;
    }
    state.advance();

    if state.expect(TokenKind::LBrace, "{").is_none() {
        super::sync::synchronize(state);
        return None;
    }

    let mut properties = Vec::new();
    loop {
        if state.check(TokenKind::RBrace) {
            state.advance();
            break;
        }
        if state.at_eof() {
            state.expect(TokenKind::RBrace, "}");
            break;
        }
        if at_property_start(state) {
            if let Some(property) = parse_property(state) {
                properties.push(property);
            }
            continue;
        }
        let bad = state.peek().clone();
        state.diagnostics.push(crate::diagnostic::Diagnostic::syntax_error(
            format!("Unexpected token '{}' in message entry body", bad.lexeme),
            bad.span,
        ));
        state.advance();
    }

    let span = id_token.span.merge(&state.last_span());
    Some(MessageEntry {
        message_id: id_token.lexeme,
        properties,
        span,
    })
}

pub fn parse_messages(state: &mut ParseState) -> Option<MessageCatalog> {
    let keyword_token = state
        .eat_keyword("messages")
        .expect("caller checked check_keyword");

    if state.expect(TokenKind::LBrace, "{").is_none() {
        super::sync::synchronize(state);
        return None;
    }

    let mut entries = Vec::new();
    loop {
        if state.check(TokenKind::RBrace) {
            state.advance();
            break;
        }
        if state.at_eof() || super::is_declaration_keyword(state) {
            state.expect(TokenKind::RBrace, "}");
            break;
        }
        if state.check(TokenKind::JMessage) {
            if let Some(entry) = parse_entry(state) {
                entries.push(entry);
            }
            continue;
        }
        let bad = state.peek().clone();
        state.diagnostics.push(crate::diagnostic::Diagnostic::syntax_error(
            format!("Unexpected token '{}' in messages block", bad.lexeme),
            bad.span,
        ));
        state.advance();
    }

    let span = keyword_token.span.merge(&state.last_span());
    Some(MessageCatalog { entries, span })
}
