//! The shared `keyword string "{" ... "}"` shape behind `terminal`, `net`,
//! `subnetwork` and `member` (spec.md §4.3). Each wraps [`parse_body`] with
//! its own per-item dispatcher and AST constructor.

use crate::ast::{Member, Net, Property, Subnetwork, Terminal};
use crate::lexer::TokenKind;

use super::property::{at_property_start, parse_property};
use super::state::ParseState;
use super::sync::synchronize;
use super::value::strip_quotes;

/// Consume `keyword "name" {`, returning the keyword token's span and the
/// declared name, or `None` if the opening brace never arrived (the caller
/// has already been synchronized past the failed declaration).
fn parse_header(state: &mut ParseState, keyword: &str) -> Option<(crate::span::Span, String)> {
    let keyword_token = state.eat_keyword(keyword).expect("caller checked check_keyword");

    let name = match state.expect(TokenKind::String, "string") {
        Some(token) => strip_quotes(&token.lexeme),
        None => "<missing>".to_string(),
    };

    if state.expect(TokenKind::LBrace, "{").is_none() {
        synchronize(state);
        return None;
    }

    Some((keyword_token.span, name))
}

/// Parse a `{ property* }` body, closing on `}`, `Eof`, or a declaration
/// keyword (treated as a missing `}` and left for the caller).
fn parse_property_body(state: &mut ParseState) -> Vec<Property> {
    let mut properties = Vec::new();
    loop {
        if state.check(TokenKind::RBrace) {
            state.advance();
            break;
        }
        if state.at_eof() || super::is_declaration_keyword(state) {
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
            format!("Unexpected token '{}' in declaration body", bad.lexeme),
            bad.span,
        ));
        state.advance();
    }
    properties
}

pub fn parse_terminal(state: &mut ParseState) -> Option<Terminal> {
    let (start, name) = parse_header(state, "terminal")?;
    let properties = parse_property_body(state);
    let span = start.merge(&state.last_span());
    Some(Terminal { name, properties, span })
}

pub fn parse_net(state: &mut ParseState) -> Option<Net> {
    let (start, name) = parse_header(state, "net")?;
    let properties = parse_property_body(state);
    let span = start.merge(&state.last_span());
    Some(Net { name, properties, span })
}

pub fn parse_member(state: &mut ParseState) -> Option<Member> {
    let (start, name) = parse_header(state, "member")?;
    let properties = parse_property_body(state);
    let span = start.merge(&state.last_span());
    Some(Member { name, properties, span })
}

/// `subnetwork = "subnetwork" string "{" { property | member } "}"`.
pub fn parse_subnetwork(state: &mut ParseState) -> Option<Subnetwork> {
    let (start, name) = parse_header(state, "subnetwork")?;

    let mut properties = Vec::new();
    let mut members = Vec::new();
    loop {
        if state.check(TokenKind::RBrace) {
            state.advance();
            break;
        }
        if state.at_eof() || super::is_declaration_keyword(state) {
            state.expect(TokenKind::RBrace, "}");
            break;
        }
        if state.check_keyword("member") {
            if let Some(member) = parse_member(state) {
                members.push(member);
            }
            continue;
        }
        if at_property_start(state) {
            if let Some(property) = parse_property(state) {
                properties.push(property);
            }
            continue;
        }
        let bad = state.peek().clone();
        state.diagnostics.push(crate::diagnostic::Diagnostic::syntax_error(
            format!("Unexpected token '{}' in subnetwork body", bad.lexeme),
            bad.span,
        ));
        state.advance();
    }

    let span = start.merge(&state.last_span());
    Some(Subnetwork { name, properties, members, span })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{lex, significant_tokens};

    fn state_for(src: &str) -> ParseState {
        ParseState::new(significant_tokens(&lex(src)))
    }

    #[test]
    fn test_parse_terminal_with_properties() {
        let mut state = state_for(r#"terminal "T1" { platform_type: Ship, role: Participant }"#);
        let terminal = parse_terminal(&mut state).unwrap();
        assert_eq!(terminal.name, "T1");
        assert_eq!(terminal.properties.len(), 2);
    }

    #[test]
    fn test_parse_terminal_missing_name_uses_placeholder() {
        let mut state = state_for("terminal { role: Participant }");
        let terminal = parse_terminal(&mut state).unwrap();
        assert_eq!(terminal.name, "<missing>");
        assert_eq!(terminal.properties.len(), 1);
        assert_eq!(state.diagnostics.len(), 1);
    }

    #[test]
    fn test_parse_terminal_missing_brace_synchronizes_and_yields_none() {
        let mut state = state_for("terminal \"T1\" net \"N1\" {}");
        assert!(parse_terminal(&mut state).is_none());
        assert!(state.check_keyword("net"));
    }

    #[test]
    fn test_parse_subnetwork_with_member() {
        let mut state = state_for(
            r#"subnetwork "S1" { data_rate: High, member "M1" { unit_id: 0x3 } }"#,
        );
        let sub = parse_subnetwork(&mut state).unwrap();
        assert_eq!(sub.name, "S1");
        assert_eq!(sub.properties.len(), 1);
        assert_eq!(sub.members.len(), 1);
        assert_eq!(sub.members[0].name, "M1");
    }
}
