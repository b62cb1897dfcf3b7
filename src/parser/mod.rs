//! Recursive-descent parser: significant tokens in, a [`Document`] and a
//! diagnostics list out. Every production takes `&mut ParseState` and is
//! tolerant of malformed input — errors are recorded, not raised, and
//! [`sync::synchronize`] resumes parsing at the next safe keyword (spec.md
//! §4.3).

mod declaration;
mod filters;
mod messages;
mod property;
mod state;
mod sync;
mod value;

use crate::ast::{Document, Network, Property};
use crate::diagnostic::Diagnostic;
use crate::lexer::{Token, TokenKind};

use property::{at_property_start, parse_property};
use state::ParseState;
use value::strip_quotes;

/// Keywords that begin a `net-body` alternative other than `property`; also
/// used to detect a missing `}` at every nesting level.
const DECLARATION_KEYWORDS: &[&str] = &[
    "network", "terminal", "net", "subnetwork", "messages", "filters",
];

fn is_declaration_keyword(state: &ParseState) -> bool {
    state.peek_kind() == TokenKind::Keyword
        && DECLARATION_KEYWORDS.contains(&state.peek().lexeme.as_str())
}

/// `net-body = property | terminal | net | subnetwork | messages | filters`.
fn parse_network_body(state: &mut ParseState, network: &mut Network) {
    loop {
        if state.check(TokenKind::RBrace) {
            state.advance();
            return;
        }
        if state.at_eof() {
            state.expect(TokenKind::RBrace, "}");
            return;
        }
        if state.check_keyword("network") {
            // A nested `network` keyword signals a missing `}` at this
            // level; leave it for the enclosing document loop.
            state.expect(TokenKind::RBrace, "}");
            return;
        }
        if state.check_keyword("terminal") {
            if let Some(terminal) = declaration::parse_terminal(state) {
                network.terminals.push(terminal);
            }
            continue;
        }
        if state.check_keyword("net") {
            if let Some(net) = declaration::parse_net(state) {
                network.nets.push(net);
            }
            continue;
        }
        if state.check_keyword("subnetwork") {
            if let Some(sub) = declaration::parse_subnetwork(state) {
                network.subnetworks.push(sub);
            }
            continue;
        }
        if state.check_keyword("messages") {
            if let Some(catalog) = messages::parse_messages(state) {
                network.messages = Some(catalog);
            }
            continue;
        }
        if state.check_keyword("filters") {
            if let Some(block) = filters::parse_filters(state) {
                network.filters = Some(block);
            }
            continue;
        }
        if at_property_start(state) {
            if let Some(property) = parse_property(state) {
                network.properties.push(property);
            }
            continue;
        }

        let bad = state.peek().clone();
        state.diagnostics.push(Diagnostic::syntax_error(
            format!("Unexpected token '{}' in network body", bad.lexeme),
            bad.span,
        ));
        state.advance();
    }
}

/// `network = "network" string "{" { net-body } "}"`.
fn parse_network(state: &mut ParseState) -> Option<Network> {
    let keyword_token = state
        .eat_keyword("network")
        .expect("caller checked check_keyword");

    let name = match state.expect(TokenKind::String, "string") {
        Some(token) => strip_quotes(&token.lexeme),
        None => "<missing>".to_string(),
    };

    if state.expect(TokenKind::LBrace, "{").is_none() {
        sync::synchronize(state);
        return None;
    }

    let mut network = Network {
        name,
        properties: Vec::<Property>::new(),
        terminals: Vec::new(),
        nets: Vec::new(),
        subnetworks: Vec::new(),
        messages: None,
        filters: None,
        span: keyword_token.span,
    };

    parse_network_body(state, &mut network);
    network.span = keyword_token.span.merge(&state.last_span());
    Some(network)
}

/// `document = { network }`. Top-level tokens that are neither `network`
/// nor `Eof` are skipped one at a time with a diagnostic, mirroring
/// [`sync::synchronize`]'s recovery shape at the document level.
fn parse_document(state: &mut ParseState) -> Document {
    let mut document = Document::new();
    while !state.at_eof() {
        if state.check_keyword("network") {
            if let Some(network) = parse_network(state) {
                document.networks.push(network);
            }
            continue;
        }
        let bad = state.peek().clone();
        state.diagnostics.push(Diagnostic::syntax_error(
            format!("Expected 'network', got '{}'", bad.lexeme),
            bad.span,
        ));
        state.advance();
    }
    document
}

/// Parse an already-filtered (trivia-free) token stream into a [`Document`]
/// plus the diagnostics accumulated along the way. Always succeeds: a
/// completely malformed input yields an empty or partial `Document` and a
/// non-empty diagnostics list rather than an error.
pub fn parse(tokens: Vec<Token>) -> (Document, Vec<Diagnostic>) {
    let mut state = ParseState::new(tokens);
    let document = parse_document(&mut state);
    log::debug!(
        "parsed {} network(s), {} diagnostic(s)",
        document.networks.len(),
        state.diagnostics.len()
    );
    (document, state.diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{lex, significant_tokens};

    fn parse_source(src: &str) -> (Document, Vec<Diagnostic>) {
        parse(significant_tokens(&lex(src)))
    }

    #[test]
    fn test_parse_empty_input_yields_empty_document() {
        let (document, diagnostics) = parse_source("");
        assert!(document.networks.is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_parse_minimal_network() {
        let (document, diagnostics) = parse_source(
            r#"
            network "Alpha" {
                link: Link16
                terminal "T1" {
                    role: NetControlStation
                    track_number: 0x001
                }
            }
            "#,
        );
        assert!(diagnostics.is_empty());
        assert_eq!(document.networks.len(), 1);
        let network = &document.networks[0];
        assert_eq!(network.name, "Alpha");
        assert_eq!(network.properties.len(), 1);
        assert_eq!(network.terminals.len(), 1);
        assert_eq!(network.terminals[0].name, "T1");
    }

    #[test]
    fn test_parse_multiple_networks() {
        let (document, diagnostics) = parse_source(
            r#"network "A" {} network "B" {}"#,
        );
        assert!(diagnostics.is_empty());
        assert_eq!(document.networks.len(), 2);
        assert_eq!(document.networks[0].name, "A");
        assert_eq!(document.networks[1].name, "B");
    }

    #[test]
    fn test_unterminated_network_recovers_with_partial_ast() {
        let (document, diagnostics) = parse_source(
            r#"network "Alpha" {
                terminal "T1" { role: Participant }
            "#,
        );
        assert_eq!(document.networks.len(), 1);
        assert_eq!(document.networks[0].terminals.len(), 1);
        assert!(diagnostics
            .iter()
            .any(|d| d.message.contains('}')));
    }

    #[test]
    fn test_document_span_covers_all_networks() {
        let (document, _) = parse_source(r#"network "A" {} network "B" {}"#);
        let span = document.span();
        assert_eq!(span.offset, 0);
    }
}
