use crate::lexer::TokenKind;

use super::state::ParseState;

/// Keywords that begin a top-level-shaped declaration; a safe place to
/// resume parsing after a syntax error (spec.md §4.3).
const SYNC_KEYWORDS: &[&str] = &["network", "terminal", "net", "subnetwork", "messages", "filters"];

/// Advance past tokens until a `}` (consumed) or one of [`SYNC_KEYWORDS`]
/// (left for the caller) or `Eof` is reached.
pub fn synchronize(state: &mut ParseState) {
    loop {
        if state.at_eof() {
            return;
        }
        if state.check(TokenKind::RBrace) {
            state.advance();
            return;
        }
        if state.peek_kind() == TokenKind::Keyword
            && SYNC_KEYWORDS.contains(&state.peek().lexeme.as_str())
        {
            return;
        }
        state.advance();
    }
}
