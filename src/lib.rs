//! `tdl_engine`: lexer, recursive-descent parser, and spec-driven validator
//! for the Tactical Data Link topology configuration language (TDL).
//!
//! The pipeline is strictly one-way and pure: `source → tokens → AST →
//! diagnostics` (spec.md §2). Every stage is infallible — malformed input
//! yields a partial AST and a non-empty diagnostics list, never a panic or
//! an `Err`.
//!
//! ```
//! let result = tdl_engine::analyze(r#"network "X" { link: Link16 }"#);
//! assert_eq!(result.ast.networks.len(), 1);
//! ```

pub mod ast;
pub mod diagnostic;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod specdb;
pub mod validator;

use ast::Document;
use diagnostic::Diagnostic;
use lexer::Token;

/// The result of [`analyze`]: an always-present AST, the concatenated
/// parse-then-validator diagnostics, and the comment tokens filtered out of
/// the source for a host to attach as it sees fit (spec.md §4.5, §3).
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AnalysisResult {
    pub ast: Document,
    pub diagnostics: Vec<Diagnostic>,
    pub comments: Vec<Token>,
}

/// Run the full pipeline over `source`: lex, parse, then validate. Parse
/// diagnostics precede validator diagnostics in the returned list,
/// matching source-producer order (spec.md §2, §4.5).
pub fn analyze(source: &str) -> AnalysisResult {
    let all_tokens = lexer::lex(source);
    let comments = lexer::comments(&all_tokens);
    let significant = lexer::significant_tokens(&all_tokens);

    let (ast, mut diagnostics) = parser::parse(significant);
    diagnostics.extend(validator::validate(&ast));

    AnalysisResult { ast, diagnostics, comments }
}

/// Lex `source` and return its full token stream, trivia included — for
/// editor integrations that want to drive syntax highlighting directly
/// (spec.md §4.5).
pub fn tokenize(source: &str) -> Vec<Token> {
    lexer::lex(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Severity;

    #[test]
    fn test_analyze_empty_input() {
        let result = analyze("");
        assert!(result.ast.networks.is_empty());
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_analyze_concatenates_parse_then_validator_diagnostics() {
        // A syntax error (missing brace) plus a validator error
        // (no NCS), in that order.
        let result = analyze(r#"network "X" { link: Link16"#);
        assert!(result
            .diagnostics
            .iter()
            .any(|d| d.rule.is_none() && d.message.contains('}')));
        assert!(result.diagnostics.iter().any(|d| d.rule == Some("ncs-required")));
    }

    #[test]
    fn test_analyze_message_npg_mismatch_scenario() {
        let result = analyze(
            r#"network "X" { link: Link16 terminal "A" { role: NetControlStation } messages { J3/2 { enabled: true, npg: NPG_6 } } }"#,
        );
        let matches: Vec<_> = result
            .diagnostics
            .iter()
            .filter(|d| d.rule == Some("message-npg-match"))
            .collect();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].severity, Severity::Error);
    }

    #[test]
    fn test_tokenize_includes_trivia() {
        let tokens = tokenize("network \"X\" {}");
        assert!(tokens.iter().any(|t| t.kind == lexer::TokenKind::Whitespace));
    }

    #[test]
    fn test_comments_surfaced_separately_from_ast() {
        let result = analyze("-- a note\nnetwork \"X\" {}");
        assert_eq!(result.comments.len(), 1);
        assert_eq!(result.comments[0].lexeme, "-- a note");
    }
}
