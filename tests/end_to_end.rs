//! End-to-end scenarios against the public `analyze`/`tokenize` API,
//! including the six literal cases and the universal invariants.

use tdl_engine::diagnostic::Severity;
use tdl_engine::{analyze, tokenize};

#[test]
fn scenario_1_empty_input() {
    let result = analyze("");
    assert!(result.ast.networks.is_empty());
    assert!(result.diagnostics.is_empty());
}

#[test]
fn scenario_2_minimal_valid_link16_network() {
    let result = analyze(r#"network "X" { link: Link16 terminal "A" { role: NetControlStation } }"#);
    assert!(result.diagnostics.iter().all(|d| d.severity != Severity::Error));
    assert_eq!(result.ast.networks[0].terminals.len(), 1);
    assert!(!result.diagnostics.iter().any(|d| d.rule == Some("ppli-required")));
}

#[test]
fn scenario_3_tsdf_overflow() {
    let result = analyze(
        r#"network "X" { link: Link16 terminal "A" { role: NetControlStation } net "A" { net_number: 1, npg: NPG_9, tsdf: 60% } net "B" { net_number: 2, npg: NPG_6, tsdf: 50% } }"#,
    );
    let matches: Vec<_> = result
        .diagnostics
        .iter()
        .filter(|d| d.rule == Some("total-tsdf-budget"))
        .collect();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].severity, Severity::Error);
    assert!(matches[0].message.contains("110%"));
}

#[test]
fn scenario_4_unterminated_network_block() {
    let result = analyze(r#"network "TEST" { link: Link16"#);
    assert_eq!(result.ast.networks.len(), 1);
    assert!(result
        .diagnostics
        .iter()
        .any(|d| d.rule.is_none() && d.message.contains('}')));
}

#[test]
fn scenario_5_message_npg_mismatch() {
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
    assert!(matches[0]
        .message
        .contains("NPG_6"));
}

#[test]
fn scenario_6_link22_subnetwork_missing_controller_and_forwarding() {
    let result = analyze(
        r#"network "X" { link: Link22 subnetwork "S" { member "A" { role: Participant, unit_id: 0x1, forwarding: disabled } } }"#,
    );
    assert!(result
        .diagnostics
        .iter()
        .any(|d| d.rule == Some("link22-controller-required") && d.severity == Severity::Error));
    assert!(result
        .diagnostics
        .iter()
        .any(|d| d.rule == Some("link22-forwarding") && d.severity == Severity::Error));
}

#[test]
fn universal_invariant_spans_stay_within_source_bounds() {
    let source = r#"network "X" { link: Link16
        terminal "A" { role: NetControlStation, subscribes: [NPG_A] }
        net "N" { net_number: 1, tsdf: 40% }
    }"#;
    let result = analyze(source);
    for token in tokenize(source) {
        assert!(token.span.offset + token.span.length <= source.len());
    }
    for diagnostic in &result.diagnostics {
        assert!(diagnostic.span.offset <= source.len());
    }
}

#[test]
fn universal_invariant_comments_start_with_dashdash_and_no_newline() {
    let source = "-- hello\nnetwork \"X\" {}";
    let result = analyze(source);
    for comment in &result.comments {
        assert!(comment.lexeme.starts_with("--"));
        assert!(!comment.lexeme.contains('\n'));
    }
}

#[test]
fn universal_invariant_zero_ncs_terminals_yields_exactly_one_error() {
    let result = analyze(r#"network "X" { link: Link16 terminal "A" { role: Participant } }"#);
    let ncs_errors: Vec<_> = result
        .diagnostics
        .iter()
        .filter(|d| d.rule == Some("ncs-required"))
        .collect();
    assert_eq!(ncs_errors.len(), 1);
}

#[test]
fn tokenize_is_total_for_malformed_input() {
    // tokenize never panics, even on input the parser would reject outright.
    let tokens = tokenize("network @@@ { !!! }");
    assert!(tokens.iter().any(|t| t.kind == tdl_engine::lexer::TokenKind::Unknown));
}
