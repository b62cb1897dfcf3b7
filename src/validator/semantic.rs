//! Level-2 semantic rules: run on every network regardless of link type
//! (spec.md §4.4).

use std::collections::HashMap;

use crate::ast::{property, Network, Spanned};
use crate::diagnostic::{Diagnostic, Severity};
use crate::specdb::enums;

pub fn valid_link_type(network: &Network, out: &mut Vec<Diagnostic>) {
    if let Some(prop) = property::get(&network.properties, "link") {
        if let Some(link) = prop.value.as_identifier() {
            if !enums::is_valid_link_type(link) {
                out.push(Diagnostic::rule(
                    Severity::Error,
                    "valid-link-type",
                    format!("'{link}' is not a valid link type (expected Link16 or Link22)"),
                    prop.span,
                ));
            }
        }
    }
}

pub fn valid_classification(network: &Network, out: &mut Vec<Diagnostic>) {
    if let Some(prop) = property::get(&network.properties, "classification") {
        if let Some(classification) = prop.value.as_identifier() {
            if !enums::is_valid_classification(classification) {
                out.push(Diagnostic::rule(
                    Severity::Error,
                    "valid-classification",
                    format!("'{classification}' is not a declared classification level"),
                    prop.span,
                ));
            }
        }
    }
}

/// Returns the link type declared on `network.link`, if any and if valid;
/// used by the dispatcher to decide which link-specific rule set to run.
pub fn link_type(network: &Network) -> Option<&str> {
    property::get_identifier(&network.properties, "link")
}

pub fn track_number_uniqueness(network: &Network, out: &mut Vec<Diagnostic>) {
    let mut seen: HashMap<u64, ()> = HashMap::new();
    for terminal in &network.terminals {
        let Some(prop) = property::get(&terminal.properties, "track_number") else {
            continue;
        };
        let Some(value) = prop.value.as_number() else {
            continue;
        };
        let key = value.to_bits();
        if seen.insert(key, ()).is_some() {
            out.push(Diagnostic::rule(
                Severity::Error,
                "track-number-uniqueness",
                format!("duplicate track_number {value} within network '{}'", network.name),
                terminal.span(),
            ));
        }
    }
}

pub fn net_number_uniqueness(network: &Network, out: &mut Vec<Diagnostic>) {
    let mut seen: HashMap<u64, ()> = HashMap::new();
    for net in &network.nets {
        let Some(prop) = property::get(&net.properties, "net_number") else {
            continue;
        };
        let Some(value) = prop.value.as_number() else {
            continue;
        };
        let key = value.to_bits();
        if seen.insert(key, ()).is_some() {
            out.push(Diagnostic::rule(
                Severity::Error,
                "net-number-uniqueness",
                format!("duplicate net_number {value} within network '{}'", network.name),
                net.span(),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{lex, significant_tokens};
    use crate::parser::parse;

    fn network_from(src: &str) -> Network {
        let (document, _) = parse(significant_tokens(&lex(src)));
        document.networks.into_iter().next().unwrap()
    }

    #[test]
    fn test_valid_link_type_accepts_link16() {
        let network = network_from(r#"network "X" { link: Link16 }"#);
        let mut out = Vec::new();
        valid_link_type(&network, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_valid_link_type_rejects_unknown() {
        let network = network_from(r#"network "X" { link: LinkZero }"#);
        let mut out = Vec::new();
        valid_link_type(&network, &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].rule, Some("valid-link-type"));
    }

    #[test]
    fn test_track_number_uniqueness_flags_second_occurrence() {
        let network = network_from(
            r#"network "X" {
                terminal "A" { track_number: 1400 }
                terminal "B" { track_number: 1400 }
            }"#,
        );
        let mut out = Vec::new();
        track_number_uniqueness(&network, &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].rule, Some("track-number-uniqueness"));
    }

    #[test]
    fn test_net_number_uniqueness_allows_distinct_numbers() {
        let network = network_from(
            r#"network "X" {
                net "A" { net_number: 1 }
                net "B" { net_number: 2 }
            }"#,
        );
        let mut out = Vec::new();
        net_number_uniqueness(&network, &mut out);
        assert!(out.is_empty());
    }
}
