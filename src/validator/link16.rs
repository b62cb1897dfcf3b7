//! Level-3 Link-16 rule catalog (spec.md §4.4), run only on networks whose
//! `link` property resolves to `Link16`.

use crate::ast::{property, Network, Spanned, Terminal};
use crate::diagnostic::{Diagnostic, Severity};
use crate::specdb::{npg, platform_type, role};

pub fn ncs_required(network: &Network, out: &mut Vec<Diagnostic>) {
    let ncs: Vec<&Terminal> = network
        .terminals
        .iter()
        .filter(|t| property::get_identifier(&t.properties, "role") == Some("NetControlStation"))
        .collect();

    match ncs.len() {
        0 => out.push(Diagnostic::rule(
            Severity::Error,
            "ncs-required",
            format!("network '{}' has no NetControlStation terminal", network.name),
            network.span(),
        )),
        1 => {}
        _ => {
            for extra in ncs.into_iter().skip(1) {
                out.push(Diagnostic::rule(
                    Severity::Error,
                    "ncs-required",
                    format!("terminal '{}' is an additional NetControlStation", extra.name),
                    extra.span(),
                ));
            }
        }
    }
}

pub fn valid_role(network: &Network, out: &mut Vec<Diagnostic>) {
    for terminal in &network.terminals {
        let Some(prop) = property::get(&terminal.properties, "role") else {
            continue;
        };
        if let Some(id) = prop.value.as_identifier() {
            if !role::is_valid_link16_role(id) {
                out.push(Diagnostic::rule(
                    Severity::Error,
                    "valid-role",
                    format!("'{id}' is not a declared Link-16 role"),
                    prop.span,
                ));
            }
        }
    }
}

pub fn valid_platform_type(network: &Network, out: &mut Vec<Diagnostic>) {
    for terminal in &network.terminals {
        let Some(prop) = property::get(&terminal.properties, "platform_type") else {
            continue;
        };
        if let Some(id) = prop.value.as_identifier() {
            if !platform_type::is_valid(id) {
                out.push(Diagnostic::rule(
                    Severity::Warning,
                    "valid-platform-type",
                    format!("'{id}' is not a declared platform type"),
                    prop.span,
                ));
            }
        }
    }
}

pub fn valid_track_number(network: &Network, out: &mut Vec<Diagnostic>) {
    for terminal in &network.terminals {
        let Some(prop) = property::get(&terminal.properties, "track_number") else {
            continue;
        };
        if let Some(value) = prop.value.as_number() {
            if !(0.0..=77777.0).contains(&value) {
                out.push(Diagnostic::rule(
                    Severity::Error,
                    "valid-track-number",
                    format!("track_number {value} is outside the range 0..=77777"),
                    prop.span,
                ));
            }
        }
    }
}

pub fn valid_net_number(network: &Network, out: &mut Vec<Diagnostic>) {
    for net in &network.nets {
        let Some(prop) = property::get(&net.properties, "net_number") else {
            continue;
        };
        if let Some(value) = prop.value.as_number() {
            if !(0.0..=127.0).contains(&value) {
                out.push(Diagnostic::rule(
                    Severity::Error,
                    "valid-net-number",
                    format!("net_number {value} is outside the range 0..=127"),
                    prop.span,
                ));
            }
        }
    }
}

pub fn valid_tsdf(network: &Network, out: &mut Vec<Diagnostic>) {
    for net in &network.nets {
        let Some(prop) = property::get(&net.properties, "tsdf") else {
            continue;
        };
        if let Some(value) = prop.value.as_number() {
            if !(0.0..=100.0).contains(&value) {
                out.push(Diagnostic::rule(
                    Severity::Error,
                    "valid-tsdf",
                    format!("tsdf {value}% is outside the range 0..=100"),
                    prop.span,
                ));
            }
        }
    }
}

pub fn total_tsdf_budget(network: &Network, out: &mut Vec<Diagnostic>) {
    let total: f64 = network
        .nets
        .iter()
        .filter_map(|net| property::get(&net.properties, "tsdf"))
        .filter_map(|prop| prop.value.as_number())
        .sum();

    if total > 100.0 {
        out.push(Diagnostic::rule(
            Severity::Error,
            "total-tsdf-budget",
            format!("total tsdf across network '{}' is {total}%, exceeding 100%", network.name),
            network.span(),
        ));
    } else if total > 90.0 {
        out.push(Diagnostic::rule(
            Severity::Warning,
            "total-tsdf-budget",
            format!("total tsdf across network '{}' is {total}%, approaching the 100% budget", network.name),
            network.span(),
        ));
    }
}

pub fn stacking_consistency(network: &Network, out: &mut Vec<Diagnostic>) {
    for net in &network.nets {
        let stacked = property::get(&net.properties, "stacked")
            .and_then(|p| p.value.as_boolean())
            .unwrap_or(false);
        let level_prop = property::get(&net.properties, "stacking_level");

        if stacked {
            match level_prop {
                None => out.push(Diagnostic::rule(
                    Severity::Error,
                    "stacking-consistency",
                    format!("net '{}' is stacked but has no stacking_level", net.name),
                    net.span(),
                )),
                Some(prop) => {
                    if let Some(level) = prop.value.as_number() {
                        if level != 2.0 && level != 4.0 {
                            out.push(Diagnostic::rule(
                                Severity::Error,
                                "stacking-consistency",
                                format!("stacking_level {level} must be exactly 2 or 4"),
                                prop.span,
                            ));
                        }
                    }
                }
            }
        } else if let Some(prop) = level_prop {
            out.push(Diagnostic::rule(
                Severity::Warning,
                "stacking-consistency",
                format!("net '{}' declares stacking_level without stacked: true", net.name),
                prop.span,
            ));
        }
    }
}

pub fn npg_subscriber_coverage(network: &Network, out: &mut Vec<Diagnostic>) {
    for (index, terminal) in network.terminals.iter().enumerate() {
        let Some(prop) = property::get(&terminal.properties, "transmits") else {
            continue;
        };
        let Some(transmitted) = prop.value.as_array() else {
            continue;
        };

        for npg_id in transmitted {
            let covered = network
                .terminals
                .iter()
                .enumerate()
                .filter(|(other, _)| *other != index)
                .any(|(_, other)| {
                    property::get(&other.properties, "subscribes")
                        .and_then(|p| p.value.as_array())
                        .is_some_and(|ids| ids.iter().any(|id| id == npg_id))
                });

            if !covered {
                out.push(Diagnostic::rule(
                    Severity::Warning,
                    "npg-subscriber-coverage",
                    format!("no other terminal subscribes to '{npg_id}', transmitted by '{}'", terminal.name),
                    prop.span,
                ));
            }
        }
    }
}

pub fn ppli_required(network: &Network, out: &mut Vec<Diagnostic>) {
    for terminal in &network.terminals {
        let Some(prop) = property::get(&terminal.properties, "subscribes") else {
            continue;
        };
        let Some(ids) = prop.value.as_array() else {
            continue;
        };
        if !ids.iter().any(|id| id == "NPG_A" || id == "NPG_B") {
            out.push(Diagnostic::rule(
                Severity::Warning,
                "ppli-required",
                format!("terminal '{}' subscribes to neither NPG_A nor NPG_B", terminal.name),
                prop.span,
            ));
        }
    }
}

fn check_npg_array(name: &str, ids: &[String], span: crate::span::Span, out: &mut Vec<Diagnostic>) {
    for id in ids {
        if !npg::is_valid(id) {
            out.push(Diagnostic::rule(
                Severity::Error,
                "valid-npg-reference",
                format!("'{id}' in {name} is not a declared NPG"),
                span,
            ));
        }
    }
}

pub fn valid_npg_reference(network: &Network, out: &mut Vec<Diagnostic>) {
    for terminal in &network.terminals {
        for key in ["subscribes", "transmits"] {
            if let Some(prop) = property::get(&terminal.properties, key) {
                if let Some(ids) = prop.value.as_array() {
                    check_npg_array(key, ids, prop.span, out);
                }
            }
        }
    }

    for net in &network.nets {
        if let Some(prop) = property::get(&net.properties, "npg") {
            if let Some(id) = prop.value.as_identifier() {
                if !npg::is_valid(id) {
                    out.push(Diagnostic::rule(
                        Severity::Error,
                        "valid-npg-reference",
                        format!("'{id}' in net's npg property is not a declared NPG"),
                        prop.span,
                    ));
                }
            }
        }
    }
}

pub fn valid_j_message_reference(network: &Network, out: &mut Vec<Diagnostic>) {
    let Some(catalog) = &network.messages else {
        return;
    };
    for entry in &catalog.entries {
        if !crate::specdb::jmessage::is_valid(&entry.message_id) {
            out.push(Diagnostic::rule(
                Severity::Error,
                "valid-j-message-reference",
                format!("'{}' is not a declared J-message", entry.message_id),
                entry.span(),
            ));
        }
    }
}

pub fn message_npg_match(network: &Network, out: &mut Vec<Diagnostic>) {
    let Some(catalog) = &network.messages else {
        return;
    };
    for entry in &catalog.entries {
        let Some(record) = crate::specdb::jmessage::lookup(&entry.message_id) else {
            continue;
        };
        let Some(prop) = property::get(&entry.properties, "npg") else {
            continue;
        };
        let Some(id) = prop.value.as_identifier() else {
            continue;
        };
        if !record.valid_npgs.contains(&id) {
            out.push(
                Diagnostic::rule(
                    Severity::Error,
                    "message-npg-match",
                    format!("'{}' is not a valid NPG for message '{}'", id, entry.message_id),
                    entry.span(),
                )
                .with_spec_ref(record.spec_ref),
            );
        }
    }
}

pub fn participant_reference(network: &Network, out: &mut Vec<Diagnostic>) {
    for net in &network.nets {
        let Some(prop) = property::get(&net.properties, "participants") else {
            continue;
        };
        let Some(names) = prop.value.as_array() else {
            continue;
        };
        for name in names {
            if !network.terminals.iter().any(|t| &t.name == name) {
                out.push(Diagnostic::rule(
                    Severity::Error,
                    "participant-reference",
                    format!("'{name}' in net '{}' participants does not name a declared terminal", net.name),
                    prop.span,
                ));
            }
        }
    }
}

pub fn required_property(network: &Network, out: &mut Vec<Diagnostic>) {
    for terminal in &network.terminals {
        if property::get(&terminal.properties, "role").is_none() {
            out.push(Diagnostic::rule(
                Severity::Warning,
                "required-property",
                format!("terminal '{}' has no role", terminal.name),
                terminal.span(),
            ));
        }
    }
    for net in &network.nets {
        if property::get(&net.properties, "net_number").is_none() {
            out.push(Diagnostic::rule(
                Severity::Warning,
                "required-property",
                format!("net '{}' has no net_number", net.name),
                net.span(),
            ));
        }
    }
}
