//! Level-3 Link-22 rule catalog (spec.md §4.4), run only on networks whose
//! `link` property resolves to `Link22`.

use std::collections::HashMap;

use crate::ast::{property, Network, Spanned};
use crate::diagnostic::{Diagnostic, Severity};
use crate::specdb::{enums, role};

pub fn valid_role(network: &Network, out: &mut Vec<Diagnostic>) {
    for sub in &network.subnetworks {
        for member in &sub.members {
            let Some(prop) = property::get(&member.properties, "role") else {
                continue;
            };
            if let Some(id) = prop.value.as_identifier() {
                if !role::is_valid_link22_role(id) {
                    out.push(Diagnostic::rule(
                        Severity::Error,
                        "valid-role",
                        format!("'{id}' is not a declared Link-22 role"),
                        prop.span,
                    ));
                }
            }
        }
    }
}

pub fn valid_operating_mode(network: &Network, out: &mut Vec<Diagnostic>) {
    for sub in &network.subnetworks {
        let Some(prop) = property::get(&sub.properties, "operating_mode") else {
            continue;
        };
        if let Some(id) = prop.value.as_identifier() {
            if !enums::is_valid_operating_mode(id) {
                out.push(Diagnostic::rule(
                    Severity::Error,
                    "valid-operating-mode",
                    format!("'{id}' is not a declared operating mode"),
                    prop.span,
                ));
            }
        }
    }
}

pub fn valid_data_rate(network: &Network, out: &mut Vec<Diagnostic>) {
    for sub in &network.subnetworks {
        let Some(prop) = property::get(&sub.properties, "data_rate") else {
            continue;
        };
        if let Some(id) = prop.value.as_identifier() {
            if !enums::is_valid_data_rate(id) {
                out.push(Diagnostic::rule(
                    Severity::Error,
                    "valid-data-rate",
                    format!("'{id}' is not a declared data rate"),
                    prop.span,
                ));
            }
        }
    }
}

pub fn valid_unit_id(network: &Network, out: &mut Vec<Diagnostic>) {
    for sub in &network.subnetworks {
        for member in &sub.members {
            let Some(prop) = property::get(&member.properties, "unit_id") else {
                continue;
            };
            if prop.value.as_hex().is_none() {
                out.push(Diagnostic::rule(
                    Severity::Error,
                    "valid-unit-id",
                    format!("member '{}' unit_id must be a hex literal", member.name),
                    prop.span,
                ));
            }
        }
    }
}

pub fn valid_forwarding(network: &Network, out: &mut Vec<Diagnostic>) {
    for sub in &network.subnetworks {
        for member in &sub.members {
            let Some(prop) = property::get(&member.properties, "forwarding") else {
                continue;
            };
            if let Some(id) = prop.value.as_identifier() {
                if id != "enabled" && id != "disabled" {
                    out.push(Diagnostic::rule(
                        Severity::Error,
                        "valid-forwarding",
                        format!("forwarding must be 'enabled' or 'disabled', got '{id}'"),
                        prop.span,
                    ));
                }
            }
        }
    }
}

pub fn link22_controller_required(network: &Network, out: &mut Vec<Diagnostic>) {
    for sub in &network.subnetworks {
        let has_controller = sub.members.iter().any(|m| {
            property::get_identifier(&m.properties, "role") == Some("Controller")
        });
        if !has_controller {
            out.push(Diagnostic::rule(
                Severity::Error,
                "link22-controller-required",
                format!("subnetwork '{}' has no member with role: Controller", sub.name),
                sub.span(),
            ));
        }
    }
}

pub fn link22_forwarding(network: &Network, out: &mut Vec<Diagnostic>) {
    for sub in &network.subnetworks {
        if sub.members.is_empty() {
            continue;
        }
        let has_forwarding = sub.members.iter().any(|m| {
            property::get_identifier(&m.properties, "forwarding") == Some("enabled")
        });
        if !has_forwarding {
            out.push(Diagnostic::rule(
                Severity::Error,
                "link22-forwarding",
                format!("subnetwork '{}' has no member with forwarding: enabled", sub.name),
                sub.span(),
            ));
        }
    }
}

pub fn unit_id_uniqueness(network: &Network, out: &mut Vec<Diagnostic>) {
    let mut seen: HashMap<String, &str> = HashMap::new();
    for sub in &network.subnetworks {
        for member in &sub.members {
            let Some(unit_id) = property::get(&member.properties, "unit_id")
                .and_then(|p| p.value.as_hex())
            else {
                continue;
            };
            match seen.get(unit_id) {
                Some(existing) if *existing != member.name => {
                    out.push(Diagnostic::rule(
                        Severity::Warning,
                        "unit-id-uniqueness",
                        format!(
                            "unit_id {unit_id} is shared by members '{existing}' and '{}'",
                            member.name
                        ),
                        member.span(),
                    ));
                }
                _ => {
                    seen.insert(unit_id.to_string(), &member.name);
                }
            }
        }
    }
}

pub fn required_property(network: &Network, out: &mut Vec<Diagnostic>) {
    for sub in &network.subnetworks {
        for member in &sub.members {
            if property::get(&member.properties, "role").is_none() {
                out.push(Diagnostic::rule(
                    Severity::Warning,
                    "required-property",
                    format!("member '{}' has no role", member.name),
                    member.span(),
                ));
            }
            if property::get(&member.properties, "unit_id").is_none() {
                out.push(Diagnostic::rule(
                    Severity::Warning,
                    "required-property",
                    format!("member '{}' has no unit_id", member.name),
                    member.span(),
                ));
            }
        }
    }
}
