//! Link-16 and Link-22 role records (spec.md §3, §6).

use once_cell::sync::Lazy;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy)]
pub struct Role {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub spec_ref: &'static str,
}

const fn role(id: &'static str, name: &'static str, description: &'static str) -> Role {
    Role { id, name, description, spec_ref: "MIL-STD-6016 §5.3" }
}

pub static LINK16_ROLES: &[Role] = &[
    role("NetControlStation", "Net Control Station", "Designated controller of a Link-16 network"),
    role("Participant", "Participant", "A standard network participant"),
    role("ForwardTell", "Forward Tell", "Relays track data to a non-participating system"),
    role("Relay", "Relay", "Extends network range by relaying PPLI and track data"),
];

pub static LINK22_ROLES: &[Role] = &[
    role("Controller", "Controller", "Designated controller of a Link-22 subnetwork"),
    role("Participant", "Participant", "A standard subnetwork participant"),
];

static LINK16_ROLE_IDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| LINK16_ROLES.iter().map(|r| r.id).collect());

static LINK22_ROLE_IDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| LINK22_ROLES.iter().map(|r| r.id).collect());

pub fn is_valid_link16_role(id: &str) -> bool {
    LINK16_ROLE_IDS.contains(id)
}

pub fn is_valid_link22_role(id: &str) -> bool {
    LINK22_ROLE_IDS.contains(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ncs_is_a_link16_role() {
        assert!(is_valid_link16_role("NetControlStation"));
    }

    #[test]
    fn test_controller_is_link22_only() {
        assert!(is_valid_link22_role("Controller"));
        assert!(!is_valid_link16_role("Controller"));
    }

    #[test]
    fn test_participant_valid_in_both() {
        assert!(is_valid_link16_role("Participant"));
        assert!(is_valid_link22_role("Participant"));
    }
}
