//! Platform type records (spec.md §3). Referenced only advisorially —
//! `valid-platform-type` is a warning, not an error.

use once_cell::sync::Lazy;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy)]
pub struct PlatformType {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

const fn platform(id: &'static str, name: &'static str, description: &'static str) -> PlatformType {
    PlatformType { id, name, description }
}

pub static PLATFORM_TYPES: &[PlatformType] = &[
    platform("Ship", "Surface Ship", "Surface combatant or support vessel"),
    platform("Submarine", "Submarine", "Submerged platform"),
    platform("Aircraft", "Fixed-Wing Aircraft", "Fixed-wing airborne platform"),
    platform("Helicopter", "Rotary-Wing Aircraft", "Rotary-wing airborne platform"),
    platform("GroundStation", "Ground Station", "Fixed or mobile ground-based terminal"),
    platform("UAV", "Unmanned Aerial Vehicle", "Uncrewed airborne platform"),
];

static PLATFORM_TYPE_IDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| PLATFORM_TYPES.iter().map(|p| p.id).collect());

pub fn is_valid(id: &str) -> bool {
    PLATFORM_TYPE_IDS.contains(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ship_is_valid() {
        assert!(is_valid("Ship"));
    }

    #[test]
    fn test_unknown_platform_is_invalid() {
        assert!(!is_valid("Spaceship"));
    }
}
