//! Network Participation Group records (spec.md §3, §6).

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub struct Npg {
    pub id: &'static str,
    pub name: &'static str,
    pub number: u32,
    pub description: &'static str,
    pub valid_messages: &'static [&'static str],
    pub spec_ref: &'static str,
}

macro_rules! npg {
    ($id:expr, $name:expr, $number:expr, $desc:expr, [$($msg:expr),* $(,)?]) => {
        Npg {
            id: $id,
            name: $name,
            number: $number,
            description: $desc,
            valid_messages: &[$($msg),*],
            spec_ref: "MIL-STD-6016 Appendix B",
        }
    };
}

/// The fixed NPG roster: `NPG_A`, `NPG_B`, and the numbered network
/// participation groups `NPG_2` through `NPG_27`.
static NPGS: Lazy<Vec<Npg>> = Lazy::new(|| {
    vec![
        npg!("NPG_A", "Initial Entry", 0, "Initial network entry", []),
        npg!("NPG_B", "RTT/PPLI Reply", 1, "Round-trip timing and PPLI reply", []),
        npg!("NPG_2", "Network Management", 2, "Network management and control", ["J7/0", "J7/1"]),
        npg!("NPG_3", "PPLI", 3, "Precise participant location and identification", ["J2/2", "J2/3", "J2/5"]),
        npg!("NPG_4", "Air Control", 4, "Air control orders", ["J3/0", "J3/1"]),
        npg!("NPG_5", "Fighter-to-Fighter", 5, "Fighter-to-fighter data", ["J6/0"]),
        npg!("NPG_6", "Surveillance", 6, "Surveillance track reports", ["J3/5"]),
        npg!("NPG_7", "Mission Management", 7, "Mission management / weapons coordination", ["J3/2", "J3/3"]),
        npg!("NPG_8", "Weapons Coordination", 8, "Weapons coordination and management", ["J9/0"]),
        npg!("NPG_9", "Control", 9, "Net and unit control", ["J3/2", "J12/0"]),
        npg!("NPG_10", "Secure Voice A", 10, "Secure digital voice channel A", []),
        npg!("NPG_11", "Secure Voice B", 11, "Secure digital voice channel B", []),
        npg!("NPG_12", "Intelligence Broadcast", 12, "Intelligence broadcast", ["J13/0"]),
        npg!("NPG_13", "Net Test", 13, "Net test messages", []),
        npg!("NPG_14", "Net Control", 14, "Net control", ["J7/0"]),
        npg!("NPG_15", "Air-to-Air Mission", 15, "Air-to-air mission management", ["J3/2"]),
        npg!("NPG_16", "ADSI", 16, "Air defense systems integration", ["J28/0"]),
        npg!("NPG_17", "Surface Surveillance", 17, "Surface and subsurface surveillance", ["J3/5"]),
        npg!("NPG_18", "Land Point", 18, "Land point track reports", ["J3/5"]),
        npg!("NPG_19", "Electronic Warfare", 19, "Electronic warfare reports", ["J12/0"]),
        npg!("NPG_20", "Information Management", 20, "Information management", []),
        npg!("NPG_21", "IFF", 21, "Identification friend or foe", ["J2/5"]),
        npg!("NPG_22", "Voice Relay", 22, "Relayed voice traffic", []),
        npg!("NPG_23", "Precise Time", 23, "Precise participant time", ["J2/2"]),
        npg!("NPG_24", "Tactical Track", 24, "General tactical track management", ["J3/5"]),
        npg!("NPG_25", "Experimental", 25, "Reserved for experimentation", []),
        npg!("NPG_26", "Imagery", 26, "Imagery data", []),
        npg!("NPG_27", "Weapon Status", 27, "Weapon status reporting", ["J9/0"]),
    ]
});

static NPG_BY_ID: Lazy<HashMap<&'static str, &'static Npg>> =
    Lazy::new(|| NPGS.iter().map(|n| (n.id, n)).collect());

pub static NPG_IDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| NPGS.iter().map(|n| n.id).collect());

pub fn lookup(id: &str) -> Option<&'static Npg> {
    NPG_BY_ID.get(id).copied()
}

pub fn is_valid(id: &str) -> bool {
    NPG_IDS.contains(id)
}
