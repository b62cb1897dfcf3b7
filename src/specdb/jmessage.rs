//! J-series message records (spec.md §3, §6, §8 scenario 5).

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub struct JMessage {
    pub id: &'static str,
    pub name: &'static str,
    pub functional_area: &'static str,
    pub description: &'static str,
    pub fields: &'static [&'static str],
    pub valid_npgs: &'static [&'static str],
    pub spec_ref: &'static str,
}

macro_rules! jmsg {
    ($id:expr, $name:expr, $area:expr, $desc:expr, [$($field:expr),* $(,)?], [$($npg:expr),* $(,)?]) => {
        JMessage {
            id: $id,
            name: $name,
            functional_area: $area,
            description: $desc,
            fields: &[$($field),*],
            valid_npgs: &[$($npg),*],
            spec_ref: "MIL-STD-6016 Appendix B J-series",
        }
    };
}

static JMESSAGES: Lazy<Vec<JMessage>> = Lazy::new(|| {
    vec![
        jmsg!("J2/2", "PPLI (Air)", "PPLI", "Air platform PPLI report", ["track_number", "position"], ["NPG_3", "NPG_23"]),
        jmsg!("J2/3", "PPLI (Surface)", "PPLI", "Surface platform PPLI report", ["track_number", "position"], ["NPG_3"]),
        jmsg!("J2/5", "PPLI (Land)", "PPLI", "Land point PPLI report", ["track_number", "position"], ["NPG_3", "NPG_21"]),
        jmsg!("J3/0", "Air Control", "Control", "Air control order", ["track_number", "vector"], ["NPG_4"]),
        jmsg!("J3/1", "Air Control Status", "Control", "Air control status", ["track_number"], ["NPG_4"]),
        jmsg!("J3/2", "Track Management", "Surveillance", "Track management / correlation", ["track_number", "quality"], ["NPG_7", "NPG_9", "NPG_15"]),
        jmsg!("J3/3", "Track Management (Engagement)", "Surveillance", "Track engagement status", ["track_number"], ["NPG_7"]),
        jmsg!("J3/5", "Surveillance Track", "Surveillance", "General surveillance track report", ["track_number", "position", "quality"], ["NPG_6", "NPG_17", "NPG_18", "NPG_24"]),
        jmsg!("J6/0", "Fighter-to-Fighter", "Engagement", "Fighter-to-fighter engagement data", ["track_number"], ["NPG_5"]),
        jmsg!("J7/0", "Net Control Status", "Management", "Net entry/control status", ["unit_id"], ["NPG_2", "NPG_14"]),
        jmsg!("J7/1", "Net Control Order", "Management", "Net control order", ["unit_id"], ["NPG_2"]),
        jmsg!("J9/0", "Weapon Status", "Engagement", "Weapon status / pairing", ["track_number"], ["NPG_8", "NPG_27"]),
        jmsg!("J12/0", "Control", "Control", "Mission / unit control order", ["track_number"], ["NPG_9", "NPG_19"]),
        jmsg!("J13/0", "Intelligence", "Intelligence", "Intelligence broadcast", ["track_number"], ["NPG_12"]),
        jmsg!("J28/0", "ADSI Report", "Surveillance", "Air defense systems integration report", ["track_number"], ["NPG_16"]),
    ]
});

static JMESSAGE_BY_ID: Lazy<HashMap<&'static str, &'static JMessage>> =
    Lazy::new(|| JMESSAGES.iter().map(|m| (m.id, m)).collect());

pub static JMESSAGE_IDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| JMESSAGES.iter().map(|m| m.id).collect());

pub fn lookup(id: &str) -> Option<&'static JMessage> {
    JMESSAGE_BY_ID.get(id).copied()
}

pub fn is_valid(id: &str) -> bool {
    JMESSAGE_IDS.contains(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_j3_2_valid_on_npg_7_and_9() {
        let msg = lookup("J3/2").unwrap();
        assert!(msg.valid_npgs.contains(&"NPG_7"));
        assert!(msg.valid_npgs.contains(&"NPG_9"));
        assert!(!msg.valid_npgs.contains(&"NPG_6"));
    }

    #[test]
    fn test_unknown_message_is_invalid() {
        assert!(!is_valid("J99/9"));
    }

    #[test]
    fn test_lookup_by_id() {
        assert_eq!(lookup("J7/0").unwrap().functional_area, "Management");
    }
}
