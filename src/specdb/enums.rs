//! Closed enum tables: classification levels, Link-22 operating modes, and
//! Link-22 data rates (spec.md §3, §6).

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// The two link types a `Network`'s `link` property may name.
pub static LINK_TYPES: &[&str] = &["Link16", "Link22"];

pub static CLASSIFICATIONS: &[&str] =
    &["UNCLASSIFIED", "CONFIDENTIAL", "SECRET", "TOP_SECRET"];

pub static OPERATING_MODES: &[&str] = &["NetSlotted", "Contention", "Hybrid"];

pub static DATA_RATES: &[&str] = &["Low", "Medium", "High"];

static CLASSIFICATION_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| CLASSIFICATIONS.iter().copied().collect());

static OPERATING_MODE_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| OPERATING_MODES.iter().copied().collect());

static DATA_RATE_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| DATA_RATES.iter().copied().collect());

pub fn is_valid_link_type(id: &str) -> bool {
    LINK_TYPES.contains(&id)
}

pub fn is_valid_classification(id: &str) -> bool {
    CLASSIFICATION_SET.contains(id)
}

pub fn is_valid_operating_mode(id: &str) -> bool {
    OPERATING_MODE_SET.contains(id)
}

pub fn is_valid_data_rate(id: &str) -> bool {
    DATA_RATE_SET.contains(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_is_valid_classification() {
        assert!(is_valid_classification("SECRET"));
        assert!(!is_valid_classification("EYES_ONLY"));
    }

    #[test]
    fn test_operating_modes() {
        assert!(is_valid_operating_mode("Hybrid"));
        assert!(!is_valid_operating_mode("FullDuplex"));
    }

    #[test]
    fn test_data_rates() {
        assert!(is_valid_data_rate("Medium"));
        assert!(!is_valid_data_rate("Ludicrous"));
    }
}
