//! Shared fixtures for unit tests

use crate::entry::RawEntry;

pub fn talent(name: &str, source: &str) -> RawEntry {
    RawEntry {
        name: Some(name.to_string()),
        source: Some(source.to_string()),
        kind: Some("T".to_string()),
        ..Default::default()
    }
}

pub fn discipline(name: &str, order: &str, source: &str) -> RawEntry {
    RawEntry {
        name: Some(name.to_string()),
        source: Some(source.to_string()),
        kind: Some("D".to_string()),
        order: Some(order.to_string()),
        ..Default::default()
    }
}

/// The two-entry catalog used throughout the scenario tests
pub fn mind_thrust_and_celerity() -> Vec<RawEntry> {
    vec![
        talent("Mind Thrust", "PSA"),
        discipline("Celerity", "Nomad", "PSA"),
    ]
}
