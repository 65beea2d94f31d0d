// src/model.rs
//! Bridge domain types: the canonical state enum and the persisted record.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Service state of a bridge for road traffic.
///
/// `Up` means cars can cross (deck is down), `Down` means the span is raised.
/// The names mirror the store contract and are kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BridgeState {
    Up,
    Down,
    Maintenance,
    #[default]
    Unknown,
}

impl BridgeState {
    pub fn as_str(&self) -> &'static str {
        match self {
            BridgeState::Up => "up",
            BridgeState::Down => "down",
            BridgeState::Maintenance => "maintenance",
            BridgeState::Unknown => "unknown",
        }
    }

    /// Phrase used in notification bodies ("The X is now {phrase}").
    pub fn phrase(&self) -> &'static str {
        match self {
            BridgeState::Up => "up",
            BridgeState::Down => "down",
            BridgeState::Maintenance => "under maintenance",
            BridgeState::Unknown => "in an unknown state",
        }
    }

    /// Lenient read boundary: anything unrecognized is `Unknown`.
    pub fn from_wire(s: &str) -> Self {
        s.parse().unwrap_or(BridgeState::Unknown)
    }
}

impl fmt::Display for BridgeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BridgeState {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(BridgeState::Up),
            "down" => Ok(BridgeState::Down),
            "maintenance" => Ok(BridgeState::Maintenance),
            "unknown" => Ok(BridgeState::Unknown),
            other => Err(anyhow::anyhow!("unrecognized bridge state: {other}")),
        }
    }
}

fn de_state_lenient<'de, D>(d: D) -> Result<BridgeState, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(d)?;
    Ok(BridgeState::from_wire(&raw))
}

/// Persisted bridge entity as served by the bridge store (`/bridges`).
///
/// Everything apart from `name` and `state` is pass-through data used only
/// when formatting notifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeRecord {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(rename = "status", deserialize_with = "de_state_lenient")]
    pub state: BridgeState,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub maps_url: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(rename = "bridge_location", default)]
    pub location_label: String,
}

impl BridgeRecord {
    /// Minimal record with empty static fields (seeding, tests).
    pub fn new(name: impl Into<String>, state: BridgeState, location_label: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            state,
            image_url: String::new(),
            maps_url: String::new(),
            address: String::new(),
            latitude: 0.0,
            longitude: 0.0,
            location_label: location_label.into(),
        }
    }
}

/// A proposed state for one bridge, produced at most once per bridge per batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateChangeRequest {
    pub bridge_name: String,
    pub proposed_state: BridgeState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_serializes_lowercase() {
        let s = serde_json::to_string(&BridgeState::Maintenance).unwrap();
        assert_eq!(s, "\"maintenance\"");
        assert_eq!("Down".parse::<BridgeState>().unwrap(), BridgeState::Down);
        assert_eq!(BridgeState::from_wire("raised"), BridgeState::Unknown);
    }

    #[test]
    fn record_reads_store_json() {
        let json = r#"{
            "id": "a1",
            "name": "Ballard Bridge",
            "status": "UP",
            "image_url": "",
            "maps_url": "",
            "address": "NW 15th Ave",
            "latitude": 47.66,
            "longitude": -122.37,
            "bridge_location": "Seattle, Wa"
        }"#;
        let r: BridgeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.state, BridgeState::Up);
        assert_eq!(r.location_label, "Seattle, Wa");

        let back = serde_json::to_value(&r).unwrap();
        assert_eq!(back["status"], "up");
        assert_eq!(back["bridge_location"], "Seattle, Wa");
    }
}
