//! Wire model for the tracker `/state` snapshot.
//!
//! The tracker dumps its whole database as one JSON document:
//!
//! ```json
//! {
//!   "status_by_team": { "alpha": [ { "timestamp": "...", ... } ] },
//!   "location_by_team": { "alpha": "AB 1234" },
//!   "transmissions": [ { "timestamp": "...", "dest": "...", ... } ]
//! }
//! ```
//!
//! Field values inside status entries and transmissions are only loosely
//! typed upstream (status codes arrive as numbers or strings, locations
//! may be null), so they are carried as raw [`Value`]s and normalized at
//! display time. Status entries stay as raw values in the snapshot and
//! are converted per row, so one malformed entry never poisons the rest.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// One full payload from the state endpoint. Each refresh fully replaces
/// the previous snapshot; nothing is kept client-side.
///
/// `status_by_team` is a `BTreeMap` so iteration yields teams in the
/// ascending lexical order the tables require.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct DashboardSnapshot {
    #[serde(default)]
    pub status_by_team: BTreeMap<String, Vec<Value>>,
    #[serde(default)]
    pub location_by_team: BTreeMap<String, String>,
    #[serde(default)]
    pub transmissions: Vec<Transmission>,
}

/// One entry from the radio log. Wire field names come from the tracker.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Transmission {
    #[serde(default)]
    pub timestamp: Value,
    #[serde(default)]
    pub dest: Value,
    #[serde(default)]
    pub src: Value,
    #[serde(default)]
    pub msg: Value,
}

/// One observation for a team, converted from a raw history entry.
/// Within a team's history the last entry is the most recent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusEvent {
    pub timestamp: Value,
    pub location: Value,
    pub location_status: Value,
    pub transit: Value,
    pub status_code: Value,
}

/// Error converting a raw history entry into a [`StatusEvent`].
#[derive(Debug, Clone, PartialEq)]
pub enum EventError {
    /// The entry is not a JSON object.
    NotAnObject,
}

impl std::fmt::Display for EventError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventError::NotAnObject => write!(f, "status entry is not an object"),
        }
    }
}

impl std::error::Error for EventError {}

impl StatusEvent {
    /// Converts a raw history entry. Missing fields default to null;
    /// only a non-object entry is rejected.
    pub fn from_value(raw: &Value) -> Result<Self, EventError> {
        let obj = raw.as_object().ok_or(EventError::NotAnObject)?;
        let field = |name: &str| obj.get(name).cloned().unwrap_or(Value::Null);
        Ok(Self {
            timestamp: field("timestamp"),
            location: field("location"),
            location_status: field("location_status"),
            transit: field("transit"),
            status_code: field("status_code"),
        })
    }
}

/// Canonical string form of a loose wire value: null renders empty,
/// strings render as-is, everything else as its JSON text.
pub fn text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_snapshot_sections_default_to_empty() {
        let snapshot: DashboardSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.status_by_team.is_empty());
        assert!(snapshot.location_by_team.is_empty());
        assert!(snapshot.transmissions.is_empty());
    }

    #[test]
    fn test_snapshot_accepts_loose_field_types() {
        let raw = json!({
            "status_by_team": {
                "alpha": [
                    {"timestamp": "20240101T000000Z", "location": "AB 12",
                     "location_status": null, "transit": "self", "status_code": 4},
                    {"timestamp": "20240101T001500Z", "location": "AB 12",
                     "location_status": "percentage 60%", "transit": null,
                     "status_code": "6"}
                ]
            },
            "location_by_team": {"alpha": "AB 12"},
            "transmissions": [
                {"timestamp": "20240101T000500Z", "dest": "high_bird",
                 "src": "comms", "msg": "radio check"}
            ]
        });
        let snapshot: DashboardSnapshot = serde_json::from_value(raw).unwrap();
        assert_eq!(snapshot.status_by_team["alpha"].len(), 2);
        assert_eq!(snapshot.transmissions.len(), 1);
        assert_eq!(text(&snapshot.transmissions[0].msg), "radio check");
    }

    #[test]
    fn test_status_event_from_object() {
        let raw = json!({"timestamp": "20240101T000000Z", "status_code": 4});
        let event = StatusEvent::from_value(&raw).unwrap();
        assert_eq!(text(&event.timestamp), "20240101T000000Z");
        assert_eq!(event.status_code, json!(4));
        // Missing fields come back as null.
        assert_eq!(event.location, Value::Null);
    }

    #[test]
    fn test_status_event_rejects_non_object() {
        assert_eq!(
            StatusEvent::from_value(&json!("bogus")),
            Err(EventError::NotAnObject)
        );
        assert_eq!(
            StatusEvent::from_value(&json!([1, 2])),
            Err(EventError::NotAnObject)
        );
    }

    #[test]
    fn test_text_renders_loose_values() {
        assert_eq!(text(&Value::Null), "");
        assert_eq!(text(&json!("grid AB")), "grid AB");
        assert_eq!(text(&json!(7)), "7");
        assert_eq!(text(&json!({"a": 1})), "{\"a\":1}");
    }
}
