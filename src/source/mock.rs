//! Canned snapshot sources for tests and demo mode.

use std::collections::VecDeque;

use crate::model::DashboardSnapshot;

use super::{SourceError, StateSource};

/// A source serving pre-arranged results instead of hitting the network.
pub struct MockSource {
    scripted: VecDeque<Result<DashboardSnapshot, SourceError>>,
    repeating: Option<DashboardSnapshot>,
    endpoint: String,
}

impl MockSource {
    /// Serves the given results in order, then fails with a transport
    /// error once exhausted.
    pub fn scripted(results: Vec<Result<DashboardSnapshot, SourceError>>) -> Self {
        Self {
            scripted: results.into(),
            repeating: None,
            endpoint: "mock".to_string(),
        }
    }

    /// Serves the same snapshot on every fetch. Used by `--demo`.
    pub fn repeating(snapshot: DashboardSnapshot) -> Self {
        Self {
            scripted: VecDeque::new(),
            repeating: Some(snapshot),
            endpoint: "demo data".to_string(),
        }
    }
}

impl StateSource for MockSource {
    fn fetch(&mut self) -> Result<DashboardSnapshot, SourceError> {
        if let Some(snapshot) = &self.repeating {
            return Ok(snapshot.clone());
        }
        self.scripted
            .pop_front()
            .unwrap_or_else(|| Err(SourceError::Transport("mock source exhausted".to_string())))
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// A small plausible operation: three teams mid-search plus a few log
/// entries. Enough to exercise every display rule, including the
/// percentage collapse and the brace heuristic.
pub fn demo_snapshot() -> DashboardSnapshot {
    let raw = serde_json::json!({
        "status_by_team": {
            "alpha": [
                {"timestamp": "20240115T080000Z", "location": "NT 2739 0912",
                 "location_status": "assigned", "transit": "self", "status_code": 4},
                {"timestamp": "20240115T093000Z", "location": "NT 2739 0912",
                 "location_status": "percentage 60%", "transit": null, "status_code": 4}
            ],
            "bravo": [
                {"timestamp": "20240115T081500Z", "location": "NT 2801 0877",
                 "location_status": "arrived", "transit": "transport van",
                 "status_code": 6}
            ],
            "charlie": []
        },
        "location_by_team": {
            "alpha": "NT 2739 0912",
            "bravo": "NT 2801 0877",
            "charlie": "unassigned"
        },
        "transmissions": [
            {"timestamp": "20240115T080500Z", "dest": "high_bird", "src": "comms",
             "msg": "radio check, all teams"},
            {"timestamp": "20240115T094500Z", "dest": "comms", "src": "alpha",
             "msg": "{\"found\": \"clothing\", \"grid\": \"NT 2741 0915\"}"}
        ]
    });
    serde_json::from_value(raw).expect("demo snapshot is valid")
}
