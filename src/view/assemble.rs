//! Builds the three dashboard tables from a snapshot.
//!
//! Pure data transformation: the output is consumed by both the TUI and
//! the plain-text renderer. Assembly is deterministic and idempotent for
//! identical input. A malformed history entry is logged and skipped
//! without aborting sibling rows or the other tables.

use tracing::warn;

use crate::model::{DashboardSnapshot, StatusEvent};
use crate::view::format::{format_location_status, format_status_code, format_timestamp};
use crate::view::table::{Cell, TableData};

/// The three tables of one dashboard refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardTables {
    pub current: TableData,
    pub history: TableData,
    pub transmissions: TableData,
}

/// Assembles all three tables from a snapshot.
pub fn assemble(snapshot: &DashboardSnapshot) -> DashboardTables {
    DashboardTables {
        current: current_status_table(snapshot),
        history: status_history_table(snapshot),
        transmissions: transmissions_table(snapshot),
    }
}

/// One row per team in `status_by_team` (ascending lexical order), built
/// from the team's most recent entry. Teams with no history, or whose
/// latest entry is malformed, still appear with empty event fields.
fn current_status_table(snapshot: &DashboardSnapshot) -> TableData {
    let mut table = TableData::new(
        "Current Status",
        vec![
            "Team",
            "Current Location",
            "Location Status",
            "Transit",
            "Status Code",
            "Updated",
        ],
    );

    for (team, history) in &snapshot.status_by_team {
        let current = history.last().and_then(|raw| {
            StatusEvent::from_value(raw)
                .map_err(|e| {
                    warn!(team = %team, error = %e, "malformed current status entry");
                })
                .ok()
        });

        let location = snapshot
            .location_by_team
            .get(team)
            .map(|loc| Cell::new(loc.clone()))
            .unwrap_or_default();

        let mut row = vec![Cell::new(team.clone()), location];
        match current {
            Some(event) => row.extend([
                Cell::new(format_location_status(&event.location_status)),
                Cell::from_value(&event.transit),
                Cell::new(format_status_code(&event.status_code)),
                Cell::new(format_timestamp(&crate::model::text(&event.timestamp))),
            ]),
            None => row.extend([Cell::empty(), Cell::empty(), Cell::empty(), Cell::empty()]),
        }
        table.rows.push(row);
    }

    table
}

/// One row per (team, entry) pair: teams ascending, entries in stored
/// chronological order. Malformed entries are skipped, not fatal.
fn status_history_table(snapshot: &DashboardSnapshot) -> TableData {
    let mut table = TableData::new(
        "Status History",
        vec![
            "Team",
            "Timestamp",
            "Location",
            "Location Status",
            "Transit",
            "Status Code",
        ],
    );

    for (team, history) in &snapshot.status_by_team {
        for raw in history {
            let event = match StatusEvent::from_value(raw) {
                Ok(event) => event,
                Err(e) => {
                    warn!(team = %team, error = %e, "skipping malformed status entry");
                    continue;
                }
            };
            table.rows.push(vec![
                Cell::new(team.clone()),
                Cell::new(format_timestamp(&crate::model::text(&event.timestamp))),
                Cell::from_value(&event.location),
                Cell::new(format_location_status(&event.location_status)),
                Cell::from_value(&event.transit),
                Cell::new(format_status_code(&event.status_code)),
            ]);
        }
    }

    table
}

/// One row per transmission, in snapshot order. No re-sorting.
fn transmissions_table(snapshot: &DashboardSnapshot) -> TableData {
    let mut table = TableData::new(
        "Transmissions",
        vec!["Timestamp", "Dest", "Src", "Message"],
    );

    for t in &snapshot.transmissions {
        table.rows.push(vec![
            Cell::new(format_timestamp(&crate::model::text(&t.timestamp))),
            Cell::from_value(&t.dest),
            Cell::from_value(&t.src),
            Cell::from_value(&t.msg),
        ]);
    }

    table
}
