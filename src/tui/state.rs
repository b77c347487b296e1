//! Application state management.

use chrono::{DateTime, Local};

use crate::view::DashboardTables;

/// Refresh phase. A failed fetch returns to `Idle` with the displayed
/// tables untouched; stale data on screen is expected and acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Fetching,
    Rendered,
}

/// The three dashboard panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    CurrentStatus,
    StatusHistory,
    Transmissions,
}

impl Pane {
    pub fn next(self) -> Self {
        match self {
            Pane::CurrentStatus => Pane::StatusHistory,
            Pane::StatusHistory => Pane::Transmissions,
            Pane::Transmissions => Pane::CurrentStatus,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Pane::CurrentStatus => Pane::Transmissions,
            Pane::StatusHistory => Pane::CurrentStatus,
            Pane::Transmissions => Pane::StatusHistory,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Pane::CurrentStatus => 0,
            Pane::StatusHistory => 1,
            Pane::Transmissions => 2,
        }
    }
}

/// Mutable TUI state: the last assembled tables plus view bookkeeping.
pub struct AppState {
    pub phase: Phase,
    /// Tables from the last successful refresh. `None` until the first
    /// fetch succeeds.
    pub tables: Option<DashboardTables>,
    pub focus: Pane,
    /// Scroll offset per pane, indexed by [`Pane::index`].
    pub scroll: [usize; 3],
    /// Wall-clock time of the last successful refresh (local time).
    pub last_refresh: Option<DateTime<Local>>,
    pub auto_refresh: bool,
    pub show_help: bool,
    pub endpoint: String,
}

impl AppState {
    pub fn new(endpoint: String, auto_refresh: bool) -> Self {
        Self {
            phase: Phase::Idle,
            tables: None,
            focus: Pane::CurrentStatus,
            scroll: [0; 3],
            last_refresh: None,
            auto_refresh,
            show_help: false,
            endpoint,
        }
    }

    /// Row count of the focused pane; zero before the first snapshot.
    fn focused_rows(&self) -> usize {
        let Some(tables) = &self.tables else { return 0 };
        match self.focus {
            Pane::CurrentStatus => tables.current.rows.len(),
            Pane::StatusHistory => tables.history.rows.len(),
            Pane::Transmissions => tables.transmissions.rows.len(),
        }
    }

    pub fn scroll_up(&mut self, amount: usize) {
        let offset = &mut self.scroll[self.focus.index()];
        *offset = offset.saturating_sub(amount);
    }

    pub fn scroll_down(&mut self, amount: usize) {
        let max = self.focused_rows().saturating_sub(1);
        let offset = &mut self.scroll[self.focus.index()];
        *offset = (*offset + amount).min(max);
    }

    pub fn scroll_top(&mut self) {
        self.scroll[self.focus.index()] = 0;
    }

    pub fn scroll_bottom(&mut self) {
        self.scroll[self.focus.index()] = self.focused_rows().saturating_sub(1);
    }

    /// Clamps every scroll offset after a refresh; the new snapshot may
    /// have fewer rows than the offsets pointed at.
    pub fn clamp_scroll(&mut self) {
        let Some(tables) = &self.tables else {
            self.scroll = [0; 3];
            return;
        };
        let lens = [
            tables.current.rows.len(),
            tables.history.rows.len(),
            tables.transmissions.rows.len(),
        ];
        for (offset, len) in self.scroll.iter_mut().zip(lens) {
            *offset = (*offset).min(len.saturating_sub(1));
        }
    }
}
