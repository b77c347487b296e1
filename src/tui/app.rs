//! Main TUI application.

use std::io;
use std::time::Duration;

use chrono::Local;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, warn};

use crate::source::StateSource;
use crate::view::assemble;

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::{AppState, Phase};

/// Main TUI application: owns the snapshot source and the view state,
/// and drives the fetch -> assemble -> render cycle.
///
/// Refreshing is synchronous inside the event loop, so renders never
/// interleave; each one fully replaces the displayed tables.
pub struct App {
    source: Box<dyn StateSource>,
    state: AppState,
    auto_interval: Option<Duration>,
    should_quit: bool,
}

impl App {
    /// Creates a new App over the given source. When `auto_interval` is
    /// set, a refresh also fires on every timer tick (toggleable with
    /// the `a` key).
    pub fn new(source: Box<dyn StateSource>, auto_interval: Option<Duration>) -> Self {
        let endpoint = source.endpoint().to_string();
        Self {
            source,
            state: AppState::new(endpoint, auto_interval.is_some()),
            auto_interval,
            should_quit: false,
        }
    }

    /// Runs the TUI application until quit.
    pub fn run(mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = self.auto_interval.unwrap_or(Duration::from_millis(250));
        let events = EventHandler::new(tick_rate);

        // Initial fetch, the startup counterpart of a manual refresh.
        self.refresh();

        // Main loop
        loop {
            terminal.draw(|frame| render(frame, &self.state))?;

            match events.next() {
                Ok(Event::Tick) => {
                    if self.state.auto_refresh && self.auto_interval.is_some() {
                        self.refresh();
                    }
                }
                Ok(Event::Key(key)) => match handle_key(&mut self.state, key) {
                    KeyAction::Quit => self.should_quit = true,
                    KeyAction::Refresh => self.refresh(),
                    KeyAction::None => {}
                },
                Ok(Event::Resize) => {
                    // Next draw adapts to the new size.
                }
                Err(_) => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// One refresh cycle: fetch, assemble, replace the displayed tables.
    ///
    /// A failed fetch is absorbed here: the error goes to the log, the
    /// phase drops back to idle, and the tables keep their previous
    /// contents. Never fatal; the next refresh starts clean.
    pub fn refresh(&mut self) {
        self.state.phase = Phase::Fetching;
        match self.source.fetch() {
            Ok(snapshot) => {
                debug!(
                    teams = snapshot.status_by_team.len(),
                    transmissions = snapshot.transmissions.len(),
                    "snapshot fetched"
                );
                self.state.tables = Some(assemble(&snapshot));
                self.state.clamp_scroll();
                self.state.last_refresh = Some(Local::now());
                self.state.phase = Phase::Rendered;
            }
            Err(e) => {
                warn!(
                    endpoint = %self.source.endpoint(),
                    error = %e,
                    "snapshot fetch failed, display unchanged"
                );
                self.state.phase = Phase::Idle;
            }
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}
