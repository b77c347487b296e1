//! Terminal User Interface for the dashboard.
//!
//! An interactive three-pane view over the tracker state: current status
//! per team, full status history, and the transmissions log. Refreshes on
//! demand (and optionally on a timer), always replacing the whole display.

mod app;
mod event;
mod input;
mod render;
mod state;
mod style;

pub use app::App;
pub use state::{AppState, Pane, Phase};
