//! sarwatch - Terminal dashboard for search-and-rescue tracker state.
//!
//! Polls a SAR tracker `/state` endpoint and renders three tables:
//! - Current Status: the latest observation per team
//! - Status History: every observation, grouped by team
//! - Transmissions: the radio log, in arrival order
//!
//! Split into a wire model, a pluggable snapshot source, a UI-agnostic
//! view layer, and the TUI itself.

pub mod model;
pub mod source;
pub mod tui;
pub mod view;
