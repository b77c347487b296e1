//! Snapshot sources for the dashboard.
//!
//! The [`StateSource`] trait lets the TUI work with different backends
//! through one interface: a live tracker endpoint over HTTP, or canned
//! data for tests and demo mode. One call, one snapshot; the source
//! performs no retries and applies no timeout.

mod http;
mod mock;

pub use http::HttpSource;
pub use mock::{MockSource, demo_snapshot};

use crate::model::DashboardSnapshot;

/// Error types that can occur while fetching a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Connection or I/O failure before a response arrived.
    Transport(String),
    /// The endpoint answered with a non-2xx status.
    Status(u16),
    /// The response body is not a valid snapshot document.
    Decode(String),
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::Transport(msg) => write!(f, "transport error: {}", msg),
            SourceError::Status(code) => write!(f, "unexpected HTTP status {}", code),
            SourceError::Decode(msg) => write!(f, "invalid snapshot body: {}", msg),
        }
    }
}

impl std::error::Error for SourceError {}

/// Abstraction over snapshot backends.
///
/// Object-safe; the binary hands the TUI a `Box<dyn StateSource>`.
pub trait StateSource {
    /// Fetches one snapshot. A failed fetch is absorbed by the caller:
    /// the display keeps its previous contents and the error goes to the
    /// diagnostic log.
    fn fetch(&mut self) -> Result<DashboardSnapshot, SourceError>;

    /// Human-readable description of where the data comes from,
    /// shown in the header line.
    fn endpoint(&self) -> &str;
}
