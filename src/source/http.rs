//! Live snapshot source: one blocking GET against the tracker endpoint.

use crate::model::DashboardSnapshot;

use super::{SourceError, StateSource};

/// Fetches snapshots from a tracker `/state` endpoint.
///
/// Single attempt per invocation, no retry, no timeout: a hung request
/// hangs the pending refresh but nothing else. The agent reuses its
/// connection pool across refreshes.
pub struct HttpSource {
    agent: ureq::Agent,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            agent: ureq::agent(),
            url: url.into(),
        }
    }
}

impl StateSource for HttpSource {
    fn fetch(&mut self) -> Result<DashboardSnapshot, SourceError> {
        let response = match self.agent.get(&self.url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(code, _)) => return Err(SourceError::Status(code)),
            Err(e) => return Err(SourceError::Transport(e.to_string())),
        };
        response
            .into_json::<DashboardSnapshot>()
            .map_err(|e| SourceError::Decode(e.to_string()))
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}
