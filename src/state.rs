//! Shared application state.

use chrono::{DateTime, Utc};

/// Read-only data shared by all handlers.
///
/// The service keeps no mutable state between requests: every submission is
/// decided against the same configuration and never observes the effects of
/// another submission.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Path accepted logins are redirected to.
    pub destination: String,
    /// Startup timestamp, reported by the health endpoint.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Creates state with the given redirect destination.
    pub fn new(destination: String) -> Self {
        Self {
            destination,
            started_at: Utc::now(),
        }
    }
}
