//! Remote fetch status shared by the fetching slices.

use serde::{Deserialize, Serialize};

/// Lifecycle of the last fetch backing a slice.
///
/// Fetches follow started -> loaded/failed; a successful load returns the
/// status to `Idle`, a failure records the message for the UI to display.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub enum RemoteStatus {
    /// No fetch in flight; data (if any) is usable.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last fetch failed.
    Failed(String),
}

impl RemoteStatus {
    /// Check if a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteStatus::Loading)
    }

    /// The last failure message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            RemoteStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}
