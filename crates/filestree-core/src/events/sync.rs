//! Authorization and remote synchronization events.

use serde::{Deserialize, Serialize};

use crate::types::auth::AuthState;

/// Events describing authorization changes and remote I/O outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SyncEvent {
    /// The session authorization state changed.
    AuthorizationChanged {
        /// The new state.
        state: AuthState,
    },
    /// The full table was written to the remote store.
    Pushed {
        /// Number of rows written.
        rows: usize,
    },
    /// Writing the table failed; the local store is unaffected.
    PushFailed {
        /// Error description for display.
        message: String,
    },
    /// Fetching the table failed; the local store is unaffected.
    FetchFailed {
        /// Error description for display.
        message: String,
    },
}
