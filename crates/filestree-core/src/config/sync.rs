//! Sync controller configuration.

use serde::{Deserialize, Serialize};

/// Sync worker and event channel configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Capacity of the sync worker's job queue.
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
    /// Buffer size of the state-change broadcast channel.
    #[serde(default = "default_event_buffer")]
    pub event_buffer: usize,
    /// Whether the session starts signed in (a restored previous sign-in).
    #[serde(default)]
    pub start_authorized: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            queue_capacity: default_queue_capacity(),
            event_buffer: default_event_buffer(),
            start_authorized: false,
        }
    }
}

fn default_queue_capacity() -> usize {
    64
}

fn default_event_buffer() -> usize {
    64
}
