//! State-change events emitted by the sync controller.
//!
//! Events are broadcast to any number of subscribers (the presentation
//! layer, loggers, tests). They describe what happened; they never carry
//! the store contents themselves.

pub mod store;
pub mod sync;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::id::EventId;

pub use store::StoreEvent;
pub use sync::SyncEvent;

/// Wrapper for all state-change events with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateEvent {
    /// Unique event ID.
    pub id: EventId,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// The event payload.
    pub payload: EventPayload,
}

/// Union of all event types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "domain", content = "event")]
pub enum EventPayload {
    /// The entry store contents changed.
    Store(StoreEvent),
    /// Authorization or remote synchronization changed.
    Sync(SyncEvent),
}

impl StateEvent {
    /// Create a new state event.
    pub fn new(payload: EventPayload) -> Self {
        Self {
            id: EventId::new(),
            timestamp: Utc::now(),
            payload,
        }
    }

    /// Create a store-content event.
    pub fn store(event: StoreEvent) -> Self {
        Self::new(EventPayload::Store(event))
    }

    /// Create a sync event.
    pub fn sync(event: SyncEvent) -> Self {
        Self::new(EventPayload::Sync(event))
    }
}
