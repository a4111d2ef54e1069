//! Entry store content events.

use serde::{Deserialize, Serialize};

use crate::types::id::EntryId;

/// Events describing changes to the local entry store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StoreEvent {
    /// The store was replaced by a decoded remote table.
    Replaced {
        /// Number of entries now in the store.
        count: usize,
    },
    /// An entry was created.
    Added {
        /// The new entry ID.
        entry_id: EntryId,
        /// The directory it was created in (None for root).
        parent_id: Option<EntryId>,
        /// The generated name.
        name: String,
    },
    /// An entry and its descendants were removed.
    Removed {
        /// The entry the delete was requested for.
        entry_id: EntryId,
        /// Every removed entry, the target included.
        removed_ids: Vec<EntryId>,
    },
}
