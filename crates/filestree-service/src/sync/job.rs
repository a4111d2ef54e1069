//! Jobs accepted by the sync worker and their outcomes.

use std::collections::HashSet;

use serde::Serialize;
use tokio::sync::oneshot;

use filestree_core::result::AppResult;
use filestree_core::types::{AuthState, EntryId};
use filestree_entity::{Entry, EntryTree, EntryType};

/// Result of starting a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StartOutcome {
    /// The store was empty and was filled from the remote table.
    Fetched {
        /// Entries decoded from the remote table.
        count: usize,
    },
    /// The store already held entries; nothing was fetched.
    AlreadyLoaded {
        /// Entries in the store.
        count: usize,
    },
}

/// Result of a push request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PushOutcome {
    /// The full table was written.
    Pushed {
        /// Rows written.
        rows: usize,
    },
    /// Not authorized; nothing was sent.
    Skipped,
}

/// A unit of work for the sync worker.
#[derive(Debug)]
pub(crate) enum SyncJob {
    /// Fetch if the store is empty.
    Start {
        reply: oneshot::Sender<AppResult<StartOutcome>>,
    },
    /// Fetch and replace unconditionally.
    Reload {
        reply: oneshot::Sender<AppResult<usize>>,
    },
    /// Create an entry, then push if authorized.
    Add {
        entry_type: EntryType,
        parent_id: Option<EntryId>,
        reply: oneshot::Sender<Entry>,
    },
    /// Cascade-delete an entry, then push if authorized.
    Delete {
        id: EntryId,
        reply: oneshot::Sender<AppResult<HashSet<Entry>>>,
    },
    /// Entries directly inside a scope, in store order.
    Children {
        scope: Option<EntryId>,
        reply: oneshot::Sender<Vec<Entry>>,
    },
    /// Every entry, in store order.
    Snapshot { reply: oneshot::Sender<Vec<Entry>> },
    /// The hierarchy view.
    Tree { reply: oneshot::Sender<EntryTree> },
    /// Change the authorization state; catch-up push on sign-in.
    SetAuth {
        state: AuthState,
        reply: oneshot::Sender<AppResult<PushOutcome>>,
    },
    /// Push the current snapshot if authorized.
    Push {
        reply: oneshot::Sender<AppResult<PushOutcome>>,
    },
    /// Resolves once every job queued before it has finished.
    Flush { reply: oneshot::Sender<()> },
}
