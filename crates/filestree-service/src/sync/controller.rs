//! Sync controller: the presentation layer's handle on the store.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tracing::warn;

use filestree_core::config::sync::SyncConfig;
use filestree_core::error::AppError;
use filestree_core::events::StateEvent;
use filestree_core::result::AppResult;
use filestree_core::traits::remote::RowRemote;
use filestree_core::types::{AuthState, EntryId};
use filestree_entity::{Entry, EntryTree, EntryType};

use super::job::{PushOutcome, StartOutcome, SyncJob};
use super::worker::SyncWorker;
use crate::store::EntryStore;

/// Handle to a running sync worker.
///
/// Cloning is cheap; all clones feed the same worker queue. The worker
/// stops once the last handle is dropped.
#[derive(Debug, Clone)]
pub struct SyncController {
    /// Job queue of the worker.
    jobs: mpsc::Sender<SyncJob>,
    /// Authorization state as last applied by the worker.
    auth: watch::Receiver<AuthState>,
    /// State-change broadcast, kept for new subscriptions.
    events: broadcast::Sender<StateEvent>,
}

impl SyncController {
    /// Spawns a worker owning `store` and returns a handle to it.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(store: EntryStore, remote: Arc<dyn RowRemote>, config: &SyncConfig) -> Self {
        let (jobs_tx, jobs_rx) = mpsc::channel(config.queue_capacity.max(1));
        let (auth_tx, auth_rx) = watch::channel(AuthState::from(config.start_authorized));
        let (events_tx, _) = broadcast::channel(config.event_buffer.max(1));

        let worker = SyncWorker::new(store, remote, auth_tx, events_tx.clone());
        tokio::spawn(worker.run(jobs_rx));

        Self {
            jobs: jobs_tx,
            auth: auth_rx,
            events: events_tx,
        }
    }

    async fn request<T>(&self, make: impl FnOnce(oneshot::Sender<T>) -> SyncJob) -> AppResult<T> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.jobs
            .send(make(reply_tx))
            .await
            .map_err(|_| AppError::service_unavailable("Sync worker has stopped"))?;
        reply_rx
            .await
            .map_err(|_| AppError::service_unavailable("Sync worker dropped the request"))
    }

    /// Session start: fetches the remote table if the store is empty.
    ///
    /// A fetch failure is returned and the store stays empty.
    pub async fn start(&self) -> AppResult<StartOutcome> {
        self.request(|reply| SyncJob::Start { reply }).await?
    }

    /// Fetches the remote table and replaces the store, whatever it holds.
    /// Returns the number of entries loaded.
    pub async fn reload(&self) -> AppResult<usize> {
        self.request(|reply| SyncJob::Reload { reply }).await?
    }

    /// Creates an entry in `parent_id` (None for the root).
    ///
    /// Resolves as soon as the entry is in the store; the push that follows
    /// when authorized runs before any later job and reports through
    /// [`subscribe`](Self::subscribe).
    pub async fn add_entry(
        &self,
        entry_type: EntryType,
        parent_id: Option<EntryId>,
    ) -> AppResult<Entry> {
        self.request(|reply| SyncJob::Add {
            entry_type,
            parent_id,
            reply,
        })
        .await
    }

    /// Deletes an entry and everything beneath it. Returns what was removed.
    pub async fn delete_entry(&self, id: EntryId) -> AppResult<HashSet<Entry>> {
        self.request(|reply| SyncJob::Delete { id, reply }).await?
    }

    /// Entries directly inside `scope`, in store order.
    pub async fn children_of(&self, scope: Option<EntryId>) -> AppResult<Vec<Entry>> {
        self.request(|reply| SyncJob::Children { scope, reply }).await
    }

    /// Every entry, in store order.
    pub async fn snapshot(&self) -> AppResult<Vec<Entry>> {
        self.request(|reply| SyncJob::Snapshot { reply }).await
    }

    /// The hierarchy view of the store.
    pub async fn tree(&self) -> AppResult<EntryTree> {
        self.request(|reply| SyncJob::Tree { reply }).await
    }

    /// Applies a new authorization state.
    ///
    /// Moving to authorized pushes the current store once, replacing the
    /// remote table. Setting the state it already has does nothing.
    pub async fn set_auth_state(&self, state: AuthState) -> AppResult<PushOutcome> {
        self.request(|reply| SyncJob::SetAuth { state, reply }).await?
    }

    /// Pushes the current store if authorized.
    pub async fn push(&self) -> AppResult<PushOutcome> {
        self.request(|reply| SyncJob::Push { reply }).await?
    }

    /// Waits until every job queued before this call has finished,
    /// including pushes triggered by earlier mutations.
    pub async fn flush(&self) -> AppResult<()> {
        self.request(|reply| SyncJob::Flush { reply }).await
    }

    /// Whether remote writes currently happen.
    pub fn is_authorized(&self) -> bool {
        self.auth_state().is_authorized()
    }

    /// The authorization state as last applied.
    pub fn auth_state(&self) -> AuthState {
        *self.auth.borrow()
    }

    /// Subscribes to state-change events.
    pub fn subscribe(&self) -> broadcast::Receiver<StateEvent> {
        self.events.subscribe()
    }

    /// Calls `callback` for every state-change event until the worker
    /// stops. Events missed because the callback fell behind are skipped.
    pub fn on_state_change<F>(&self, mut callback: F) -> JoinHandle<()>
    where
        F: FnMut(StateEvent) + Send + 'static,
    {
        let mut events = self.subscribe();
        tokio::spawn(async move {
            loop {
                match events.recv().await {
                    Ok(event) => callback(event),
                    Err(broadcast::error::RecvError::Lagged(missed)) => {
                        warn!(missed, "State-change listener lagged");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        })
    }
}
