//! Sync worker: the single task that owns the store and talks to the remote.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, watch};
use tracing::{debug, info, warn};

use filestree_core::events::{StateEvent, StoreEvent, SyncEvent};
use filestree_core::result::AppResult;
use filestree_core::traits::remote::RowRemote;
use filestree_core::types::AuthState;

use super::job::{PushOutcome, StartOutcome, SyncJob};
use crate::codec::{decode_rows, encode_entries};
use crate::store::EntryStore;

/// Owns the entry store and processes [`SyncJob`]s one at a time.
#[derive(Debug)]
pub(crate) struct SyncWorker {
    /// The session's entries.
    store: EntryStore,
    /// Remote row table.
    remote: Arc<dyn RowRemote>,
    /// Authorization state, readable synchronously by controllers.
    auth: watch::Sender<AuthState>,
    /// State-change broadcast.
    events: broadcast::Sender<StateEvent>,
}

impl SyncWorker {
    /// Creates a worker.
    pub(crate) fn new(
        store: EntryStore,
        remote: Arc<dyn RowRemote>,
        auth: watch::Sender<AuthState>,
        events: broadcast::Sender<StateEvent>,
    ) -> Self {
        Self {
            store,
            remote,
            auth,
            events,
        }
    }

    /// Runs until every controller handle has been dropped.
    pub(crate) async fn run(mut self, mut jobs: mpsc::Receiver<SyncJob>) {
        info!(provider = self.remote.provider_type(), "Sync worker started");
        while let Some(job) = jobs.recv().await {
            self.handle(job).await;
        }
        info!(entries = self.store.len(), "Sync worker stopped");
    }

    async fn handle(&mut self, job: SyncJob) {
        match job {
            SyncJob::Start { reply } => {
                let outcome = if self.store.is_empty() {
                    self.fetch()
                        .await
                        .map(|count| StartOutcome::Fetched { count })
                } else {
                    debug!(entries = self.store.len(), "Store already loaded, skipping fetch");
                    Ok(StartOutcome::AlreadyLoaded {
                        count: self.store.len(),
                    })
                };
                let _ = reply.send(outcome);
            }
            SyncJob::Reload { reply } => {
                let _ = reply.send(self.fetch().await);
            }
            SyncJob::Add {
                entry_type,
                parent_id,
                reply,
            } => {
                let entry = self.store.add_entry(entry_type, parent_id);
                self.emit(StateEvent::store(StoreEvent::Added {
                    entry_id: entry.id,
                    parent_id: entry.parent_id,
                    name: entry.name.clone(),
                }));
                let _ = reply.send(entry);
                self.push_after_mutation().await;
            }
            SyncJob::Delete { id, reply } => match self.store.delete_entry(id) {
                Ok(removed) => {
                    self.emit(StateEvent::store(StoreEvent::Removed {
                        entry_id: id,
                        removed_ids: removed.iter().map(|e| e.id).collect(),
                    }));
                    let _ = reply.send(Ok(removed));
                    self.push_after_mutation().await;
                }
                Err(e) => {
                    let _ = reply.send(Err(e));
                }
            },
            SyncJob::Children { scope, reply } => {
                let _ = reply.send(self.store.children_of(scope));
            }
            SyncJob::Snapshot { reply } => {
                let _ = reply.send(self.store.entries().to_vec());
            }
            SyncJob::Tree { reply } => {
                let _ = reply.send(self.store.tree());
            }
            SyncJob::SetAuth { state, reply } => {
                let _ = reply.send(self.set_auth(state).await);
            }
            SyncJob::Push { reply } => {
                let outcome = if self.is_authorized() {
                    self.push().await
                } else {
                    Ok(PushOutcome::Skipped)
                };
                let _ = reply.send(outcome);
            }
            SyncJob::Flush { reply } => {
                let _ = reply.send(());
            }
        }
    }

    fn is_authorized(&self) -> bool {
        self.auth.borrow().is_authorized()
    }

    fn emit(&self, event: StateEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }

    /// Fetches the remote table and replaces the store with it.
    ///
    /// On failure the store is left as it was.
    async fn fetch(&mut self) -> AppResult<usize> {
        let rows = match self.remote.fetch_rows().await {
            Ok(rows) => rows,
            Err(e) => {
                warn!(error = %e, "Remote fetch failed");
                self.emit(StateEvent::sync(SyncEvent::FetchFailed {
                    message: e.to_string(),
                }));
                return Err(e);
            }
        };

        let entries = decode_rows(&rows);
        let count = entries.len();
        self.store.replace_all(entries);
        info!(rows = rows.len(), entries = count, "Store loaded from remote");
        self.emit(StateEvent::store(StoreEvent::Replaced { count }));
        Ok(count)
    }

    /// Writes the whole store to the remote table.
    async fn push(&mut self) -> AppResult<PushOutcome> {
        let rows = encode_entries(self.store.entries());
        let count = rows.len();
        match self.remote.write_rows(rows).await {
            Ok(()) => {
                debug!(rows = count, "Pushed snapshot");
                self.emit(StateEvent::sync(SyncEvent::Pushed { rows: count }));
                Ok(PushOutcome::Pushed { rows: count })
            }
            Err(e) => {
                warn!(error = %e, "Remote write failed");
                self.emit(StateEvent::sync(SyncEvent::PushFailed {
                    message: e.to_string(),
                }));
                Err(e)
            }
        }
    }

    /// Mutations stay local while unauthorized. A failed push has already
    /// been reported as an event; the mutation stands either way.
    async fn push_after_mutation(&mut self) {
        if self.is_authorized() {
            let _ = self.push().await;
        } else {
            debug!("Not authorized, mutation kept local");
        }
    }

    async fn set_auth(&mut self, state: AuthState) -> AppResult<PushOutcome> {
        let previous = self.auth.send_replace(state);
        if previous == state {
            return Ok(PushOutcome::Skipped);
        }

        info!(from = %previous, to = %state, "Authorization changed");
        self.emit(StateEvent::sync(SyncEvent::AuthorizationChanged { state }));

        if state.is_authorized() {
            // Local contents win on first authorization.
            self.push().await
        } else {
            Ok(PushOutcome::Skipped)
        }
    }
}
