//! Remote synchronization.
//!
//! A [`SyncController`] is a cheap, cloneable handle to one sync worker
//! task. The worker owns the [`EntryStore`](crate::store::EntryStore) and
//! the remote; every store read, mutation, fetch and push is a job on its
//! queue, so no two of them ever overlap.
//!
//! Sync is whole-snapshot and last-writer-wins: each push replaces the
//! remote table with the full local store. Edits made concurrently by
//! another client are overwritten, not merged.

pub mod controller;
pub mod job;
mod worker;

pub use controller::SyncController;
pub use job::{PushOutcome, StartOutcome};
