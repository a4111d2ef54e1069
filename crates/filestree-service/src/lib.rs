//! # filestree-service
//!
//! Entry-tree logic for FilesTree: the row codec, unique naming, the entry
//! store with cascade delete, directory navigation, and the sync controller
//! that keeps the store and the remote row table in step.
//!
//! The store is owned by a single sync worker task. Everything else talks
//! to it through a cloneable [`SyncController`].

pub mod codec;
pub mod naming;
pub mod navigation;
pub mod store;
pub mod sync;

pub use codec::{decode_rows, encode_entries};
pub use naming::make_unique;
pub use navigation::{DirectoryView, NavigationStack};
pub use store::EntryStore;
pub use sync::{PushOutcome, StartOutcome, SyncController};
