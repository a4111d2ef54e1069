//! # filestree-entity
//!
//! Domain entities for FilesTree. An [`Entry`] is one file or directory
//! record; the store keeps them in a flat list and everything hierarchical
//! is derived from `parent_id` links on demand.

pub mod entry;

pub use entry::{Entry, EntryNode, EntryTree, EntryType, sort_for_display};
