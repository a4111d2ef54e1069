//! The authoritative in-memory entry collection.

pub mod cascade;
pub mod service;

pub use cascade::descendants_of;
pub use service::EntryStore;
