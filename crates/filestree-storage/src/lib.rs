//! # filestree-storage
//!
//! Remote row-table providers for FilesTree. Every provider implements
//! [`RowRemote`](filestree_core::traits::RowRemote): a whole-table fetch
//! and a whole-table replace.

pub mod manager;
pub mod providers;

pub use manager::build_remote;
