//! Core traits defined in `filestree-core` and implemented by other crates.

pub mod remote;

pub use remote::RowRemote;
