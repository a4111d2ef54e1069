//! # filestree-core
//!
//! Core crate for FilesTree. Contains the remote row-store trait,
//! configuration schemas, typed identifiers, sync events, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other FilesTree crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
