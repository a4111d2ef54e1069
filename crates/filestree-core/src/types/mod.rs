//! Core type definitions used across the FilesTree workspace.

pub mod auth;
pub mod id;
pub mod row;

pub use auth::AuthState;
pub use id::*;
pub use row::Row;
