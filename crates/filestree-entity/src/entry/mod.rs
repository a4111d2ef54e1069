//! Entry domain entities.

pub mod kind;
pub mod model;
pub mod tree;

pub use kind::EntryType;
pub use model::{Entry, sort_for_display};
pub use tree::{EntryNode, EntryTree};
