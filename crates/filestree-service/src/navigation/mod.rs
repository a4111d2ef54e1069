//! Directory descent: scoped views and the navigation stack.

pub mod stack;
pub mod view;

pub use stack::{NavigationFrame, NavigationStack};
pub use view::DirectoryView;
