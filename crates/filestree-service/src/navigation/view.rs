//! A directory listing scoped to one parent.

use serde::Serialize;

use filestree_core::types::EntryId;
use filestree_entity::{Entry, sort_for_display};

/// Title shown for the root scope.
pub const ROOT_TITLE: &str = "Entries";

/// The entries of one directory, in display order.
///
/// Views are recomputed from the store whenever they are shown; they are
/// never written back.
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryView {
    /// The directory listed (None for the root).
    pub scope: Option<EntryId>,
    /// Display title: the directory name, or [`ROOT_TITLE`].
    pub title: String,
    /// Children in display order.
    pub entries: Vec<Entry>,
}

impl DirectoryView {
    /// Creates a view from the scope's children, sorting them for display.
    pub fn new(scope: Option<EntryId>, title: impl Into<String>, mut entries: Vec<Entry>) -> Self {
        sort_for_display(&mut entries);
        Self {
            scope,
            title: title.into(),
            entries,
        }
    }

    /// Number of listed entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry at a 1-based listing position.
    pub fn at(&self, position: usize) -> Option<&Entry> {
        position.checked_sub(1).and_then(|i| self.entries.get(i))
    }

    /// The first entry, in display order, with exactly this name.
    pub fn find(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Resolves a listing position (`"2"`) or a name to an entry.
    pub fn resolve(&self, target: &str) -> Option<&Entry> {
        match target.parse::<usize>() {
            Ok(position) => self.at(position).or_else(|| self.find(target)),
            Err(_) => self.find(target),
        }
    }
}
