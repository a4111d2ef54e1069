//! Entry entity model.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use filestree_core::types::EntryId;

use super::kind::EntryType;

/// One file or directory record.
///
/// Entries are immutable values: the store replaces or removes them, it
/// never edits one in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier, generated once and never reassigned.
    pub id: EntryId,
    /// Containing directory (None for the root).
    pub parent_id: Option<EntryId>,
    /// File or directory.
    pub entry_type: EntryType,
    /// Display name; unique among same-type siblings at creation time.
    pub name: String,
}

impl Entry {
    /// Build an entry from its parts.
    pub fn new(
        id: EntryId,
        parent_id: Option<EntryId>,
        entry_type: EntryType,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            parent_id,
            entry_type,
            name: name.into(),
        }
    }

    /// Build an entry with a freshly generated identifier.
    pub fn create(
        parent_id: Option<EntryId>,
        entry_type: EntryType,
        name: impl Into<String>,
    ) -> Self {
        Self::new(EntryId::new(), parent_id, entry_type, name)
    }

    /// Check if this entry is a directory.
    pub fn is_directory(&self) -> bool {
        self.entry_type.is_directory()
    }

    /// Check if this entry lives directly in `scope` (None = root).
    pub fn is_in(&self, scope: Option<EntryId>) -> bool {
        self.parent_id == scope
    }
}

/// Display order: directories first, then case-insensitive name.
///
/// Ties on the folded name fall back to the exact name, the id and the
/// parent so the order stays total and agrees with `Eq`.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.entry_type
            .display_rank()
            .cmp(&other.entry_type.display_rank())
            .then_with(|| fold_case(&self.name).cmp(fold_case(&other.name)))
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.id.cmp(&other.id))
            .then_with(|| self.parent_id.cmp(&other.parent_id))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn fold_case(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars().flat_map(char::to_lowercase)
}

/// Sort entries into display order in place.
pub fn sort_for_display(entries: &mut [Entry]) {
    entries.sort();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entries: &[Entry]) -> Vec<(EntryType, &str)> {
        entries
            .iter()
            .map(|e| (e.entry_type, e.name.as_str()))
            .collect()
    }

    #[test]
    fn test_directories_first_then_case_insensitive() {
        let mut entries = vec![
            Entry::create(None, EntryType::Directory, "b"),
            Entry::create(None, EntryType::File, "a"),
            Entry::create(None, EntryType::Directory, "A"),
        ];
        sort_for_display(&mut entries);
        assert_eq!(
            names(&entries),
            vec![
                (EntryType::Directory, "A"),
                (EntryType::Directory, "b"),
                (EntryType::File, "a"),
            ]
        );
    }

    #[test]
    fn test_files_sorted_ignoring_case() {
        let mut entries = vec![
            Entry::create(None, EntryType::File, "zeta"),
            Entry::create(None, EntryType::File, "Alpha"),
            Entry::create(None, EntryType::File, "beta"),
        ];
        sort_for_display(&mut entries);
        assert_eq!(
            names(&entries),
            vec![
                (EntryType::File, "Alpha"),
                (EntryType::File, "beta"),
                (EntryType::File, "zeta"),
            ]
        );
    }

    #[test]
    fn test_order_agrees_with_eq() {
        let a = Entry::create(None, EntryType::File, "Same");
        let b = Entry::create(None, EntryType::File, "same");
        assert_ne!(a, b);
        assert_ne!(a.cmp(&b), Ordering::Equal);
        assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
    }

    #[test]
    fn test_scope_membership() {
        let dir = Entry::create(None, EntryType::Directory, "docs");
        let file = Entry::create(Some(dir.id), EntryType::File, "notes");
        assert!(dir.is_in(None));
        assert!(file.is_in(Some(dir.id)));
        assert!(!file.is_in(None));
    }

    #[test]
    fn test_json_shape() {
        let entry = Entry::create(None, EntryType::Directory, "docs");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["entry_type"], "directory");
        assert_eq!(json["parent_id"], serde_json::Value::Null);
        assert_eq!(json["id"], entry.id.0.to_string());
    }
}
