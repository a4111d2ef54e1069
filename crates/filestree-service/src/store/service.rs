//! Entry store: the flat list plus the operations that keep it consistent.

use std::collections::HashSet;

use tracing::{debug, info};

use filestree_core::config::store::StoreConfig;
use filestree_core::error::AppError;
use filestree_core::result::AppResult;
use filestree_core::types::EntryId;
use filestree_entity::{Entry, EntryTree, EntryType};

use super::cascade::descendants_of;
use crate::naming::make_unique;

/// The single flat sequence of all entries in a session.
///
/// Per-directory views are derived by filtering on `parent_id` every time
/// they are asked for; nothing hierarchical is stored.
#[derive(Debug, Clone)]
pub struct EntryStore {
    /// All entries, in insertion/decode order.
    entries: Vec<Entry>,
    /// Label new entries are named after.
    default_name: String,
}

impl Default for EntryStore {
    fn default() -> Self {
        Self::new(&StoreConfig::default())
    }
}

impl EntryStore {
    /// Creates an empty store.
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            entries: Vec::new(),
            default_name: config.default_name.clone(),
        }
    }

    /// All entries in store order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry by ID.
    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries directly inside `scope` (None = root), in store order.
    pub fn children_of(&self, scope: Option<EntryId>) -> Vec<Entry> {
        self.entries
            .iter()
            .filter(|e| e.is_in(scope))
            .cloned()
            .collect()
    }

    /// Names already used by `entry_type` siblings inside `scope`.
    pub fn sibling_names(&self, scope: Option<EntryId>, entry_type: EntryType) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.is_in(scope) && e.entry_type == entry_type)
            .map(|e| e.name.as_str())
            .collect()
    }

    /// Creates a new entry inside `parent_id` and appends it.
    ///
    /// The name is the configured default label made unique among siblings
    /// of the same type in the same directory.
    pub fn add_entry(&mut self, entry_type: EntryType, parent_id: Option<EntryId>) -> Entry {
        let name = make_unique(&self.default_name, self.sibling_names(parent_id, entry_type));
        let entry = Entry::create(parent_id, entry_type, name);
        self.entries.push(entry.clone());

        info!(
            entry_id = %entry.id,
            entry_type = %entry.entry_type,
            name = %entry.name,
            "Entry created"
        );

        entry
    }

    /// Removes an entry and, for directories, everything beneath it.
    ///
    /// Fails with `NotFound` without touching the store if `id` is unknown.
    /// Files have no descendants even if malformed rows name one as parent.
    /// The remaining entries keep their relative order.
    pub fn delete_entry(&mut self, id: EntryId) -> AppResult<HashSet<Entry>> {
        let target = self
            .get(id)
            .ok_or_else(|| AppError::not_found(format!("Entry not found: {id}")))?;

        let mut doomed = if target.is_directory() {
            descendants_of(&self.entries, id)
        } else {
            HashSet::new()
        };
        doomed.insert(id);

        let (removed, kept): (Vec<Entry>, Vec<Entry>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|e| doomed.contains(&e.id));
        self.entries = kept;
        let removed: HashSet<Entry> = removed.into_iter().collect();

        info!(entry_id = %id, removed = removed.len(), "Entry deleted");
        Ok(removed)
    }

    /// Replaces the whole list, e.g. with a freshly decoded remote table.
    pub fn replace_all(&mut self, entries: Vec<Entry>) {
        debug!(old = self.entries.len(), new = entries.len(), "Store replaced");
        self.entries = entries;
    }

    /// Builds the hierarchy view of the current contents.
    pub fn tree(&self) -> EntryTree {
        EntryTree::from_entries(&self.entries)
    }
}
