//! Descendant closure for cascade deletes.
//!
//! One parent → children adjacency map is built per call, then a single
//! traversal collects every reachable id. Cost is O(n) in
//! the number of entries. The visited set makes parent cycles in malformed
//! tables terminate.

use std::collections::{HashMap, HashSet};

use filestree_core::types::EntryId;
use filestree_entity::Entry;

/// Every id whose parent chain reaches `ancestor`, excluding `ancestor`.
pub fn descendants_of(entries: &[Entry], ancestor: EntryId) -> HashSet<EntryId> {
    let mut children: HashMap<EntryId, Vec<EntryId>> = HashMap::new();
    for entry in entries {
        if let Some(parent) = entry.parent_id {
            children.entry(parent).or_default().push(entry.id);
        }
    }

    let mut found = HashSet::new();
    let mut pending = vec![ancestor];
    while let Some(id) = pending.pop() {
        let Some(direct) = children.get(&id) else {
            continue;
        };
        for &child in direct {
            if child != ancestor && found.insert(child) {
                pending.push(child);
            }
        }
    }
    found
}
