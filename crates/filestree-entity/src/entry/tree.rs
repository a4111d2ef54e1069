//! Hierarchical views built from the flat entry list.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use filestree_core::types::EntryId;

use super::kind::EntryType;
use super::model::Entry;

/// A node in an entry tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryNode {
    /// Entry ID.
    pub id: EntryId,
    /// Entry name.
    pub name: String,
    /// File or directory.
    pub entry_type: EntryType,
    /// Depth level (0 for root entries).
    pub depth: usize,
    /// Child nodes in display order; always empty for files.
    pub children: Vec<EntryNode>,
}

impl EntryNode {
    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Number of nodes below this one, at any depth.
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.descendant_count())
            .sum()
    }
}

/// A complete entry tree rooted at the root scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryTree {
    /// The root node(s) of the tree.
    pub roots: Vec<EntryNode>,
    /// Total number of nodes reachable from the root.
    pub total_entries: usize,
    /// Entries whose parent chain never reaches the root: missing or
    /// non-directory parents, or a parent cycle.
    pub unreachable: Vec<EntryId>,
}

impl EntryTree {
    /// Builds a tree from a flat list of entries.
    pub fn from_entries(entries: &[Entry]) -> Self {
        let mut by_parent: HashMap<Option<EntryId>, Vec<&Entry>> = HashMap::new();
        for entry in entries {
            by_parent.entry(entry.parent_id).or_default().push(entry);
        }
        for siblings in by_parent.values_mut() {
            siblings.sort();
        }

        let mut visited = HashSet::new();
        let roots = build_level(&by_parent, None, 0, &mut visited);
        let unreachable = entries
            .iter()
            .filter(|e| !visited.contains(&e.id))
            .map(|e| e.id)
            .collect();

        Self {
            roots,
            total_entries: visited.len(),
            unreachable,
        }
    }
}

fn build_level(
    by_parent: &HashMap<Option<EntryId>, Vec<&Entry>>,
    scope: Option<EntryId>,
    depth: usize,
    visited: &mut HashSet<EntryId>,
) -> Vec<EntryNode> {
    let Some(siblings) = by_parent.get(&scope) else {
        return Vec::new();
    };

    let mut nodes = Vec::with_capacity(siblings.len());
    for entry in siblings {
        if !visited.insert(entry.id) {
            continue;
        }
        let children = if entry.is_directory() {
            build_level(by_parent, Some(entry.id), depth + 1, visited)
        } else {
            Vec::new()
        };
        nodes.push(EntryNode {
            id: entry.id,
            name: entry.name.clone(),
            entry_type: entry.entry_type,
            depth,
            children,
        });
    }
    nodes
}
