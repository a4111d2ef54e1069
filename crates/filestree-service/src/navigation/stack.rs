//! Navigation stack for descending into directories.

use serde::Serialize;

use filestree_core::error::AppError;
use filestree_core::result::AppResult;
use filestree_core::types::EntryId;
use filestree_entity::Entry;

use super::view::ROOT_TITLE;

/// One directory the user has descended into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationFrame {
    /// The directory ID.
    pub id: EntryId,
    /// The directory name at the time it was entered.
    pub name: String,
}

/// The path from the root to the directory currently shown.
///
/// The root is implicit: an empty stack means the root scope.
#[derive(Debug, Clone, Default)]
pub struct NavigationStack {
    frames: Vec<NavigationFrame>,
}

impl NavigationStack {
    /// Creates a stack positioned at the root.
    pub fn new() -> Self {
        Self::default()
    }

    /// The scope currently shown (None for the root).
    pub fn scope(&self) -> Option<EntryId> {
        self.frames.last().map(|f| f.id)
    }

    /// Title of the current scope.
    pub fn title(&self) -> &str {
        self.frames
            .last()
            .map(|f| f.name.as_str())
            .unwrap_or(ROOT_TITLE)
    }

    /// Number of directories below the root.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Titles from the root down to the current scope.
    pub fn breadcrumbs(&self) -> Vec<&str> {
        std::iter::once(ROOT_TITLE)
            .chain(self.frames.iter().map(|f| f.name.as_str()))
            .collect()
    }

    /// Descends into `entry`. Files cannot be entered.
    pub fn push(&mut self, entry: &Entry) -> AppResult<()> {
        if !entry.is_directory() {
            return Err(AppError::validation(format!(
                "'{}' is a file, not a directory",
                entry.name
            )));
        }
        self.frames.push(NavigationFrame {
            id: entry.id,
            name: entry.name.clone(),
        });
        Ok(())
    }

    /// Goes up one level; returns the frame left, or `None` at the root.
    pub fn pop(&mut self) -> Option<NavigationFrame> {
        self.frames.pop()
    }

    /// Returns to the root.
    pub fn reset(&mut self) {
        self.frames.clear();
    }

    /// Drops frames whose directory no longer exists in `entries`, along
    /// with every frame above them. Returns `true` if the scope changed.
    pub fn retain_existing(&mut self, entries: &[Entry]) -> bool {
        let cut = self
            .frames
            .iter()
            .position(|f| !entries.iter().any(|e| e.id == f.id && e.is_directory()));
        match cut {
            Some(index) => {
                self.frames.truncate(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use filestree_core::error::ErrorKind;
    use filestree_entity::EntryType;

    #[test]
    fn test_push_pop_and_breadcrumbs() {
        let docs = Entry::create(None, EntryType::Directory, "docs");
        let work = Entry::create(Some(docs.id), EntryType::Directory, "work");
        let mut stack = NavigationStack::new();

        assert_eq!(stack.scope(), None);
        assert_eq!(stack.title(), "Entries");

        stack.push(&docs).unwrap();
        stack.push(&work).unwrap();
        assert_eq!(stack.scope(), Some(work.id));
        assert_eq!(stack.breadcrumbs(), vec!["Entries", "docs", "work"]);

        assert_eq!(stack.pop().map(|f| f.id), Some(work.id));
        assert_eq!(stack.scope(), Some(docs.id));
        stack.pop();
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_files_are_not_enterable() {
        let file = Entry::create(None, EntryType::File, "notes");
        let mut stack = NavigationStack::new();
        let err = stack.push(&file).unwrap_err();
        assert!(err.is(ErrorKind::Validation));
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn test_retain_existing_cuts_at_first_missing() {
        let a = Entry::create(None, EntryType::Directory, "a");
        let b = Entry::create(Some(a.id), EntryType::Directory, "b");
        let c = Entry::create(Some(b.id), EntryType::Directory, "c");
        let mut stack = NavigationStack::new();
        stack.push(&a).unwrap();
        stack.push(&b).unwrap();
        stack.push(&c).unwrap();

        assert!(!stack.retain_existing(&[a.clone(), b.clone(), c.clone()]));
        assert!(stack.retain_existing(&[a.clone(), c]));
        assert_eq!(stack.scope(), Some(a.id));
    }
}
