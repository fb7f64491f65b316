//! # Snapshot History
//!
//! Linear undo/redo over immutable collection snapshots.
//!
//! ## Design
//!
//! - `snapshots[0]` is the initial (empty) collection
//! - `cursor` indexes the snapshot currently shown
//! - Commit truncates everything after the cursor, appends, moves the cursor
//! - Undo/redo only move the cursor
//! - Snapshots are `Arc`-shared, so keeping many of them is cheap
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut history = History::new();
//! history.commit(next.clone());
//!
//! let previous = history.undo()?;
//! let again = history.redo()?;
//! ```

use thiserror::Error;
use tracing::debug;
use weave_model::ElementCollection;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HistoryError {
    #[error("Nothing to undo")]
    NothingToUndo,

    #[error("Nothing to redo")]
    NothingToRedo,
}

#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<ElementCollection>,
    cursor: usize,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,
}

impl History {
    /// Unlimited history starting from the empty collection
    pub fn new() -> Self {
        Self::with_max_levels(0)
    }

    pub fn with_max_levels(max_levels: usize) -> Self {
        Self::starting_at(ElementCollection::empty(), max_levels)
    }

    /// History whose first snapshot is `initial`
    pub fn starting_at(initial: ElementCollection, max_levels: usize) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
            max_levels,
        }
    }

    /// Record a new state; any redo branch is discarded
    pub fn commit(&mut self, collection: ElementCollection) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(collection);
        self.cursor += 1;

        // Trim if exceeded max levels, keeping the cursor on the same snapshot
        if self.max_levels > 0 && self.snapshots.len() > self.max_levels + 1 {
            self.snapshots.remove(0);
            self.cursor -= 1;
        }

        debug!(cursor = self.cursor, len = self.snapshots.len(), "Committed snapshot");
    }

    /// Step back one snapshot and return it
    pub fn undo(&mut self) -> Result<ElementCollection, HistoryError> {
        if !self.can_undo() {
            debug!("Undo at the start of history");
            return Err(HistoryError::NothingToUndo);
        }

        self.cursor -= 1;
        Ok(self.current().clone())
    }

    /// Step forward one snapshot and return it
    pub fn redo(&mut self) -> Result<ElementCollection, HistoryError> {
        if !self.can_redo() {
            debug!("Redo at the end of history");
            return Err(HistoryError::NothingToRedo);
        }

        self.cursor += 1;
        Ok(self.current().clone())
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Snapshot under the cursor
    pub fn current(&self) -> &ElementCollection {
        // The snapshot list is never empty and the cursor never leaves it
        &self.snapshots[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of snapshots, the initial one included
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.len() <= 1
    }

    pub fn undo_levels(&self) -> usize {
        self.cursor
    }

    pub fn redo_levels(&self) -> usize {
        self.snapshots.len() - self.cursor - 1
    }

    /// Drop every snapshot but the current one, which becomes the new start
    pub fn clear(&mut self) {
        let current = self.current().clone();
        self.snapshots = vec![current];
        self.cursor = 0;
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weave_model::{Element, ElementKind};

    fn with(ids: &[&str]) -> ElementCollection {
        ElementCollection::from_vec(
            ids.iter()
                .map(|id| Element::new((*id).into(), ElementKind::Text, 0.0, 0.0))
                .collect(),
        )
    }

    #[test]
    fn test_history_creation() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert!(history.current().is_empty());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_redo_walks_snapshots() {
        let mut history = History::new();
        history.commit(with(&["a"]));
        history.commit(with(&["a", "b"]));

        assert_eq!(history.undo().unwrap(), with(&["a"]));
        assert_eq!(history.undo().unwrap(), ElementCollection::empty());
        assert_eq!(history.redo().unwrap(), with(&["a"]));
        assert_eq!(history.redo_levels(), 1);
    }

    #[test]
    fn test_boundaries_are_reported_and_change_nothing() {
        let mut history = History::new();
        assert_eq!(history.undo(), Err(HistoryError::NothingToUndo));
        assert_eq!(history.cursor(), 0);

        history.commit(with(&["a"]));
        assert_eq!(history.redo(), Err(HistoryError::NothingToRedo));
        assert_eq!(history.cursor(), 1);
    }

    #[test]
    fn test_commit_truncates_redo_branch() {
        let mut history = History::new();
        history.commit(with(&["a"]));
        history.commit(with(&["a", "b"]));
        history.undo().unwrap();

        history.commit(with(&["a", "c"]));
        assert!(!history.can_redo());
        assert_eq!(history.len(), 3);
        assert_eq!(history.current(), &with(&["a", "c"]));
    }

    #[test]
    fn test_max_levels_enforced() {
        let mut history = History::with_max_levels(2);
        history.commit(with(&["a"]));
        history.commit(with(&["b"]));
        history.commit(with(&["c"]));

        assert_eq!(history.undo_levels(), 2);
        assert_eq!(history.current(), &with(&["c"]));
        history.undo().unwrap();
        assert_eq!(history.undo().unwrap(), with(&["a"]));
        assert!(!history.can_undo());
    }

    #[test]
    fn test_snapshots_share_storage_with_committed_value() {
        let mut history = History::new();
        let collection = with(&["a"]);
        history.commit(collection.clone());
        assert!(history.current().ptr_eq(&collection));
    }
}
