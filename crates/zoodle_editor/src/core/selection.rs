//! Ordered node selection.
//!
//! Reads are open to every observer. Writes are crate-private: only
//! `SelectCommand` changes the selection, so undo/redo always sees it.

use crate::scene::NodeId;

/// How a select action combines with the current selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Replace current selection (outliner click)
    Replace,
    /// Toggle selection state (viewport click)
    #[default]
    Toggle,
}

/// Manages node selection. Order is selection order; no duplicates.
#[derive(Clone, Debug, Default)]
pub struct SelectionManager {
    selected: Vec<NodeId>,
    /// Whether selection has changed since observers last looked
    dirty: bool,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all selected nodes.
    pub fn selected(&self) -> &[NodeId] {
        &self.selected
    }

    /// Get number of selected nodes.
    pub fn count(&self) -> usize {
        self.selected.len()
    }

    /// Check if any nodes are selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Check if a specific node is selected.
    pub fn is_selected(&self, id: NodeId) -> bool {
        self.selected.contains(&id)
    }

    /// Check and clear the dirty flag.
    pub fn take_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    /// Remove if present, append otherwise.
    pub(crate) fn toggle(&mut self, id: NodeId) {
        if let Some(index) = self.selected.iter().position(|&s| s == id) {
            self.selected.remove(index);
        } else {
            self.selected.push(id);
        }
        self.dirty = true;
    }

    /// Replace the selection, dropping duplicates and keeping first-seen order.
    pub(crate) fn replace(&mut self, ids: impl IntoIterator<Item = NodeId>) {
        self.selected.clear();
        for id in ids {
            if !self.selected.contains(&id) {
                self.selected.push(id);
            }
        }
        self.dirty = true;
    }

    /// Clear all selection.
    pub(crate) fn clear(&mut self) {
        if !self.selected.is_empty() {
            self.selected.clear();
            self.dirty = true;
        }
    }
}
