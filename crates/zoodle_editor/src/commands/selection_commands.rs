//! Selection commands.

use super::CommandResult;
use crate::core::{EditorState, SelectionMode};
use crate::scene::{NodeId, SceneGraph};

/// Change the selection.
///
/// The target is normalized on construction: composite children resolve
/// to their nearest selectable ancestor and layer roots resolve to nothing,
/// which clears the selection.
#[derive(Clone, Debug)]
pub struct SelectCommand {
    pub target: Option<NodeId>,
    pub mode: SelectionMode,
    old_selection: Vec<NodeId>,
}

impl SelectCommand {
    pub fn new(scene: &SceneGraph, node: Option<NodeId>, mode: SelectionMode) -> Self {
        Self {
            target: node.and_then(|id| Self::normalize(scene, id)),
            mode,
            old_selection: Vec::new(),
        }
    }

    /// A command that clears the selection.
    pub fn clearing() -> Self {
        Self {
            target: None,
            mode: SelectionMode::Replace,
            old_selection: Vec::new(),
        }
    }

    fn normalize(scene: &SceneGraph, id: NodeId) -> Option<NodeId> {
        let mut current = id;
        loop {
            let node = scene.get(current)?;
            match node.parent() {
                None => return None,
                Some(parent) if node.composite_child => current = parent,
                Some(_) => return Some(current),
            }
        }
    }

    pub(crate) fn execute(&mut self, state: &mut EditorState) -> CommandResult {
        self.old_selection = state.selection.selected().to_vec();

        match (self.target, self.mode) {
            (None, _) => state.selection.clear(),
            (Some(id), SelectionMode::Replace) => state.selection.replace([id]),
            (Some(id), SelectionMode::Toggle) => state.selection.toggle(id),
        }
        Ok(())
    }

    pub(crate) fn undo(&mut self, state: &mut EditorState) -> CommandResult {
        state.selection.replace(self.old_selection.iter().copied());
        Ok(())
    }
}
