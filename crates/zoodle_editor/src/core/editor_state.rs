//! Central editor state - single source of truth.
//!
//! Commands and tools read and write the scene through `EditorState`.
//! Modifications that should be undoable go through the command system.

use super::{EditorPreferences, SelectionManager, UndoHistory};
use crate::commands::Command;
use crate::scene::SceneGraph;
use crate::viewport::{Layers, SurfaceId};

/// Scene, layers, selection and history of one editing session.
pub struct EditorState {
    /// Node arena shared by all layers
    pub scene: SceneGraph,
    pub layers: Layers,
    pub selection: SelectionManager,
    pub history: UndoHistory,
    pub preferences: EditorPreferences,
}

impl EditorState {
    /// Create an empty session bound to the default surfaces.
    pub fn new(preferences: EditorPreferences) -> Self {
        Self::with_surfaces(
            preferences,
            [SurfaceId::SCENE, SurfaceId::HIGHLIGHT, SurfaceId::GIZMO],
        )
    }

    /// Create an empty session bound to the given scene, highlight and
    /// gizmo surfaces.
    pub fn with_surfaces(preferences: EditorPreferences, surfaces: [SurfaceId; 3]) -> Self {
        let mut scene = SceneGraph::new();
        let layers = Layers::new(
            &mut scene,
            surfaces,
            preferences.zoom,
            preferences.camera_rotate,
        );
        Self {
            scene,
            layers,
            selection: SelectionManager::new(),
            history: UndoHistory::with_capacity(preferences.history_limit),
            preferences,
        }
    }

    /// Record a command that has already been applied.
    pub fn did(&mut self, cmd: Command) {
        self.history.push(cmd);
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(EditorPreferences::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Layer;

    #[test]
    fn test_new_state_has_three_roots() {
        let state = EditorState::default();
        assert_eq!(state.scene.len(), 3);
        for layer in Layer::ALL {
            let root = state.layers.root(layer);
            assert!(state.scene.is_root(root));
            assert_eq!(state.scene.get(root).unwrap().layer(), layer);
        }
        assert!(state.selection.is_empty());
        assert!(!state.history.can_undo());
    }

    #[test]
    fn test_camera_from_preferences() {
        let state = EditorState::default();
        let camera = state.scene.get(state.layers.scene.root).unwrap().transform.rotate;
        assert_eq!(camera, state.preferences.camera_rotate);
        assert_eq!(state.layers.scene.zoom, 10.0);
    }
}
