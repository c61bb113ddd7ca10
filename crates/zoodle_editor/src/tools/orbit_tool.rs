//! Orbit tool: drag to turn the camera.

use zoodle_math::consts::TAU;
use zoodle_math::{Vec2, Vec3};

use super::ToolResult;
use crate::core::EditorState;

/// Rotates the scene root, which acts as the camera for all layers.
#[derive(Clone, Debug, Default)]
pub struct OrbitTool {
    rotate_start: Option<Vec3>,
}

impl OrbitTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn start(&mut self, state: &mut EditorState) -> ToolResult {
        self.rotate_start = state
            .scene
            .get(state.layers.scene.root)
            .map(|root| root.transform.rotate);
        log::debug!("Orbit started at {:?}", self.rotate_start);
        ToolResult::Handled
    }

    pub(crate) fn drag(&mut self, state: &mut EditorState, offset: Vec2) -> ToolResult {
        let Some(start) = self.rotate_start else {
            return ToolResult::None;
        };
        let display_size = state.layers.viewport.display_size();
        if display_size <= 0.0 {
            return ToolResult::None;
        }

        let factor = TAU * state.preferences.orbit_sensitivity / display_size;
        let yaw = offset.x * factor;
        let pitch = offset.y * factor;

        let Some(root) = state.scene.get_mut(state.layers.scene.root) else {
            return ToolResult::None;
        };
        root.transform.rotate.x = start.x - pitch;
        root.transform.rotate.y = start.y - yaw;
        state.layers.sync(&mut state.scene);
        ToolResult::Handled
    }

    pub(crate) fn end(&mut self) -> ToolResult {
        self.rotate_start = None;
        ToolResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EditorPreferences;
    use approx::assert_relative_eq;
    use zoodle_math::consts::PI;

    #[test]
    fn test_orbit_rotates_camera_from_start() {
        let mut state = EditorState::new(EditorPreferences::default());
        state.layers.resize(400.0, 200.0);
        let start = state.scene.get(state.layers.scene.root).unwrap().transform.rotate;

        let mut tool = OrbitTool::new();
        tool.start(&mut state);
        tool.drag(&mut state, Vec2::new(10.0, 0.0));
        tool.drag(&mut state, Vec2::new(20.0, -5.0));

        let rotate = state.scene.get(state.layers.scene.root).unwrap().transform.rotate;
        assert_relative_eq!(rotate.y, start.y - 20.0 / 200.0 * TAU * PI, epsilon = 1e-5);
        assert_relative_eq!(rotate.x, start.x + 5.0 / 200.0 * TAU * PI, epsilon = 1e-5);

        // Overlays follow
        let gizmo_root = state.scene.get(state.layers.gizmo.root).unwrap().transform.rotate;
        assert_eq!(gizmo_root, rotate);
        assert_eq!(tool.end(), ToolResult::Handled);
        assert_eq!(state.history.undo_count(), 0);
    }

    #[test]
    fn test_drag_without_start_is_ignored() {
        let mut state = EditorState::new(EditorPreferences::default());
        state.layers.resize(100.0, 100.0);
        let mut tool = OrbitTool::new();
        assert_eq!(tool.drag(&mut state, Vec2::new(5.0, 5.0)), ToolResult::None);
    }
}
