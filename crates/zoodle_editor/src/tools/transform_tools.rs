//! Transform tools (Translate, Rotate).
//!
//! Both tools drag the selection along one axis picked on the gizmo. The
//! 2D pointer offset is projected onto the screen direction of the picked
//! widget part, captured when the gesture starts.

use zoodle_math::consts::TAU;
use zoodle_math::{axis_distance, Axis, Vec2, Vec3};

use super::{Pick, ToolResult};
use crate::commands::{RotateCommand, TranslateCommand};
use crate::core::EditorState;
use crate::scene::{resolve, GizmoRole, Layer, Node, NodeId, SceneGraph};

/// State of an axis drag between press and release.
#[derive(Clone, Debug)]
struct AxisDrag {
    axis: Axis,
    targets: Vec<NodeId>,
    start_values: Vec<Vec3>,
    /// Screen angle of the picked widget's forward axis
    normal_angle: f32,
    /// World x scale of the node the widget stands for
    world_scale: f32,
    /// Last delta written to the targets
    delta: f32,
}

impl AxisDrag {
    /// Validate the pick and snapshot the selection.
    ///
    /// Returns `None` when nothing is selected or the pick is not an axis
    /// part of a widget.
    fn begin(state: &EditorState, pick: Pick, read: fn(&Node) -> Vec3) -> Option<Self> {
        let targets = state.selection.selected().to_vec();
        if targets.is_empty() || pick.layer != Some(Layer::Gizmo) {
            return None;
        }

        let graph = &state.scene;
        let mut widget = pick.node?;
        let role = graph.get(widget)?.gizmo_role?;
        let axis = role.axis()?;
        if let GizmoRole::Tip(_) = role {
            widget = graph.parent(widget)?;
        }

        let normal = graph.render_normal(widget)?;
        let world_scale = Self::stands_for(graph, widget)
            .and_then(|target| resolve(graph, target))
            .map(|world| world.scale.x)
            .filter(|&s| s != 0.0)
            .unwrap_or(1.0);

        let start_values = targets
            .iter()
            .map(|&id| graph.get(id).map(read))
            .collect::<Option<Vec<_>>>()?;

        Some(Self {
            axis,
            targets,
            start_values,
            normal_angle: normal.y.atan2(normal.x),
            world_scale,
            delta: 0.0,
        })
    }

    /// Scene node whose gizmo anchor owns `widget`.
    fn stands_for(graph: &SceneGraph, widget: NodeId) -> Option<NodeId> {
        let mut current = Some(widget);
        while let Some(id) = current {
            let node = graph.get(id)?;
            if node.stands_for.is_some() {
                return node.stands_for;
            }
            current = node.parent();
        }
        None
    }

    /// Write `start + delta` on the drag axis of every target.
    fn apply(&mut self, state: &mut EditorState, delta: f32, write: fn(&mut Node) -> &mut Vec3) {
        self.delta = delta;
        for (&id, start) in self.targets.iter().zip(&self.start_values) {
            let Some(node) = state.scene.get_mut(id) else {
                log::warn!("Drag target {} no longer exists", id);
                continue;
            };
            write(node).set(self.axis, start.get(self.axis) + delta);
        }
    }
}

/// Translate tool for moving nodes along an axis.
#[derive(Clone, Debug, Default)]
pub struct TranslateTool {
    drag: Option<AxisDrag>,
}

impl TranslateTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Axis being dragged, if a gesture is active.
    pub fn mode(&self) -> Option<Axis> {
        self.drag.as_ref().map(|d| d.axis)
    }

    pub(crate) fn start(&mut self, state: &mut EditorState, pick: Pick) -> ToolResult {
        self.drag = AxisDrag::begin(state, pick, |n| n.transform.translate);
        match &self.drag {
            Some(drag) => {
                log::debug!("Translate along {} for {} nodes", drag.axis.name(), drag.targets.len());
                ToolResult::Handled
            }
            None => ToolResult::None,
        }
    }

    pub(crate) fn drag(&mut self, state: &mut EditorState, offset: Vec2) -> ToolResult {
        let Some(drag) = self.drag.as_mut() else {
            return ToolResult::None;
        };
        let zoom = state.layers.scene.zoom;
        if zoom == 0.0 {
            return ToolResult::None;
        }
        let delta = axis_distance(offset.x, offset.y, drag.normal_angle) / -zoom / drag.world_scale;
        drag.apply(state, delta, |n| &mut n.transform.translate);
        ToolResult::Refresh
    }

    pub(crate) fn end(&mut self, state: &mut EditorState, offset: Vec2) -> ToolResult {
        if self.drag.is_none() {
            return ToolResult::None;
        }
        self.drag(state, offset);
        let Some(drag) = self.drag.take() else {
            return ToolResult::None;
        };

        let delta = Vec3::along(drag.axis, drag.delta);
        match TranslateCommand::with_old_values(drag.targets, delta, drag.start_values) {
            Ok(cmd) => {
                state.did(cmd.into());
                ToolResult::Completed
            }
            Err(e) => {
                log::error!("Translate gesture not recorded: {}", e);
                ToolResult::Refresh
            }
        }
    }
}

/// Rotate tool for turning nodes about an axis.
#[derive(Clone, Debug, Default)]
pub struct RotateTool {
    drag: Option<AxisDrag>,
}

impl RotateTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Axis being dragged, if a gesture is active.
    pub fn mode(&self) -> Option<Axis> {
        self.drag.as_ref().map(|d| d.axis)
    }

    pub(crate) fn start(&mut self, state: &mut EditorState, pick: Pick) -> ToolResult {
        self.drag = AxisDrag::begin(state, pick, |n| n.transform.rotate);
        match &self.drag {
            Some(drag) => {
                log::debug!("Rotate about {} for {} nodes", drag.axis.name(), drag.targets.len());
                ToolResult::Handled
            }
            None => ToolResult::None,
        }
    }

    pub(crate) fn drag(&mut self, state: &mut EditorState, offset: Vec2) -> ToolResult {
        let Some(drag) = self.drag.as_mut() else {
            return ToolResult::None;
        };
        let display_size = state.layers.viewport.display_size();
        if display_size <= 0.0 {
            return ToolResult::None;
        }
        // Rings are dragged tangentially, a quarter turn from their normal.
        let distance = axis_distance(offset.x, offset.y, drag.normal_angle + TAU / 4.0);
        let delta = distance / display_size * TAU * state.preferences.rotate_sensitivity;
        drag.apply(state, delta, |n| &mut n.transform.rotate);
        ToolResult::Refresh
    }

    pub(crate) fn end(&mut self, state: &mut EditorState, offset: Vec2) -> ToolResult {
        if self.drag.is_none() {
            return ToolResult::None;
        }
        self.drag(state, offset);
        let Some(drag) = self.drag.take() else {
            return ToolResult::None;
        };

        let delta = Vec3::along(drag.axis, drag.delta);
        match RotateCommand::with_old_values(drag.targets, delta, drag.start_values) {
            Ok(cmd) => {
                state.did(cmd.into());
                ToolResult::Completed
            }
            Err(e) => {
                log::error!("Rotate gesture not recorded: {}", e);
                ToolResult::Refresh
            }
        }
    }
}
