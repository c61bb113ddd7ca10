//! Tool type and gesture plumbing.

use std::fmt;

use zoodle_math::Vec2;

use super::{OrbitTool, RotateTool, TemporaryTool, TranslateTool};
use crate::commands::CommandError;
use crate::core::{EditorState, GizmoPreferences};
use crate::scene::{Layer, NodeId, SceneGraph};
use crate::viewport::SurfaceId;

/// Selectable tool kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToolKind {
    Orbit,
    Translate,
    Rotate,
}

impl ToolKind {
    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::Orbit => "Orbit",
            ToolKind::Translate => "Translate",
            ToolKind::Rotate => "Rotate",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of tool operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolResult {
    /// No action taken
    None,
    /// Tool handled the input; only the camera changed
    Handled,
    /// Node transforms changed; overlays and observers must refresh
    Refresh,
    /// Tool completed an action and recorded it
    Completed,
    /// A temporary tool finished; restore the tool it wraps
    Restore,
}

/// What a gesture was pressed on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pick {
    pub node: Option<NodeId>,
    /// `None` when the surface is not bound to a layer
    pub layer: Option<Layer>,
}

/// Pointer event phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
    /// Press and release without a drag, reported by the host
    Click,
}

/// Pointer input from the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub pointer_id: u32,
    pub kind: PointerEventKind,
    pub surface: SurfaceId,
    /// Node the host hit-tested under the pointer
    pub target: Option<NodeId>,
    /// Position in surface pixels
    pub position: Vec2,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, surface: SurfaceId, target: Option<NodeId>, position: Vec2) -> Self {
        Self {
            pointer_id: 0,
            kind,
            surface,
            target,
            position,
        }
    }

    pub fn with_pointer(mut self, pointer_id: u32) -> Self {
        self.pointer_id = pointer_id;
        self
    }
}

/// The current tool.
#[derive(Debug)]
pub enum Tool {
    Orbit(OrbitTool),
    Translate(TranslateTool),
    Rotate(RotateTool),
    /// Performs one tool's gesture while showing another tool's widgets
    Temporary(TemporaryTool),
}

impl Default for Tool {
    fn default() -> Self {
        Tool::Translate(TranslateTool::new())
    }
}

impl From<ToolKind> for Tool {
    fn from(kind: ToolKind) -> Self {
        match kind {
            ToolKind::Orbit => Tool::Orbit(OrbitTool::new()),
            ToolKind::Translate => Tool::Translate(TranslateTool::new()),
            ToolKind::Rotate => Tool::Rotate(RotateTool::new()),
        }
    }
}

impl Tool {
    /// Wrap `style` so that `substance` runs the next gesture.
    pub fn temporary(style: Tool, substance: Tool, auto_restore: bool) -> Self {
        Tool::Temporary(TemporaryTool::new(style, substance, auto_restore))
    }

    /// Kind of the tool whose widgets are shown.
    pub fn kind(&self) -> ToolKind {
        match self {
            Tool::Orbit(_) => ToolKind::Orbit,
            Tool::Translate(_) => ToolKind::Translate,
            Tool::Rotate(_) => ToolKind::Rotate,
            Tool::Temporary(t) => t.style().kind(),
        }
    }

    pub fn is_temporary(&self) -> bool {
        matches!(self, Tool::Temporary(_))
    }

    /// Pointer pressed.
    pub fn start(&mut self, state: &mut EditorState, pick: Pick) -> ToolResult {
        match self {
            Tool::Orbit(t) => t.start(state),
            Tool::Translate(t) => t.start(state, pick),
            Tool::Rotate(t) => t.start(state, pick),
            Tool::Temporary(t) => t.start(state, pick),
        }
    }

    /// Pointer moved while pressed. `offset` is measured from the press.
    pub fn drag(&mut self, state: &mut EditorState, offset: Vec2) -> ToolResult {
        match self {
            Tool::Orbit(t) => t.drag(state, offset),
            Tool::Translate(t) => t.drag(state, offset),
            Tool::Rotate(t) => t.drag(state, offset),
            Tool::Temporary(t) => t.drag(state, offset),
        }
    }

    /// Pointer released or the gesture was cancelled.
    pub fn end(&mut self, state: &mut EditorState, offset: Vec2) -> ToolResult {
        match self {
            Tool::Orbit(t) => t.end(),
            Tool::Translate(t) => t.end(state, offset),
            Tool::Rotate(t) => t.end(state, offset),
            Tool::Temporary(t) => t.end(state, offset),
        }
    }

    /// Hang this tool's widget parts off the gizmo anchors.
    pub fn draw_widget(
        &self,
        graph: &mut SceneGraph,
        anchors: &[NodeId],
        prefs: &GizmoPreferences,
    ) -> Result<(), CommandError> {
        match self {
            Tool::Orbit(_) => Ok(()),
            Tool::Translate(_) => crate::viewport::gizmos::draw_translate_widget(graph, anchors, prefs),
            Tool::Rotate(_) => crate::viewport::gizmos::draw_rotate_widget(graph, anchors, prefs),
            Tool::Temporary(t) => t.style().draw_widget(graph, anchors, prefs),
        }
    }

    /// Unwrap a temporary tool into the tool it stands in for.
    pub(crate) fn into_style(self) -> Tool {
        match self {
            Tool::Temporary(t) => t.into_style(),
            other => other,
        }
    }
}
