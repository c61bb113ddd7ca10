//! Editor session: pointer gestures, command history and overlays.
//!
//! The host feeds pointer events through [`Editor::on_pointer_event`] and
//! calls [`Editor::on_frame`] once per tick. Everything else is plain
//! method calls from panels and menus.

use std::mem;
use std::path::Path;

use zoodle_math::Vec2;

use crate::commands::{Command, EditCommand, SelectCommand};
use crate::core::{EditorPreferences, EditorState, SelectionMode};
use crate::error::{EditorError, EditorResult};
use crate::panels::{self, OutlineItem, PropertyEntry, PropertyReading, SelectionHeader};
use crate::scene::{Layer, NodeId, Property, PropertyValue, SceneGraph};
use crate::tools::{Pick, PointerEvent, PointerEventKind, Tool, ToolKind, ToolResult};
use crate::viewport::{gizmos, update_highlights, RenderHost, SurfaceId};

/// Pointer that owns the current gesture and where it pressed.
#[derive(Clone, Copy, Debug)]
struct Gesture {
    pointer_id: u32,
    origin: Vec2,
}

/// An editing session.
pub struct Editor {
    state: EditorState,
    tool: Tool,
    gesture: Option<Gesture>,
    /// Live property edit not yet committed to history
    pending_edit: Option<EditCommand>,
    /// Scene or overlays changed since the host last asked
    view_dirty: bool,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorPreferences::default())
    }
}

impl Editor {
    pub fn new(preferences: EditorPreferences) -> Self {
        Self::from_state(EditorState::new(preferences))
    }

    /// Bind the layers to the host's scene, highlight and gizmo surfaces.
    pub fn with_surfaces(preferences: EditorPreferences, surfaces: [SurfaceId; 3]) -> Self {
        Self::from_state(EditorState::with_surfaces(preferences, surfaces))
    }

    /// Start a session with preferences read from `path`.
    pub fn from_config_file(path: &Path) -> EditorResult<Self> {
        Ok(Self::new(EditorPreferences::load(path)?))
    }

    /// Start a session with the user's preferences, or defaults when the
    /// user has none.
    pub fn from_user_config() -> Self {
        Self::new(EditorPreferences::load_or_default())
    }

    fn from_state(state: EditorState) -> Self {
        Self {
            state,
            tool: Tool::default(),
            gesture: None,
            pending_edit: None,
            view_dirty: true,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn scene(&self) -> &SceneGraph {
        &self.state.scene
    }

    /// Mutable scene access for scene construction.
    pub fn scene_mut(&mut self) -> &mut SceneGraph {
        self.view_dirty = true;
        &mut self.state.scene
    }

    /// Root of the user's scene; new top-level nodes go here.
    pub fn scene_root(&self) -> NodeId {
        self.state.layers.scene.root
    }

    pub fn selection(&self) -> &[NodeId] {
        self.state.selection.selected()
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    pub fn is_gesture_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Whether the selection changed since the last call.
    pub fn take_selection_dirty(&mut self) -> bool {
        self.state.selection.take_dirty()
    }

    /// Whether the scene or overlays changed since the last call.
    pub fn take_view_dirty(&mut self) -> bool {
        mem::take(&mut self.view_dirty)
    }

    // ---------------------------------------------------------------------
    // History
    // ---------------------------------------------------------------------

    /// Run a command and record it.
    ///
    /// A pending property edit is committed first so history keeps the
    /// order in which changes happened. A failing command is not recorded.
    pub fn execute(&mut self, mut cmd: Command) -> EditorResult<()> {
        self.commit_property_edit();

        let result = cmd.execute(&mut self.state);
        self.refresh();
        if let Err(e) = result {
            log::error!("{} failed: {}", cmd.description(), e);
            return Err(e.into());
        }
        self.state.history.push(cmd);
        Ok(())
    }

    /// Record a command whose effect is already applied.
    pub fn did(&mut self, cmd: Command) {
        self.commit_property_edit();
        self.state.did(cmd);
        self.refresh();
    }

    /// Undo the last command. Returns `false` when there was nothing to undo.
    pub fn undo(&mut self) -> EditorResult<bool> {
        self.ensure_idle()?;
        self.commit_property_edit();

        let Some(mut cmd) = self.state.history.pop_undo() else {
            return Ok(false);
        };
        let result = cmd.undo(&mut self.state);
        self.refresh();
        match result {
            Ok(()) => {
                log::debug!("Undid {}", cmd.description());
                self.state.history.push_to_redo(cmd);
                Ok(true)
            }
            Err(e) => {
                log::error!("Undo of {} failed: {}", cmd.description(), e);
                self.state.history.push_to_undo(cmd);
                Err(e.into())
            }
        }
    }

    /// Redo the last undone command. Returns `false` when there was nothing
    /// to redo.
    pub fn redo(&mut self) -> EditorResult<bool> {
        self.ensure_idle()?;
        self.commit_property_edit();

        let Some(mut cmd) = self.state.history.pop_redo() else {
            return Ok(false);
        };
        let result = cmd.execute(&mut self.state);
        self.refresh();
        match result {
            Ok(()) => {
                log::debug!("Redid {}", cmd.description());
                self.state.history.push_to_undo(cmd);
                Ok(true)
            }
            Err(e) => {
                log::error!("Redo of {} failed: {}", cmd.description(), e);
                self.state.history.push_to_redo(cmd);
                Err(e.into())
            }
        }
    }

    // ---------------------------------------------------------------------
    // Selection
    // ---------------------------------------------------------------------

    /// Select `node` through the history. `None` clears the selection.
    pub fn select(&mut self, node: Option<NodeId>, mode: SelectionMode) -> EditorResult<()> {
        let cmd = SelectCommand::new(&self.state.scene, node, mode);
        self.execute(cmd.into())
    }

    /// Select the ancestor `offset` steps above the single selected node,
    /// as listed in the header breadcrumbs.
    pub fn select_breadcrumb(&mut self, offset: usize) -> EditorResult<()> {
        let [selected] = self.state.selection.selected() else {
            return Err(EditorError::NoSelection);
        };
        let mut target = *selected;
        for _ in 0..offset {
            match self.state.scene.parent(target) {
                Some(parent) => target = parent,
                None => break,
            }
        }
        self.select(Some(target), SelectionMode::Replace)
    }

    // ---------------------------------------------------------------------
    // Tools and input
    // ---------------------------------------------------------------------

    /// Switch tools. Refused while a gesture is in progress.
    pub fn set_tool(&mut self, kind: ToolKind) -> EditorResult<()> {
        if self.gesture.is_some() {
            log::warn!("Cannot switch to {} during a gesture", kind);
            return Err(EditorError::GestureActive);
        }
        self.tool = kind.into();
        self.refresh();
        Ok(())
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.layers.resize(width, height);
        self.view_dirty = true;
    }

    /// Zoom all three layers together.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.state.layers.set_zoom(zoom);
        self.view_dirty = true;
    }

    /// Feed one pointer event through the current tool.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> ToolResult {
        let layer = match self.state.layers.layer_for_surface(event.surface) {
            Ok(layer) => Some(layer),
            Err(e) => {
                log::error!("{}", e);
                None
            }
        };
        let pick = Pick { node: event.target, layer };

        let result = match event.kind {
            PointerEventKind::Down => self.press(event, pick),
            PointerEventKind::Move => match self.owned_offset(event) {
                Some(offset) => self.tool.drag(&mut self.state, offset),
                None => ToolResult::None,
            },
            PointerEventKind::Up | PointerEventKind::Cancel => match self.owned_offset(event) {
                Some(offset) => {
                    self.gesture = None;
                    log::debug!("Gesture ended ({:?})", event.kind);
                    self.tool.end(&mut self.state, offset)
                }
                None => ToolResult::None,
            },
            PointerEventKind::Click => self.click(pick),
        };
        self.apply_result(result);
        result
    }

    fn press(&mut self, event: &PointerEvent, pick: Pick) -> ToolResult {
        if let Some(gesture) = self.gesture {
            log::debug!(
                "Ignoring press from pointer {} while pointer {} is captured",
                event.pointer_id,
                gesture.pointer_id
            );
            return ToolResult::None;
        }
        // The gesture's command must land after any open panel edit.
        self.commit_property_edit();

        let hits_child = pick.node.is_some_and(|id| self.state.scene.parent(id).is_some());
        if !hits_child {
            let style = mem::take(&mut self.tool);
            self.tool = Tool::temporary(style, ToolKind::Orbit.into(), true);
        }

        self.gesture = Some(Gesture {
            pointer_id: event.pointer_id,
            origin: event.position,
        });
        log::debug!("Gesture started by pointer {} on {:?}", event.pointer_id, pick.layer);
        self.tool.start(&mut self.state, pick)
    }

    /// Offset from the press, if `event` comes from the capturing pointer.
    fn owned_offset(&self, event: &PointerEvent) -> Option<Vec2> {
        let gesture = self.gesture?;
        (gesture.pointer_id == event.pointer_id).then(|| event.position - gesture.origin)
    }

    fn click(&mut self, pick: Pick) -> ToolResult {
        if self.gesture.is_some() || pick.layer != Some(Layer::Scene) {
            return ToolResult::None;
        }
        match self.select(pick.node, SelectionMode::Toggle) {
            Ok(()) => ToolResult::Completed,
            Err(_) => ToolResult::None,
        }
    }

    fn apply_result(&mut self, result: ToolResult) {
        match result {
            ToolResult::None => {}
            ToolResult::Handled => self.view_dirty = true,
            ToolResult::Refresh | ToolResult::Completed => self.refresh(),
            ToolResult::Restore => {
                self.tool = mem::take(&mut self.tool).into_style();
                self.refresh();
            }
        }
    }

    fn ensure_idle(&self) -> EditorResult<()> {
        if self.gesture.is_some() {
            log::warn!("Refusing history change during a gesture");
            return Err(EditorError::GestureActive);
        }
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Overlays and frames
    // ---------------------------------------------------------------------

    /// Rebuild highlights and widgets from the selection.
    pub fn refresh(&mut self) {
        let state = &mut self.state;
        let color = state.preferences.highlight();
        if let Err(e) = update_highlights(&mut state.scene, &state.layers, &state.selection, color) {
            log::error!("Failed to update highlights: {}", e);
        }
        match gizmos::rebuild_anchors(&mut state.scene, &state.layers, &state.selection) {
            Ok(anchors) => {
                if let Err(e) = self.tool.draw_widget(&mut state.scene, &anchors, &state.preferences.gizmo) {
                    log::error!("Failed to draw widgets: {}", e);
                }
            }
            Err(e) => log::error!("Failed to update widgets: {}", e),
        }
        self.view_dirty = true;
    }

    /// Per-tick step: sync the overlay cameras and hand every layer to the
    /// render host.
    pub fn on_frame(&mut self, host: &mut impl RenderHost) {
        self.state.layers.sync(&mut self.state.scene);
        for layer in Layer::ALL {
            host.update_render_graph(layer, self.state.layers.get(layer), &self.state.scene);
        }
    }

    // ---------------------------------------------------------------------
    // Properties panel
    // ---------------------------------------------------------------------

    pub fn read_property(&self, property: Property) -> PropertyReading {
        panels::read_property(&self.state.scene, self.selection(), property)
    }

    pub fn panel_entries(&self) -> Vec<PropertyEntry> {
        panels::panel_entries(&self.state.scene, self.selection())
    }

    pub fn header(&self) -> SelectionHeader {
        SelectionHeader::build(&self.state.scene, self.selection())
    }

    pub fn outline(&self) -> Option<OutlineItem> {
        panels::build_outline(&self.state.scene, self.scene_root(), &self.state.selection)
    }

    /// Live edit from a panel input. Applied immediately; recorded as one
    /// command when the edit is committed. Refused over mixed values.
    pub fn input_property(&mut self, property: Property, value: PropertyValue) -> EditorResult<()> {
        self.live_edit(property, value, false)
    }

    /// Like [`input_property`](Self::input_property), but replaces mixed
    /// values across the selection.
    pub fn overwrite_property(&mut self, property: Property, value: PropertyValue) -> EditorResult<()> {
        self.live_edit(property, value, true)
    }

    fn live_edit(&mut self, property: Property, value: PropertyValue, overwrite: bool) -> EditorResult<()> {
        if self.gesture.is_some() {
            log::warn!("Refusing edit of '{}' during a gesture", property);
            return Err(EditorError::GestureActive);
        }
        let targets = self.state.selection.selected().to_vec();
        if targets.is_empty() {
            return Err(EditorError::NoSelection);
        }

        let continues = self
            .pending_edit
            .as_ref()
            .is_some_and(|p| p.property() == property && p.targets() == targets.as_slice());
        if !continues {
            self.commit_property_edit();
            if !overwrite && self.read_property(property).is_mixed() {
                log::warn!("Refusing edit of mixed '{}'", property);
                return Err(EditorError::MixedValue(property));
            }
            let cmd = EditCommand::new(&self.state.scene, targets, property, value, None)?;
            self.pending_edit = Some(cmd);
        }

        let Some(pending) = self.pending_edit.as_mut() else {
            return Ok(());
        };
        pending.set_value(value);
        let result = pending.execute(&mut self.state);
        if let Err(e) = result {
            log::error!("Edit of '{}' failed: {}", property, e);
            if let Some(mut failed) = self.pending_edit.take() {
                if let Err(e) = failed.undo(&mut self.state) {
                    log::error!("Could not restore '{}': {}", property, e);
                }
            }
            self.refresh();
            return Err(e.into());
        }
        self.refresh();
        Ok(())
    }

    /// Record the pending live edit, if any. Returns whether one was recorded.
    pub fn commit_property_edit(&mut self) -> bool {
        match self.pending_edit.take() {
            Some(cmd) => {
                self.state.did(cmd.into());
                true
            }
            None => false,
        }
    }

    /// Revert the pending live edit without recording it.
    pub fn cancel_property_edit(&mut self) {
        if let Some(mut cmd) = self.pending_edit.take() {
            if let Err(e) = cmd.undo(&mut self.state) {
                log::error!("Could not cancel edit: {}", e);
            }
            self.refresh();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Node, ShapeKind};
    use crate::viewport::Illustration;
    use zoodle_math::Vec3;

    fn editor() -> (Editor, NodeId, NodeId) {
        let mut editor = Editor::default();
        editor.resize(400.0, 400.0);
        let root = editor.scene_root();
        let a = editor.scene_mut().add(root, Node::new(ShapeKind::Ellipse)).unwrap();
        let b = editor.scene_mut().add(root, Node::new(ShapeKind::Ellipse).with_diameter(3.0)).unwrap();
        (editor, a, b)
    }

    fn event(kind: PointerEventKind, surface: SurfaceId, target: Option<NodeId>, x: f32, y: f32) -> PointerEvent {
        PointerEvent::new(kind, surface, target, Vec2::new(x, y))
    }

    #[test]
    fn test_failed_command_not_recorded() {
        let (mut editor, a, _) = editor();
        let cmd = EditCommand::new(editor.scene(), vec![a], Property::Fill, PropertyValue::Number(1.0), Some(vec![PropertyValue::Bool(false)]))
            .unwrap();
        assert!(editor.execute(cmd.into()).is_err());
        assert!(!editor.state().history.can_undo());
    }

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let (mut editor, _, _) = editor();
        assert!(!editor.undo().unwrap());
        assert!(!editor.redo().unwrap());
    }

    #[test]
    fn test_live_edit_coalesces_into_one_command() {
        let (mut editor, a, _) = editor();
        editor.select(Some(a), SelectionMode::Replace).unwrap();
        for d in [2.0, 3.0, 4.0] {
            editor.input_property(Property::Diameter, PropertyValue::Number(d)).unwrap();
        }
        assert_eq!(editor.scene().get(a).unwrap().diameter, 4.0);
        // Select only so far
        assert_eq!(editor.state().history.undo_count(), 1);

        assert!(editor.commit_property_edit());
        assert!(!editor.commit_property_edit());
        assert_eq!(editor.state().history.undo_count(), 2);
        assert!(editor.scene().get(a).unwrap().path_revision > 0);

        editor.undo().unwrap();
        assert_eq!(editor.scene().get(a).unwrap().diameter, 1.0);
    }

    #[test]
    fn test_live_edit_refused_over_mixed_value() {
        let (mut editor, a, b) = editor();
        editor.select(Some(a), SelectionMode::Toggle).unwrap();
        editor.select(Some(b), SelectionMode::Toggle).unwrap();
        assert!(editor.read_property(Property::Diameter).is_mixed());

        let err = editor.input_property(Property::Diameter, PropertyValue::Number(5.0)).unwrap_err();
        assert!(matches!(err, EditorError::MixedValue(Property::Diameter)));
        assert_eq!(editor.scene().get(a).unwrap().diameter, 1.0);

        editor.overwrite_property(Property::Diameter, PropertyValue::Number(5.0)).unwrap();
        assert_eq!(
            editor.read_property(Property::Diameter),
            PropertyReading::Uniform(PropertyValue::Number(5.0))
        );
    }

    #[test]
    fn test_cancel_property_edit_restores() {
        let (mut editor, a, _) = editor();
        editor.select(Some(a), SelectionMode::Replace).unwrap();
        editor.input_property(Property::Fill, PropertyValue::Bool(true)).unwrap();
        editor.cancel_property_edit();
        assert!(!editor.scene().get(a).unwrap().fill);
        assert_eq!(editor.state().history.undo_count(), 1);
    }

    #[test]
    fn test_execute_commits_pending_edit_first() {
        let (mut editor, a, b) = editor();
        editor.select(Some(a), SelectionMode::Replace).unwrap();
        editor.input_property(Property::Fill, PropertyValue::Bool(true)).unwrap();
        editor.select(Some(b), SelectionMode::Replace).unwrap();
        // Select, Edit, Select
        assert_eq!(editor.state().history.undo_count(), 3);
    }

    #[test]
    fn test_click_toggles_and_empty_click_clears() {
        let (mut editor, a, _) = editor();
        editor.on_pointer_event(&event(PointerEventKind::Click, SurfaceId::SCENE, Some(a), 0.0, 0.0));
        assert_eq!(editor.selection(), &[a]);
        assert!(editor.take_selection_dirty());

        editor.on_pointer_event(&event(PointerEventKind::Click, SurfaceId::SCENE, None, 0.0, 0.0));
        assert!(editor.selection().is_empty());
    }

    #[test]
    fn test_press_on_empty_space_orbits_and_restores() {
        let (mut editor, _, _) = editor();
        editor.set_tool(ToolKind::Rotate).unwrap();
        let camera = editor.scene().get(editor.scene_root()).unwrap().transform.rotate;

        editor.on_pointer_event(&event(PointerEventKind::Down, SurfaceId::SCENE, None, 10.0, 10.0));
        assert!(editor.tool().is_temporary());
        assert_eq!(editor.tool().kind(), ToolKind::Rotate);
        assert!(matches!(editor.set_tool(ToolKind::Orbit), Err(EditorError::GestureActive)));

        editor.on_pointer_event(&event(PointerEventKind::Move, SurfaceId::SCENE, None, 50.0, 10.0));
        let turned = editor.scene().get(editor.scene_root()).unwrap().transform.rotate;
        assert_ne!(turned.y, camera.y);
        assert_eq!(turned.x, camera.x);

        let result = editor.on_pointer_event(&event(PointerEventKind::Up, SurfaceId::SCENE, None, 50.0, 10.0));
        assert_eq!(result, ToolResult::Restore);
        assert!(!editor.tool().is_temporary());
        assert_eq!(editor.tool().kind(), ToolKind::Rotate);
        assert!(!editor.state().history.can_undo());
    }

    #[test]
    fn test_other_pointers_are_ignored_during_gesture() {
        let (mut editor, _, _) = editor();
        let root = editor.scene_root();
        let camera = editor.scene().get(root).unwrap().transform.rotate;

        editor.on_pointer_event(&event(PointerEventKind::Down, SurfaceId::SCENE, None, 0.0, 0.0).with_pointer(1));
        let stray = event(PointerEventKind::Move, SurfaceId::SCENE, None, 90.0, 90.0).with_pointer(2);
        assert_eq!(editor.on_pointer_event(&stray), ToolResult::None);
        assert_eq!(editor.scene().get(root).unwrap().transform.rotate, camera);

        let stray_up = event(PointerEventKind::Up, SurfaceId::SCENE, None, 0.0, 0.0).with_pointer(2);
        editor.on_pointer_event(&stray_up);
        assert!(editor.is_gesture_active());

        editor.on_pointer_event(&event(PointerEventKind::Cancel, SurfaceId::SCENE, None, 0.0, 0.0).with_pointer(1));
        assert!(!editor.is_gesture_active());
    }

    #[test]
    fn test_unsupported_surface_still_runs_gesture() {
        let (mut editor, _, _) = editor();
        let result = editor.on_pointer_event(&event(PointerEventKind::Down, SurfaceId(42), None, 0.0, 0.0));
        assert_eq!(result, ToolResult::Handled);
        assert!(editor.is_gesture_active());
    }

    #[test]
    fn test_select_breadcrumb_walks_up() {
        let (mut editor, a, _) = editor();
        let child = editor.scene_mut().add(a, Node::anchor()).unwrap();
        editor.select(Some(child), SelectionMode::Replace).unwrap();
        assert_eq!(editor.header().to_string(), "Ellipse / Anchor");

        editor.select_breadcrumb(1).unwrap();
        assert_eq!(editor.selection(), &[a]);

        editor.select(None, SelectionMode::Replace).unwrap();
        assert!(matches!(editor.select_breadcrumb(0), Err(EditorError::NoSelection)));
    }

    #[derive(Default)]
    struct RecordingHost {
        frames: Vec<(Layer, NodeId)>,
    }

    impl RenderHost for RecordingHost {
        fn update_render_graph(&mut self, layer: Layer, illustration: &Illustration, _graph: &SceneGraph) {
            self.frames.push((layer, illustration.root));
        }
    }

    #[test]
    fn test_on_frame_syncs_and_renders_every_layer() {
        let (mut editor, _, _) = editor();
        let root = editor.scene_root();
        editor.scene_mut().get_mut(root).unwrap().transform.rotate = Vec3::new(0.5, 0.0, 0.0);

        let mut host = RecordingHost::default();
        editor.on_frame(&mut host);
        assert_eq!(host.frames.len(), 3);
        assert_eq!(host.frames[0], (Layer::Scene, root));

        let gizmo_root = editor.state().layers.gizmo.root;
        assert_eq!(editor.scene().get(gizmo_root).unwrap().transform.rotate.x, 0.5);
    }
}
