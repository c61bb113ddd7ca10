//! Axis widgets for visual manipulation.
//!
//! Widgets are rebuilt from scratch whenever the selection or a selected
//! transform changes. Each selected node gets an anchor in the gizmo layer
//! placed at the node's resolved world transform; the active tool then
//! hangs its parts off those anchors.

mod rotate;
mod translate;

pub use rotate::draw_rotate_widget;
pub use translate::draw_translate_widget;

use crate::commands::CommandError;
use crate::core::SelectionManager;
use crate::scene::{resolve, Node, NodeId, SceneGraph};
use crate::viewport::Layers;

/// Gizmo axis colors.
pub mod colors {
    use crate::scene::Color;
    use zoodle_math::Axis;

    /// Rose
    pub const X_AXIS: Color = Color::rgb(0xcc, 0x22, 0x55);
    /// Lime
    pub const Y_AXIS: Color = Color::rgb(0x44, 0xaa, 0x22);
    /// Blueberry
    pub const Z_AXIS: Color = Color::rgb(0x33, 0x55, 0x99);
    /// Lace
    pub const CENTER: Color = Color::rgb(0xff, 0xf4, 0xe8);

    pub fn axis(axis: Axis) -> Color {
        match axis {
            Axis::X => X_AXIS,
            Axis::Y => Y_AXIS,
            Axis::Z => Z_AXIS,
        }
    }
}

/// Clear the gizmo layer and create one anchor per selected node.
///
/// Each anchor carries the selected node's world transform and links back
/// to it through `stands_for`. Selected ids that no longer resolve are
/// skipped.
pub fn rebuild_anchors(
    graph: &mut SceneGraph,
    layers: &Layers,
    selection: &SelectionManager,
) -> Result<Vec<NodeId>, CommandError> {
    let root = layers.gizmo.root;
    graph.clear_children(root);

    let mut anchors = Vec::with_capacity(selection.count());
    for &target in selection.selected() {
        let Some(world) = resolve(graph, target) else {
            log::warn!("Selected {} no longer exists", target);
            continue;
        };
        let mut anchor = Node::anchor().with_transform(world);
        anchor.stands_for = Some(target);
        anchors.push(graph.add(root, anchor)?);
    }
    Ok(anchors)
}

/// Inverse of the anchor's x scale, so widgets keep a constant size.
pub(crate) fn inverse_scale(graph: &SceneGraph, anchor: NodeId) -> Result<f32, CommandError> {
    let s = graph.node(anchor)?.transform.scale.x;
    Ok(if s == 0.0 { 1.0 } else { 1.0 / s })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{GizmoRole, Layer};
    use crate::viewport::SurfaceId;
    use zoodle_math::{Axis, Vec3};

    fn setup() -> (SceneGraph, Layers, NodeId) {
        let mut graph = SceneGraph::new();
        let layers = Layers::new(
            &mut graph,
            [SurfaceId::SCENE, SurfaceId::HIGHLIGHT, SurfaceId::GIZMO],
            10.0,
            Vec3::ZERO,
        );
        let node = graph
            .add(layers.scene.root, Node::shape().with_translate(Vec3::new(1.0, 2.0, 3.0)).with_scale(Vec3::splat(2.0)))
            .unwrap();
        (graph, layers, node)
    }

    #[test]
    fn test_anchors_follow_selection() {
        let (mut graph, layers, node) = setup();
        let mut selection = SelectionManager::new();
        selection.toggle(node);

        let anchors = rebuild_anchors(&mut graph, &layers, &selection).unwrap();
        assert_eq!(anchors.len(), 1);
        let anchor = graph.get(anchors[0]).unwrap();
        assert_eq!(anchor.layer(), Layer::Gizmo);
        assert_eq!(anchor.stands_for, Some(node));
        assert_eq!(anchor.transform.translate, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(inverse_scale(&graph, anchors[0]).unwrap(), 0.5);
    }

    #[test]
    fn test_translate_widget_parts() {
        let (mut graph, layers, node) = setup();
        let mut selection = SelectionManager::new();
        selection.toggle(node);
        let anchors = rebuild_anchors(&mut graph, &layers, &selection).unwrap();
        draw_translate_widget(&mut graph, &anchors, &Default::default()).unwrap();

        let parts = graph.flatten(anchors[0]);
        // anchor, origin, three shafts with a tip each
        assert_eq!(parts.len(), 8);
        let roles: Vec<_> = parts.iter().filter_map(|&id| graph.get(id).unwrap().gizmo_role).collect();
        assert!(roles.contains(&GizmoRole::Origin));
        for axis in Axis::ALL {
            assert!(roles.contains(&GizmoRole::Shaft(axis)));
            assert!(roles.contains(&GizmoRole::Tip(axis)));
        }

        let x_shaft = parts
            .iter()
            .copied()
            .find(|&id| graph.get(id).unwrap().gizmo_role == Some(GizmoRole::Shaft(Axis::X)))
            .unwrap();
        let shaft = graph.get(x_shaft).unwrap();
        assert_eq!(shaft.transform.translate, Vec3::new(1.5, 0.0, 0.0));
        assert_eq!(shaft.transform.scale, Vec3::splat(0.5));
        assert_eq!(shaft.color, Some(colors::X_AXIS));
    }

    #[test]
    fn test_rotate_widget_parts() {
        let (mut graph, layers, node) = setup();
        let mut selection = SelectionManager::new();
        selection.toggle(node);
        let anchors = rebuild_anchors(&mut graph, &layers, &selection).unwrap();
        draw_rotate_widget(&mut graph, &anchors, &Default::default()).unwrap();

        let children = graph.children(anchors[0]).to_vec();
        assert_eq!(children.len(), 4);
        let rings: Vec<_> = children
            .iter()
            .map(|&id| graph.get(id).unwrap())
            .filter(|n| matches!(n.gizmo_role, Some(GizmoRole::Ring(_))))
            .collect();
        assert_eq!(rings.len(), 3);
        assert!(rings.iter().all(|r| r.diameter == 10.0 && r.stroke == Some(0.75)));
    }

    #[test]
    fn test_rebuild_clears_previous_widgets() {
        let (mut graph, layers, node) = setup();
        let mut selection = SelectionManager::new();
        selection.toggle(node);
        let first = rebuild_anchors(&mut graph, &layers, &selection).unwrap();
        draw_rotate_widget(&mut graph, &first, &Default::default()).unwrap();

        selection.clear();
        let second = rebuild_anchors(&mut graph, &layers, &selection).unwrap();
        assert!(second.is_empty());
        assert!(!graph.contains(first[0]));
        assert!(graph.children(layers.gizmo.root).is_empty());
    }
}
