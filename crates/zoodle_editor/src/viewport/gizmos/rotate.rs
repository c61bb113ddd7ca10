//! Rotate widget: an origin dot and one ring per axis.

use zoodle_math::consts::TAU;
use zoodle_math::{Axis, Vec3};

use super::{colors, inverse_scale};
use crate::commands::CommandError;
use crate::core::GizmoPreferences;
use crate::scene::{GizmoRole, Node, NodeId, SceneGraph, ShapeKind};

/// Rotation that turns a ring's face normal onto `axis`.
fn ring_rotation(axis: Axis) -> Vec3 {
    match axis {
        Axis::X => Vec3::new(0.0, TAU / 4.0, 0.0),
        Axis::Y => Vec3::new(TAU / 4.0, 0.0, 0.0),
        Axis::Z => Vec3::ZERO,
    }
}

/// Hang rotation rings off every anchor.
pub fn draw_rotate_widget(
    graph: &mut SceneGraph,
    anchors: &[NodeId],
    prefs: &GizmoPreferences,
) -> Result<(), CommandError> {
    for &anchor in anchors {
        let scale = Vec3::splat(inverse_scale(graph, anchor)?);

        let origin = Node::shape()
            .with_stroke(prefs.origin_stroke)
            .with_color(colors::CENTER)
            .with_scale(scale)
            .with_role(GizmoRole::Origin);
        graph.add(anchor, origin)?;

        for axis in Axis::ALL {
            let ring = Node::new(ShapeKind::Ellipse)
                .with_diameter(prefs.ring_diameter)
                .with_stroke(prefs.ring_stroke)
                .with_color(colors::axis(axis))
                .with_rotate(ring_rotation(axis))
                .with_scale(scale)
                .with_role(GizmoRole::Ring(axis));
            graph.add(anchor, ring)?;
        }
    }
    Ok(())
}
