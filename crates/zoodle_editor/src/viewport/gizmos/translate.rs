//! Translate widget: an origin dot and one arrow per axis.

use zoodle_math::consts::TAU;
use zoodle_math::{Axis, Vec3};

use super::{colors, inverse_scale};
use crate::commands::CommandError;
use crate::core::GizmoPreferences;
use crate::scene::{GizmoRole, Node, NodeId, SceneGraph, ShapeKind};

/// Rotation that turns a shaft's local z onto `axis`.
fn shaft_rotation(axis: Axis) -> Vec3 {
    match axis {
        Axis::X => Vec3::new(0.0, -TAU / 4.0, 0.0),
        Axis::Y => Vec3::new(-TAU / 4.0, 0.0, 0.0),
        Axis::Z => Vec3::ZERO,
    }
}

/// Hang translate arrows off every anchor.
pub fn draw_translate_widget(
    graph: &mut SceneGraph,
    anchors: &[NodeId],
    prefs: &GizmoPreferences,
) -> Result<(), CommandError> {
    for &anchor in anchors {
        let inv = inverse_scale(graph, anchor)?;

        let origin = Node::shape()
            .with_stroke(prefs.origin_stroke)
            .with_color(colors::CENTER)
            .with_scale(Vec3::splat(inv))
            .with_role(GizmoRole::Origin);
        graph.add(anchor, origin)?;

        for axis in Axis::ALL {
            let color = colors::axis(axis);
            let shaft = Node::shape()
                .with_length(prefs.shaft_half_length * 2.0)
                .with_stroke(prefs.shaft_stroke)
                .with_color(color)
                .with_rotate(shaft_rotation(axis))
                .with_translate(Vec3::along(axis, prefs.shaft_offset * inv))
                .with_scale(Vec3::splat(inv))
                .with_role(GizmoRole::Shaft(axis));
            let shaft = graph.add(anchor, shaft)?;

            let tip = Node::new(ShapeKind::Cone)
                .with_diameter(prefs.tip_diameter)
                .with_length(prefs.tip_length)
                .with_stroke(prefs.tip_stroke)
                .with_color(color)
                .with_translate(Vec3::new(0.0, 0.0, prefs.shaft_half_length))
                .with_role(GizmoRole::Tip(axis));
            graph.add(shaft, tip)?;
        }
    }
    Ok(())
}
