//! World transform resolution.
//!
//! Composes a node's ancestor chain into a single translate/rotate/scale
//! triple expressed in its root's space. The rotation is recovered from
//! three tracked basis vectors, so the result only positions overlays; it
//! is never fed back into further composition.

use zoodle_math::consts::FRAC_PI_2;
use zoodle_math::{Transform, Vec3};

use super::{NodeId, SceneGraph};

/// `|forward.x|` above which the decomposition treats the basis as locked.
pub const GIMBAL_LOCK_THRESHOLD: f32 = 0.99999;

/// Resolve `id` into its root's coordinate space.
///
/// The root's own transform is excluded. Returns `None` for a stale id.
pub fn resolve(graph: &SceneGraph, id: NodeId) -> Option<Transform> {
    let mut translate = Vec3::ZERO;
    let mut scale = Vec3::ONE;
    let mut right = Vec3::X;
    let mut down = Vec3::Y;
    let mut forward = Vec3::Z;

    let mut current = graph.get(id)?;
    while current.parent().is_some() {
        let t = &current.transform;
        translate = translate.transform(t.translate, t.rotate, t.scale);
        right = right.rotate(t.rotate);
        down = down.rotate(t.rotate);
        forward = forward.rotate(t.rotate);
        scale = scale.multiply(t.scale);

        current = graph.get(current.parent()?)?;
    }

    Some(Transform::new(translate, decompose_basis(right, down, forward), scale))
}

/// Recover Euler angles from a rotated basis.
pub fn decompose_basis(right: Vec3, down: Vec3, forward: Vec3) -> Vec3 {
    if forward.x.abs() > GIMBAL_LOCK_THRESHOLD {
        let y = if forward.x > 0.0 { -FRAC_PI_2 } else { FRAC_PI_2 };
        Vec3::new(0.0, y, right.y.atan2(down.y))
    } else {
        Vec3::new(
            (-forward.y).atan2(forward.z),
            -forward.x.asin(),
            (-down.x).atan2(right.x),
        )
    }
}
