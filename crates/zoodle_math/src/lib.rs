//! # zoodle_math - Pseudo-3D Math Primitives
//!
//! Small vector and Euler-transform types used by the scene editor.
//! Rotations are Euler angles about local x/y/z, applied z, y, x.

pub mod vector;
pub mod transform;

pub use vector::*;
pub use transform::*;

/// Common math constants
pub mod consts {
    pub const PI: f32 = core::f32::consts::PI;
    pub const TAU: f32 = core::f32::consts::TAU;
    pub const FRAC_PI_2: f32 = core::f32::consts::FRAC_PI_2;
    pub const EPSILON: f32 = 1e-6;
}

/// One of the three local axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn name(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

/// Signed distance of the point `(x, y)` from the origin, measured along
/// the direction at `angle` radians.
#[inline]
pub fn axis_distance(x: f32, y: f32, angle: f32) -> f32 {
    x * angle.cos() + y * angle.sin()
}

pub mod prelude {
    pub use crate::vector::{Vec2, Vec3};
    pub use crate::transform::Transform;
    pub use crate::{axis_distance, Axis};
}
