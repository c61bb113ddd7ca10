//! Vector types for pseudo-3D scene math

use core::ops::{Add, Sub, Mul, Div, Neg, AddAssign, SubAssign, MulAssign};

use crate::Axis;

/// 2D vector, used for screen-space quantities
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const X: Self = Self::new(1.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Angle of the vector measured from +x, as `atan2(y, x)`.
    #[inline]
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

/// 3D vector with Euler rotation helpers.
///
/// Rotation follows the illustration convention: a rotation vector holds
/// angles in radians about the local x, y and z axes, applied in z, y, x
/// order. Positive y points down the screen.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Vector with a single component set.
    #[inline]
    pub fn along(axis: Axis, value: f32) -> Self {
        let mut v = Self::ZERO;
        v.set(axis, value);
        v
    }

    #[inline]
    pub fn get(self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    #[inline]
    pub fn set(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Component-wise product.
    #[inline]
    pub fn multiply(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Rotate by Euler angles: z first, then y, then x.
    #[inline]
    pub fn rotate(self, rotation: Self) -> Self {
        self.rotate_z(rotation.z).rotate_y(rotation.y).rotate_x(rotation.x)
    }

    #[inline]
    pub fn rotate_x(self, angle: f32) -> Self {
        let (y, z) = rotate_pair(self.y, self.z, angle);
        Self::new(self.x, y, z)
    }

    #[inline]
    pub fn rotate_y(self, angle: f32) -> Self {
        let (x, z) = rotate_pair(self.x, self.z, angle);
        Self::new(x, self.y, z)
    }

    #[inline]
    pub fn rotate_z(self, angle: f32) -> Self {
        let (x, y) = rotate_pair(self.x, self.y, angle);
        Self::new(x, y, self.z)
    }

    /// Child-to-parent transform: scale, then rotate, then translate.
    #[inline]
    pub fn transform(self, translate: Self, rotate: Self, scale: Self) -> Self {
        self.multiply(scale).rotate(rotate) + translate
    }

    #[inline]
    pub fn truncate(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

#[inline]
fn rotate_pair(a: f32, b: f32, angle: f32) -> (f32, f32) {
    if angle == 0.0 || angle % crate::consts::TAU == 0.0 {
        return (a, b);
    }
    let (sin, cos) = angle.sin_cos();
    (a * cos - b * sin, b * cos + a * sin)
}

// Operator implementations for Vec2
impl Add for Vec2 {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self { Self::new(self.x + rhs.x, self.y + rhs.y) }
}
impl Sub for Vec2 {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self { Self::new(self.x - rhs.x, self.y - rhs.y) }
}
impl Mul<f32> for Vec2 {
    type Output = Self;
    #[inline] fn mul(self, rhs: f32) -> Self { Self::new(self.x * rhs, self.y * rhs) }
}
impl Neg for Vec2 {
    type Output = Self;
    #[inline] fn neg(self) -> Self { Self::new(-self.x, -self.y) }
}

// Operator implementations for Vec3
impl Add for Vec3 {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self { Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z) }
}
impl Sub for Vec3 {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self { Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z) }
}
impl Mul<f32> for Vec3 {
    type Output = Self;
    #[inline] fn mul(self, rhs: f32) -> Self { Self::new(self.x * rhs, self.y * rhs, self.z * rhs) }
}
impl Div<f32> for Vec3 {
    type Output = Self;
    #[inline] fn div(self, rhs: f32) -> Self { Self::new(self.x / rhs, self.y / rhs, self.z / rhs) }
}
impl Neg for Vec3 {
    type Output = Self;
    #[inline] fn neg(self) -> Self { Self::new(-self.x, -self.y, -self.z) }
}
impl AddAssign for Vec3 {
    #[inline] fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}
impl SubAssign for Vec3 {
    #[inline] fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
}
impl MulAssign<f32> for Vec3 {
    #[inline] fn mul_assign(&mut self, rhs: f32) { *self = *self * rhs; }
}
