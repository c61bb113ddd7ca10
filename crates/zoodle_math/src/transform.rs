//! Euler transform triple

use crate::vector::Vec3;

/// Translate, Euler rotate and scale of a node.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    pub translate: Vec3,
    pub rotate: Vec3,
    pub scale: Vec3,
}

impl Transform {
    /// Identity transform
    pub const IDENTITY: Self = Self {
        translate: Vec3::ZERO,
        rotate: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    #[inline]
    pub const fn new(translate: Vec3, rotate: Vec3, scale: Vec3) -> Self {
        Self { translate, rotate, scale }
    }

    #[inline]
    pub fn from_translate(translate: Vec3) -> Self {
        Self { translate, ..Self::IDENTITY }
    }

    /// Set translate (builder pattern)
    #[inline]
    pub fn with_translate(mut self, translate: Vec3) -> Self {
        self.translate = translate;
        self
    }

    /// Set rotate (builder pattern)
    #[inline]
    pub fn with_rotate(mut self, rotate: Vec3) -> Self {
        self.rotate = rotate;
        self
    }

    /// Set scale (builder pattern)
    #[inline]
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Uniform scale (builder pattern)
    #[inline]
    pub fn with_uniform_scale(self, scale: f32) -> Self {
        self.with_scale(Vec3::splat(scale))
    }

    /// Map a point from this transform's local space into its parent's.
    #[inline]
    pub fn apply(&self, point: Vec3) -> Vec3 {
        point.transform(self.translate, self.rotate, self.scale)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FRAC_PI_2;
    use approx::assert_relative_eq;

    #[test]
    fn test_transform_identity() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Transform::IDENTITY.apply(p), p);
    }

    #[test]
    fn test_transform_apply() {
        let t = Transform::from_translate(Vec3::new(1.0, 0.0, 0.0))
            .with_rotate(Vec3::new(0.0, 0.0, FRAC_PI_2))
            .with_uniform_scale(2.0);
        let p = t.apply(Vec3::X);
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 2.0, epsilon = 1e-6);
    }
}
