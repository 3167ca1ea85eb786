//! 3D vector math.

use std::fmt;

use approx::AbsDiffEq;

use crate::{EPSILON, Float, MathError};

/// 3D floating-point vector.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct VectorF {
    /// X component.
    pub x: Float,
    /// Y component.
    pub y: Float,
    /// Z component.
    pub z: Float,
}

/// 3D integer vector.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct VectorI {
    /// X component.
    pub x: i32,
    /// Y component.
    pub y: i32,
    /// Z component.
    pub z: i32,
}

impl_componentwise_ops!(impl for VectorF<Float> { x, y, z });
impl_componentwise_ops!(impl for VectorI<i32> { x, y, z });

impl std::ops::Div<Float> for VectorF {
    type Output = VectorF;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Float) -> Self::Output {
        let mult = 1.0 / rhs;
        self * mult
    }
}
impl std::ops::DivAssign<Float> for VectorF {
    fn div_assign(&mut self, rhs: Float) {
        *self = *self / rhs;
    }
}

impl fmt::Display for VectorF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}, {}>", self.x, self.y, self.z)
    }
}
impl fmt::Display for VectorI {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}, {}>", self.x, self.y, self.z)
    }
}

impl From<VectorI> for VectorF {
    fn from(v: VectorI) -> Self {
        VectorF::new(v.x as Float, v.y as Float, v.z as Float)
    }
}

impl VectorF {
    /// Zero vector.
    pub const ZERO: Self = Self::splat(0.0);
    /// Unit vector along the X axis.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit vector along the Y axis.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit vector along the Z axis.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Constructs a vector from its components.
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z }
    }
    /// Constructs a vector with all three components equal to `v`.
    pub const fn splat(v: Float) -> Self {
        Self::new(v, v, v)
    }

    /// Returns the dot product of this vector with another.
    pub fn dot(self, rhs: VectorF) -> Float {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }
    /// Returns the cross product of this vector with another.
    pub fn cross(self, rhs: VectorF) -> VectorF {
        VectorF::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Returns the squared magnitude of the vector.
    pub fn abs_squared(self) -> Float {
        self.dot(self)
    }
    /// Returns the magnitude of the vector.
    pub fn abs(self) -> Float {
        self.abs_squared().sqrt()
    }

    /// Returns a normalized copy of the vector.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ZeroVector`] if every component is zero.
    pub fn normalize(self) -> Result<VectorF, MathError> {
        if self == VectorF::ZERO {
            return Err(MathError::ZeroVector);
        }
        Ok(self / self.abs())
    }
    /// Returns a normalized copy of the vector, or the vector unchanged if it
    /// is zero.
    #[must_use]
    pub fn normalize_or_unchanged(self) -> VectorF {
        let r = self.abs();
        if r == 0.0 { self } else { self / r }
    }

    /// Returns the elevation angle above the XZ plane, in radians.
    pub fn phi(self) -> Float {
        let r = self.abs();
        if r == 0.0 {
            return 0.0;
        }
        (self.y / r).clamp(-1.0, 1.0).asin()
    }
    /// Returns the azimuth angle around the Y axis, measured from +Z toward
    /// +X, in radians.
    pub fn theta(self) -> Float {
        self.x.atan2(self.z)
    }
    /// Returns the radius in spherical coordinates.
    pub fn r_spherical(self) -> Float {
        self.abs()
    }

    /// Rounds each component toward negative infinity.
    pub fn floor(self) -> VectorI {
        VectorI::new(
            self.x.floor() as i32,
            self.y.floor() as i32,
            self.z.floor() as i32,
        )
    }
}

impl VectorI {
    /// Zero vector.
    pub const ZERO: Self = Self::splat(0);

    /// Constructs a vector from its components.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
    /// Constructs a vector with all three components equal to `v`.
    pub const fn splat(v: i32) -> Self {
        Self::new(v, v, v)
    }

    /// Returns the dot product of this vector with another.
    pub fn dot(self, rhs: VectorI) -> i32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }
    /// Returns the cross product of this vector with another.
    pub fn cross(self, rhs: VectorI) -> VectorI {
        VectorI::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }
    /// Returns the squared magnitude of the vector.
    pub fn abs_squared(self) -> i32 {
        self.dot(self)
    }
    /// Returns the magnitude of the vector.
    pub fn abs(self) -> Float {
        (self.abs_squared() as Float).sqrt()
    }
}

/// Returns the parameter `t` along the segment from `a` to `b` at which it
/// crosses the plane `dot(normal, p) + d = 0`.
///
/// The result is only meaningful when `a` and `b` are on opposite sides of the
/// plane.
pub fn find_intersection_point(a: VectorF, b: VectorF, normal: VectorF, d: Float) -> Float {
    (a.dot(normal) + d) / (a - b).dot(normal)
}

impl AbsDiffEq for VectorF {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_vector_ops() {
        let v1 = VectorF::new(1.0, 2.0, -10.0);
        let v2 = VectorF::new(-5.0, 0.0, 0.0);
        assert_eq!(v1 + v2, VectorF::new(-4.0, 2.0, -10.0));
        assert_eq!(v2 - v1, VectorF::new(-6.0, -2.0, 10.0));
        assert_eq!(-v1, VectorF::new(-1.0, -2.0, 10.0));
        assert_eq!(v1 * 2.0, 2.0 * v1);
        assert_eq!(v1 * v2, VectorF::new(-5.0, 0.0, 0.0));

        let mut v3 = v1;
        v3 += v2;
        v3 -= v1;
        assert_eq!(v3, v2);
    }

    #[test]
    pub fn test_dot_and_cross_product() {
        let v1 = VectorF::new(1.0, 2.0, -10.0);
        let v2 = VectorF::new(-5.0, 16.0, 0.0);
        assert_eq!(v1.dot(v2), 27.0);
        assert_eq!(VectorF::X.cross(VectorF::Y), VectorF::Z);
        assert_eq!(VectorF::Y.cross(VectorF::X), -VectorF::Z);

        let a = VectorI::new(1, 0, 0);
        let b = VectorI::new(0, 1, 0);
        assert_eq!(a.cross(b), VectorI::new(0, 0, 1));
        assert_eq!(VectorI::new(3, 4, 0).abs(), 5.0);
    }

    #[test]
    pub fn test_normalize() {
        assert_eq!(VectorF::ZERO.normalize(), Err(MathError::ZeroVector));
        assert_eq!(VectorF::ZERO.normalize_or_unchanged(), VectorF::ZERO);
        let n = VectorF::new(3.0, 0.0, 4.0).normalize().expect("nonzero");
        crate::assert_approx_eq!(n, VectorF::new(0.6, 0.0, 0.8));
    }

    #[test]
    pub fn test_spherical() {
        assert_eq!(VectorF::ZERO.phi(), 0.0);
        crate::assert_approx_eq!(VectorF::Y.phi(), std::f32::consts::FRAC_PI_2);
        crate::assert_approx_eq!(VectorF::X.theta(), std::f32::consts::FRAC_PI_2);
        assert_eq!(VectorF::Z.theta(), 0.0);
        assert_eq!(VectorF::new(0.0, 3.0, 4.0).r_spherical(), 5.0);
    }

    #[test]
    pub fn test_int_conversion() {
        assert_eq!(
            VectorF::new(1.5, -0.5, 2.0).floor(),
            VectorI::new(1, -1, 2),
        );
        assert_eq!(VectorF::from(VectorI::new(1, -2, 3)), VectorF::new(1.0, -2.0, 3.0));
    }

    #[test]
    pub fn test_find_intersection_point() {
        let a = VectorF::new(0.0, 0.0, 0.0);
        let b = VectorF::new(1.0, 0.0, 0.0);
        // plane x = 0.25
        let t = find_intersection_point(a, b, -VectorF::X, 0.25);
        crate::assert_approx_eq!(t, 0.25);
    }
}
