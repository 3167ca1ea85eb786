//! Linear interpolation.

use crate::{Color, Float, VectorF};

/// Value that can be linearly interpolated.
pub trait Interpolate: Sized {
    /// Returns `a` when `t` is 0 and `b` when `t` is 1, extrapolating linearly
    /// outside that range.
    fn interpolate(t: Float, a: Self, b: Self) -> Self;
}

/// Linearly interpolates between `a` (when `t` is 0) and `b` (when `t` is 1).
pub fn interpolate<T: Interpolate>(t: Float, a: T, b: T) -> T {
    T::interpolate(t, a, b)
}

impl Interpolate for Float {
    fn interpolate(t: Float, a: Self, b: Self) -> Self {
        a + t * (b - a)
    }
}

impl Interpolate for VectorF {
    fn interpolate(t: Float, a: Self, b: Self) -> Self {
        a + (b - a) * t
    }
}

impl Interpolate for Color {
    fn interpolate(t: Float, a: Self, b: Self) -> Self {
        Color::rgba(
            interpolate(t, a.r, b.r),
            interpolate(t, a.g, b.g),
            interpolate(t, a.b, b.b),
            interpolate(t, a.a, b.a),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate_endpoints() {
        assert_eq!(interpolate(0.0, 2.0, 6.0), 2.0);
        assert_eq!(interpolate(1.0, 2.0, 6.0), 6.0);
        assert_eq!(interpolate(0.25, 2.0, 6.0), 3.0);
        assert_eq!(
            interpolate(0.5, VectorF::ZERO, VectorF::new(2.0, 4.0, -2.0)),
            VectorF::new(1.0, 2.0, -1.0),
        );
        assert_eq!(
            interpolate(0.5, Color::BLACK, Color::WHITE),
            Color::gray(0.5),
        );
    }
}
