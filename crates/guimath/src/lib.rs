//! 3D vector, affine matrix, and color primitives used by the widget
//! renderer.

pub use approx;

/// Floating-point type used for geometry and colors.
pub type Float = f32;

/// Small floating-point value used for comparisons and tiny offsets.
pub const EPSILON: Float = 0.0001;

/// Asserts that both arguments are approximately equal.
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::approx::assert_abs_diff_eq!($a, $b, epsilon = $crate::EPSILON)
    };
}

#[macro_use]
mod impl_macros;

pub mod color;
pub mod interpolate;
pub mod matrix;
pub mod vector;

#[cfg(test)]
mod tests;

/// Error returned by math operations with no valid result.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MathError {
    /// A zero-length vector has no direction.
    #[error("can't normalize <0, 0, 0>")]
    ZeroVector,
}

/// Structs, traits, and constants.
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::interpolate::{Interpolate, interpolate};
    pub use crate::matrix::Matrix;
    pub use crate::vector::{VectorF, VectorI, find_intersection_point};
    pub use crate::{EPSILON, Float, MathError};
}
pub use prelude::*;
