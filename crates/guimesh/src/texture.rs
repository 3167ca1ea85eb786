//! Texture coordinates and descriptors.

use guimath::approx::AbsDiffEq;
use guimath::{EPSILON, Float, Interpolate, interpolate};

use crate::Image;

/// Point in normalized image space, with `(0, 0)` at the bottom left.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct TextureCoord {
    /// Horizontal coordinate.
    pub u: Float,
    /// Vertical coordinate.
    pub v: Float,
}

impl TextureCoord {
    /// Constructs a texture coordinate.
    pub const fn new(u: Float, v: Float) -> Self {
        Self { u, v }
    }
}

impl Interpolate for TextureCoord {
    fn interpolate(t: Float, a: Self, b: Self) -> Self {
        Self::new(interpolate(t, a.u, b.u), interpolate(t, a.v, b.v))
    }
}

impl AbsDiffEq for TextureCoord {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.u.abs_diff_eq(&other.u, epsilon) && self.v.abs_diff_eq(&other.v, epsilon)
    }
}

/// Rectangular region of an image.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureDescriptor {
    /// Image containing the region.
    pub image: Image,
    /// Left edge of the region.
    pub min_u: Float,
    /// Right edge of the region.
    pub max_u: Float,
    /// Bottom edge of the region.
    pub min_v: Float,
    /// Top edge of the region.
    pub max_v: Float,
}

impl TextureDescriptor {
    /// Constructs a descriptor for a region of `image`.
    pub fn new(image: Image, min_u: Float, max_u: Float, min_v: Float, max_v: Float) -> Self {
        Self {
            image,
            min_u,
            max_u,
            min_v,
            max_v,
        }
    }
    /// Constructs a descriptor covering all of `image`.
    pub fn whole(image: Image) -> Self {
        Self::new(image, 0.0, 1.0, 0.0, 1.0)
    }

    /// Returns the region of this descriptor spanning the fractions `u0..u1`
    /// horizontally and `v0..v1` vertically.
    ///
    /// Slicing composes: slicing a slice is the same as slicing once with the
    /// composed fractions.
    ///
    /// ```
    /// # use guimesh::prelude::*;
    /// let td = TextureDescriptor::new(Image::new(4, 4), 0.5, 1.0, 0.0, 1.0);
    /// let sub = td.sub_texture(0.5, 1.0, 0.0, 0.5);
    /// assert_eq!((sub.min_u, sub.max_u), (0.75, 1.0));
    /// assert_eq!((sub.min_v, sub.max_v), (0.0, 0.5));
    /// ```
    #[must_use]
    pub fn sub_texture(&self, u0: Float, u1: Float, v0: Float, v1: Float) -> Self {
        Self {
            image: self.image.clone(),
            min_u: interpolate(u0, self.min_u, self.max_u),
            max_u: interpolate(u1, self.min_u, self.max_u),
            min_v: interpolate(v0, self.min_v, self.max_v),
            max_v: interpolate(v1, self.min_v, self.max_v),
        }
    }

    /// Returns the four corners of the region in counterclockwise order,
    /// starting at the bottom left.
    pub fn corners(&self) -> [TextureCoord; 4] {
        [
            TextureCoord::new(self.min_u, self.min_v),
            TextureCoord::new(self.max_u, self.min_v),
            TextureCoord::new(self.max_u, self.max_v),
            TextureCoord::new(self.min_u, self.max_v),
        ]
    }
}

#[cfg(test)]
mod tests {
    use guimath::assert_approx_eq;

    use super::*;

    #[test]
    fn test_sub_texture_composes() {
        let td = TextureDescriptor::new(Image::new(256, 256), 0.25, 0.75, 0.1, 0.9);
        let twice = td.sub_texture(0.2, 0.6, 0.0, 1.0).sub_texture(0.5, 1.0, 0.25, 0.5);
        // 0.2 + 0.5 * (0.6 - 0.2) = 0.4
        let once = td.sub_texture(0.4, 0.6, 0.25, 0.5);
        assert_approx_eq!(twice.min_u, once.min_u);
        assert_approx_eq!(twice.max_u, once.max_u);
        assert_approx_eq!(twice.min_v, once.min_v);
        assert_approx_eq!(twice.max_v, once.max_v);
        assert_eq!(twice.image, td.image);
    }

    #[test]
    fn test_sub_texture_reversed_slice() {
        let td = TextureDescriptor::whole(Image::new(1, 1));
        let sub = td.sub_texture(0.75, 0.25, 0.0, 1.0);
        assert_eq!((sub.min_u, sub.max_u), (0.75, 0.25));
    }

    #[test]
    fn test_corners() {
        let td = TextureDescriptor::new(Image::new(1, 1), 0.0, 0.5, 0.25, 1.0);
        assert_eq!(
            td.corners(),
            [
                TextureCoord::new(0.0, 0.25),
                TextureCoord::new(0.5, 0.25),
                TextureCoord::new(0.5, 1.0),
                TextureCoord::new(0.0, 1.0),
            ],
        );
    }
}
