//! Vertices and triangles.

use guimath::{Color, Float, Interpolate, VectorF, interpolate};

use crate::TextureCoord;

/// Vertex of a mesh triangle.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vertex {
    /// Position in 3D space.
    pub position: VectorF,
    /// Color multiplied with the texture sample.
    pub color: Color,
    /// Texture coordinate.
    pub texture_coord: TextureCoord,
}

impl Vertex {
    /// Constructs a vertex.
    pub const fn new(position: VectorF, color: Color, texture_coord: TextureCoord) -> Self {
        Self {
            position,
            color,
            texture_coord,
        }
    }
}

impl Interpolate for Vertex {
    fn interpolate(t: Float, a: Self, b: Self) -> Self {
        Self {
            position: interpolate(t, a.position, b.position),
            color: interpolate(t, a.color, b.color),
            texture_coord: interpolate(t, a.texture_coord, b.texture_coord),
        }
    }
}

/// Triangle with counterclockwise winding when viewed from the front.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Triangle {
    /// Vertices in winding order.
    pub vertices: [Vertex; 3],
}

impl Triangle {
    /// Constructs a triangle from three vertices.
    pub const fn new(v0: Vertex, v1: Vertex, v2: Vertex) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// Returns the triangle with vertices 0 and 1 swapped, reversing its
    /// winding so that it faces the other way.
    #[must_use]
    pub fn inverted(self) -> Self {
        let [v0, v1, v2] = self.vertices;
        Self::new(v1, v0, v2)
    }

    /// Returns the triangle with `f` applied to each vertex position.
    #[must_use]
    pub fn map_positions(self, mut f: impl FnMut(VectorF) -> VectorF) -> Self {
        Self {
            vertices: self.vertices.map(|v| Vertex {
                position: f(v.position),
                ..v
            }),
        }
    }

    /// Returns the unnormalized normal vector of the triangle, following the
    /// right-hand rule.
    pub fn normal(&self) -> VectorF {
        let [a, b, c] = self.vertices.map(|v| v.position);
        (b - a).cross(c - a)
    }
}
