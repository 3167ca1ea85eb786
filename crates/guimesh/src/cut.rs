//! Clipping meshes against half-spaces.

use guimath::approx::AbsDiffEq;
use guimath::{EPSILON, Float, VectorF, find_intersection_point, interpolate};
use smallvec::{SmallVec, smallvec};

use crate::{Mesh, MeshError, Result, Triangle, Vertex};

/// Half-space containing the points `p` where `normal·p + d < 0`.
///
/// The normal vector need not be normalized.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Plane {
    /// Normal vector, pointing away from the kept half-space.
    pub normal: VectorF,
    /// Offset of the plane from the origin, scaled by the length of `normal`.
    pub d: Float,
}

impl Plane {
    /// Constructs a half-space from a normal vector and an offset.
    pub const fn new(normal: VectorF, d: Float) -> Self {
        Self { normal, d }
    }

    /// Returns the signed distance of a point from the plane, scaled by the
    /// length of the normal vector. This is negative inside the half-space.
    pub fn signed_distance_to_point(&self, p: VectorF) -> Float {
        self.normal.dot(p) + self.d
    }
    /// Returns whether a point is strictly inside the half-space.
    pub fn contains(&self, p: VectorF) -> bool {
        self.signed_distance_to_point(p) < 0.0
    }

    /// Returns the portion of `mesh` inside the half-space. See [`cut()`].
    pub fn cut(&self, mesh: &Mesh) -> Result<Mesh> {
        let mut triangles = Vec::with_capacity(mesh.len());
        for tri in mesh {
            triangles.extend(triangulate(&self.clip_triangle(tri))?);
        }
        Ok(Mesh::from_triangles(mesh.texture().cloned(), triangles))
    }

    /// Clips a triangle to a convex polygon with at most four vertices.
    fn clip_triangle(&self, tri: &Triangle) -> SmallVec<[Vertex; 4]> {
        let [a, b, c] = tri.vertices;
        if tri.vertices.iter().all(|v| self.contains(v.position)) {
            return smallvec![a, b, c];
        }

        // Each vertex is tagged with whether it is an intersection point.
        let mut polygon: SmallVec<[(Vertex, bool); 4]> = SmallVec::new();
        for (last, current) in [(c, a), (a, b), (b, c)] {
            let current_inside = self.contains(current.position);
            if self.contains(last.position) != current_inside {
                let t =
                    find_intersection_point(last.position, current.position, self.normal, self.d);
                push_distinct(&mut polygon, (interpolate(t, last, current), true));
            }
            if current_inside {
                push_distinct(&mut polygon, (current, false));
            }
        }
        if let [first, .., last] = polygon.as_slice()
            && is_duplicate(first, last)
        {
            polygon.pop();
        }
        polygon.into_iter().map(|(v, _)| v).collect()
    }
}

/// Returns whether two consecutive polygon vertices should be merged. Only an
/// intersection point is ever merged, since a corner of the triangle that lies
/// on the plane would otherwise appear twice: once as itself and once as an
/// intersection point.
fn is_duplicate(
    &(a, a_is_intersection): &(Vertex, bool),
    &(b, b_is_intersection): &(Vertex, bool),
) -> bool {
    (a_is_intersection || b_is_intersection) && a.position.abs_diff_eq(&b.position, EPSILON)
}

fn push_distinct(polygon: &mut SmallVec<[(Vertex, bool); 4]>, v: (Vertex, bool)) {
    if polygon.last().is_some_and(|prev| is_duplicate(prev, &v)) {
        return;
    }
    polygon.push(v);
}

/// Splits a clipped polygon into triangles. Polygons with fewer than three
/// vertices have no area and produce no triangles.
fn triangulate(polygon: &[Vertex]) -> Result<SmallVec<[Triangle; 2]>> {
    match polygon {
        [] => Ok(smallvec![]),
        [_] | [_, _] => {
            log::trace!("dropping degenerate clipped polygon with {} vertices", polygon.len());
            Ok(smallvec![])
        }
        &[v0, v1, v2] => Ok(smallvec![Triangle::new(v0, v1, v2)]),
        &[v0, v1, v2, v3] => Ok(smallvec![Triangle::new(v0, v1, v2), Triangle::new(v0, v2, v3)]),
        _ => {
            let count = polygon.len();
            log::error!("clipping a triangle produced {count} vertices");
            Err(MeshError::ClipVertexCount { count })
        }
    }
}

/// Returns the portion of `mesh` in the half-space `normal·p + d < 0`.
///
/// Each triangle is clipped independently. Position, color, and texture
/// coordinate are linearly interpolated wherever an edge crosses the plane.
/// The result has the same texture as `mesh`, and may be empty.
///
/// # Errors
///
/// Returns [`MeshError::ClipVertexCount`] if clipping a triangle produces a
/// polygon with more than four vertices, which should never happen.
pub fn cut(mesh: &Mesh, normal: VectorF, d: Float) -> Result<Mesh> {
    Plane::new(normal, d).cut(mesh)
}

/// Returns the portion of `mesh` inside every half-space in `planes`.
pub fn cut_all(mesh: &Mesh, planes: &[Plane]) -> Result<Mesh> {
    let mut ret = mesh.clone();
    for plane in planes {
        if ret.is_empty() {
            break;
        }
        ret = plane.cut(&ret)?;
    }
    Ok(ret)
}
