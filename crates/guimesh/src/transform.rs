//! Whole-mesh transformations.

use guimath::Matrix;

use crate::Mesh;

/// Returns a copy of `mesh` with `m` applied to every vertex position. Colors
/// and texture coordinates are unchanged.
pub fn transform(m: &Matrix, mesh: &Mesh) -> Mesh {
    Mesh::from_triangles(
        mesh.texture().cloned(),
        mesh.iter().map(|tri| tri.map_positions(|p| m * p)).collect(),
    )
}

/// Returns a copy of `mesh` with the winding of every triangle reversed, by
/// swapping the first two vertices of each.
pub fn invert(mesh: &Mesh) -> Mesh {
    Mesh::from_triangles(
        mesh.texture().cloned(),
        mesh.iter().map(|tri| tri.inverted()).collect(),
    )
}
