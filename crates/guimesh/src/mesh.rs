//! Triangle meshes sharing a single texture.

use float_ord::FloatOrd;
use guimath::Float;

use crate::{Image, MeshError, Result, Triangle};

/// List of triangles that all sample from the same texture image.
///
/// A mesh with no triangles may have no texture. Once a mesh has a texture,
/// only meshes with the same texture (or no texture) may be appended to it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Mesh {
    texture: Option<Image>,
    triangles: Vec<Triangle>,
}

impl Mesh {
    /// Constructs an empty mesh with no texture.
    pub fn new() -> Self {
        Self::default()
    }
    /// Constructs an empty mesh with a texture.
    pub fn with_texture(texture: Image) -> Self {
        Self {
            texture: Some(texture),
            triangles: vec![],
        }
    }
    /// Constructs a mesh from a list of triangles.
    pub fn from_triangles(texture: Option<Image>, triangles: Vec<Triangle>) -> Self {
        Self { texture, triangles }
    }

    /// Returns the texture shared by all triangles in the mesh.
    pub fn texture(&self) -> Option<&Image> {
        self.texture.as_ref()
    }
    /// Returns the triangles in the mesh, in insertion order.
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }
    /// Consumes the mesh and returns its triangles.
    pub fn into_triangles(self) -> Vec<Triangle> {
        self.triangles
    }

    /// Returns the number of triangles in the mesh.
    pub fn len(&self) -> usize {
        self.triangles.len()
    }
    /// Returns whether the mesh has no triangles.
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
    /// Returns an iterator over the triangles in the mesh.
    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.triangles.iter()
    }

    /// Appends a triangle using the mesh's existing texture.
    pub fn push(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Appends all the triangles from `other`.
    ///
    /// If `self` has no texture, it takes on the texture of `other`.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::TextureMismatch`] if `other` is nonempty and both
    /// meshes have textures that are different images. `self` is left
    /// unmodified.
    pub fn add(&mut self, other: Mesh) -> Result<()> {
        if other.is_empty() {
            return Ok(());
        }
        if let (Some(ours), Some(theirs)) = (&self.texture, &other.texture)
            && ours != theirs
        {
            log::warn!("refusing to append mesh textured with {theirs} to mesh textured with {ours}");
            return Err(MeshError::TextureMismatch(ours.to_string(), theirs.to_string()));
        }
        if self.texture.is_none() {
            self.texture = other.texture;
        }
        self.triangles.extend(other.triangles);
        Ok(())
    }

    /// Returns the minimum Z coordinate of any vertex in the mesh, or `None`
    /// if the mesh is empty.
    pub fn min_z(&self) -> Option<Float> {
        self.triangles
            .iter()
            .flat_map(|tri| tri.vertices.iter().map(|v| FloatOrd(v.position.z)))
            .min()
            .map(|FloatOrd(z)| z)
    }
}

impl<'a> IntoIterator for &'a Mesh {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use guimath::{Color, VectorF};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{TextureCoord, Vertex};

    fn tri_at_z(z: Float) -> Triangle {
        let v = |x, y| Vertex::new(VectorF::new(x, y, z), Color::WHITE, TextureCoord::default());
        Triangle::new(v(0.0, 0.0), v(1.0, 0.0), v(0.0, 1.0))
    }

    #[test]
    fn test_add_adopts_texture() {
        let image = Image::new(8, 8);
        let mut mesh = Mesh::new();
        mesh.add(Mesh::from_triangles(Some(image.clone()), vec![tri_at_z(0.0)]))
            .expect("untextured mesh accepts any texture");
        assert_eq!(mesh.texture(), Some(&image));
        assert_eq!(mesh.len(), 1);

        mesh.add(Mesh::from_triangles(Some(image.clone()), vec![tri_at_z(1.0)]))
            .expect("same texture");
        assert_eq!(mesh.triangles(), &[tri_at_z(0.0), tri_at_z(1.0)]);
    }

    #[test]
    fn test_add_texture_mismatch() {
        let mut mesh = Mesh::from_triangles(Some(Image::named("a", 1, 1)), vec![tri_at_z(0.0)]);
        let other = Mesh::from_triangles(Some(Image::named("b", 1, 1)), vec![tri_at_z(1.0)]);
        let err = mesh.add(other).expect_err("different images");
        assert!(matches!(err, MeshError::TextureMismatch(..)));
        assert_eq!(mesh.len(), 1);

        // Empty meshes can always be appended.
        mesh.add(Mesh::with_texture(Image::new(1, 1))).expect("empty mesh");
        mesh.add(Mesh::new()).expect("empty mesh");
        assert_eq!(mesh.len(), 1);
    }

    #[test]
    fn test_min_z() {
        assert_eq!(Mesh::new().min_z(), None);
        let mesh = Mesh::from_triangles(None, vec![tri_at_z(2.0), tri_at_z(-3.0), tri_at_z(0.5)]);
        assert_eq!(mesh.min_z(), Some(-3.0));
        assert_eq!((&mesh).into_iter().count(), 3);
    }
}
