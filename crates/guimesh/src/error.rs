//! Errors produced while building or clipping meshes.

use guimath::MathError;

/// Result type for mesh operations.
pub type Result<T, E = MeshError> = std::result::Result<T, E>;

/// Error produced while building or clipping a mesh.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// A vector operation failed, typically normalizing a zero-length tangent.
    #[error(transparent)]
    Math(#[from] MathError),
    /// Two meshes that reference different images cannot be combined.
    #[error("cannot combine meshes with different textures ({0} vs. {1})")]
    TextureMismatch(String, String),
    /// Clipping a triangle produced a polygon that is not a triangle or
    /// quadrilateral. This indicates a bug.
    #[error("clipping a triangle produced {count} vertices")]
    ClipVertexCount {
        /// Number of vertices in the clipped polygon.
        count: usize,
    },
}
