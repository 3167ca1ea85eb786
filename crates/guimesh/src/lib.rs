//! Textured triangle meshes for the widget renderer.
//!
//! This crate generates the geometry that widgets draw: quadrilaterals, boxes,
//! and mitered lines, each textured with a region of an image. Meshes can be
//! transformed and clipped against half-spaces, which is used to confine a
//! canvas to its viewport.
//!
//! All operations construct a new [`Mesh`], except [`Mesh::add()`] which
//! appends in place.

pub use guimath;

pub mod atlas;
pub mod cut;
mod error;
pub mod generate;
mod image;
mod mesh;
pub mod render;
mod texture;
pub mod transform;
mod triangle;


pub use error::{MeshError, Result};

/// Miter length at line joints, as a multiple of the line width, is never
/// limited to less than this.
pub const MITER_FLOOR: guimath::Float = 3.0;

/// Distance in front of the camera of the near clipping plane used by
/// [`render::clip_to_viewport()`].
pub const NEAR_PLANE_OFFSET: guimath::Float = 0.001;

/// Structs, traits, and constants.
pub mod prelude {
    pub use guimath::prelude::*;

    pub use crate::atlas::{AtlasRect, DEFAULT_PIXEL_OFFSET, TextureAtlas, cells};
    pub use crate::cut::{Plane, cut, cut_all};
    pub use crate::generate::{BoxFaces, line, line_loop, quadrilateral, unit_box};
    pub use crate::image::Image;
    pub use crate::mesh::Mesh;
    pub use crate::render::{Canvas, Layers, Render, Viewport, clip_to_viewport, render_layers};
    pub use crate::texture::{TextureCoord, TextureDescriptor};
    pub use crate::transform::{invert, transform};
    pub use crate::triangle::{Triangle, Vertex};
    pub use crate::{MITER_FLOOR, MeshError, NEAR_PLANE_OFFSET};
}
pub use prelude::*;
