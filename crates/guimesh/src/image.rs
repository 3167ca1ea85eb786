//! Shared handles to texture images.

use std::fmt;
use std::sync::Arc;

/// Metadata for an image that lives elsewhere (typically on the GPU or in the
/// image loader's cache).
struct ImageData {
    width: u32,
    height: u32,
    name: Option<String>,
}

/// Reference-counted handle to an image.
///
/// Cloning the handle is cheap and never copies pixel data. Two handles are
/// equal only if they refer to the same image.
#[derive(Clone)]
pub struct Image(Arc<ImageData>);

impl Image {
    /// Constructs a handle to an unnamed image with the given size in pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self(Arc::new(ImageData {
            width,
            height,
            name: None,
        }))
    }
    /// Constructs a handle to a named image, such as a resource file.
    pub fn named(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self(Arc::new(ImageData {
            width,
            height,
            name: Some(name.into()),
        }))
    }

    /// Returns the width of the image in pixels.
    pub fn width(&self) -> u32 {
        self.0.width
    }
    /// Returns the height of the image in pixels.
    pub fn height(&self) -> u32 {
        self.0.height
    }
    /// Returns the resource name of the image, if it has one.
    pub fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
impl Eq for Image {}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("name", &self.0.name)
            .field("width", &self.0.width)
            .field("height", &self.0.height)
            .finish()
    }
}

impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(data) = self;
        match &data.name {
            Some(name) => write!(f, "{name:?} ({}x{})", data.width, data.height),
            None => write!(f, "<unnamed> ({}x{})", data.width, data.height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_identity() {
        let a = Image::named("textures.png", 256, 256);
        let b = Image::named("textures.png", 256, 256);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        assert_eq!(a.to_string(), "\"textures.png\" (256x256)");
        assert_eq!(Image::new(4, 2).to_string(), "<unnamed> (4x2)");
    }
}
