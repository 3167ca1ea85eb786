//! Texture atlas addressing.
//!
//! An atlas is one image subdivided into rectangular cells. Cells are given in
//! pixels with the origin at the top left of the image, and converted to
//! normalized texture coordinates with the origin at the bottom left.

use guimath::Float;

use crate::{Image, TextureDescriptor};

/// Default inset, in pixels, applied to each edge of an atlas cell so that
/// linear filtering does not sample neighboring cells.
pub const DEFAULT_PIXEL_OFFSET: Float = 0.05;

/// Rectangle of pixels in an atlas image, with the origin at the top left.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct AtlasRect {
    /// Left edge, in pixels.
    pub left: i32,
    /// Top edge, in pixels.
    pub top: i32,
    /// Width, in pixels.
    pub width: i32,
    /// Height, in pixels.
    pub height: i32,
}

impl AtlasRect {
    /// Constructs a rectangle from its top left corner and size.
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Shared atlas image along with the inset used when addressing it.
///
/// The atlas is constructed once by the caller (usually at startup) and
/// passed by reference to whatever needs to generate meshes from it.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureAtlas {
    image: Image,
    pixel_offset: Float,
}

impl TextureAtlas {
    /// Constructs an atlas over `image` using [`DEFAULT_PIXEL_OFFSET`].
    pub fn new(image: Image) -> Self {
        Self::with_pixel_offset(image, DEFAULT_PIXEL_OFFSET)
    }
    /// Constructs an atlas over `image` with a custom inset, in pixels.
    pub fn with_pixel_offset(image: Image, pixel_offset: Float) -> Self {
        Self {
            image,
            pixel_offset,
        }
    }

    /// Returns the atlas image.
    pub fn image(&self) -> &Image {
        &self.image
    }
    /// Returns the inset applied to each cell edge, in pixels.
    pub fn pixel_offset(&self) -> Float {
        self.pixel_offset
    }

    /// Returns a descriptor for a cell, inset by the pixel offset.
    pub fn descriptor(&self, rect: AtlasRect) -> TextureDescriptor {
        self.descriptor_with_inset(rect, self.pixel_offset)
    }
    /// Returns a descriptor for a cell exactly on its pixel boundaries.
    pub fn descriptor_no_offset(&self, rect: AtlasRect) -> TextureDescriptor {
        self.descriptor_with_inset(rect, 0.0)
    }

    fn descriptor_with_inset(&self, rect: AtlasRect, inset: Float) -> TextureDescriptor {
        let x_res = self.image.width() as Float;
        let y_res = self.image.height() as Float;
        let left = rect.left as Float;
        let top = rect.top as Float;
        let right = (rect.left + rect.width) as Float;
        let bottom = (rect.top + rect.height) as Float;
        TextureDescriptor::new(
            self.image.clone(),
            (left + inset) / x_res,
            (right - inset) / x_res,
            1.0 - (bottom - inset) / y_res,
            1.0 - (top + inset) / y_res,
        )
    }
}

/// Cells of the standard 256x256 widget atlas.
pub mod cells {
    use super::AtlasRect;

    /// Width and height of the standard atlas image, in pixels.
    pub const ATLAS_SIZE: u32 = 256;

    /// 16x16 grid of 8x8 font glyphs.
    pub const FONT_8X8: AtlasRect = AtlasRect::new(0, 0, 128, 128);
    /// Single texel used for solid lines.
    pub const LINE: AtlasRect = AtlasRect::new(128, 0, 1, 1);
    /// Single texel used for points.
    pub const POINT: AtlasRect = AtlasRect::new(128, 1, 1, 1);

    /// Left cap of a button's diffuse layer.
    pub const BUTTON_LEFT_DIFFUSE: AtlasRect = AtlasRect::new(0, 128 + 16, 8, 16);
    /// Right cap of a button's diffuse layer.
    pub const BUTTON_RIGHT_DIFFUSE: AtlasRect = AtlasRect::new(24, 128 + 16, 8, 16);
    /// Stretchable middle of a button's diffuse layer.
    pub const BUTTON_MIDDLE_DIFFUSE: AtlasRect = AtlasRect::new(8, 128 + 16, 16, 16);
    /// Left cap of a button's specular layer.
    pub const BUTTON_LEFT_SPECULAR: AtlasRect = AtlasRect::new(0, 128, 8, 16);
    /// Right cap of a button's specular layer.
    pub const BUTTON_RIGHT_SPECULAR: AtlasRect = AtlasRect::new(24, 128, 8, 16);
    /// Stretchable middle of a button's specular layer.
    pub const BUTTON_MIDDLE_SPECULAR: AtlasRect = AtlasRect::new(8, 128, 16, 16);

    /// Top half of the menu gear icon.
    pub const MENU_GEAR_TOP: AtlasRect = AtlasRect::new(0, 192, 64, 64);
    /// Bottom half of the menu gear icon.
    pub const MENU_GEAR_BOTTOM: AtlasRect = AtlasRect::new(64, 192, 64, 64);
}

#[cfg(test)]
mod tests {
    use guimath::assert_approx_eq;

    use super::*;

    fn standard_atlas() -> TextureAtlas {
        TextureAtlas::new(Image::named("textures.png", cells::ATLAS_SIZE, cells::ATLAS_SIZE))
    }

    #[test]
    fn test_descriptor_inset_and_flip() {
        let atlas = standard_atlas();
        let td = atlas.descriptor(cells::FONT_8X8);
        assert_approx_eq!(td.min_u, 0.05 / 256.0);
        assert_approx_eq!(td.max_u, (128.0 - 0.05) / 256.0);
        // Top of the image is v = 1.
        assert_approx_eq!(td.max_v, 1.0 - 0.05 / 256.0);
        assert_approx_eq!(td.min_v, 1.0 - (128.0 - 0.05) / 256.0);
        assert_eq!(&td.image, atlas.image());
    }

    #[test]
    fn test_descriptor_no_offset() {
        let atlas = standard_atlas();
        let td = atlas.descriptor_no_offset(cells::MENU_GEAR_BOTTOM);
        assert_eq!(td.min_u, 0.25);
        assert_eq!(td.max_u, 0.5);
        assert_eq!(td.min_v, 0.0);
        assert_eq!(td.max_v, 0.25);
    }

    #[test]
    fn test_single_texel_stays_inside_its_pixel() {
        let atlas = standard_atlas();
        let td = atlas.descriptor(cells::LINE);
        let pixel_left = 128.0 / 256.0;
        let pixel_right = 129.0 / 256.0;
        assert!(pixel_left < td.min_u && td.min_u < td.max_u && td.max_u < pixel_right);
        assert!(td.min_v < td.max_v);
    }
}
