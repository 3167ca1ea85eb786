//! RGBA colors.

use std::fmt;

use approx::AbsDiffEq;

use crate::{EPSILON, Float, interpolate};

/// RGBA color with each channel nominally in the range 0.0 to 1.0.
///
/// Channels may leave that range during arithmetic. Conversion to bytes
/// clamps.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: Float,
    /// Green channel.
    pub g: Float,
    /// Blue channel.
    pub b: Float,
    /// Opacity. 0 is transparent and 1 is opaque.
    pub a: Float,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGBA({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Converts a channel to a byte, clamping to `0..=255`.
fn channel_to_byte(c: Float) -> u8 {
    (c * 256.0).clamp(0.0, 255.0).floor() as u8
}
/// Converts a byte to a channel value.
fn byte_to_channel(v: u8) -> Float {
    v as Float * (1.0 / 255.0)
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::gray(1.0);
    /// Opaque black.
    pub const BLACK: Self = Self::gray(0.0);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    /// Constructs a color from red, green, blue, and alpha.
    pub const fn rgba(r: Float, g: Float, b: Float, a: Float) -> Self {
        Self { r, g, b, a }
    }
    /// Constructs an opaque color from red, green, and blue.
    pub const fn rgb(r: Float, g: Float, b: Float) -> Self {
        Self::rgba(r, g, b, 1.0)
    }
    /// Constructs an opaque gray with all three color channels equal to `v`.
    pub const fn gray(v: Float) -> Self {
        Self::gray_alpha(v, 1.0)
    }
    /// Constructs a gray with all three color channels equal to `v`.
    pub const fn gray_alpha(v: Float, a: Float) -> Self {
        Self::rgba(v, v, v, a)
    }

    /// Constructs a fully-saturated, full-value color from a hue in the range
    /// 0.0 to 1.0. Hues outside that range wrap around.
    fn pure_hue(hue: Float, a: Float) -> Self {
        let hue = (hue - hue.floor()) * 6.0;
        let mut ret = Self::gray_alpha(0.0, a);
        match hue.floor() as i32 {
            0 => (ret.r, ret.g) = (1.0, hue),
            1 => (ret.g, ret.r) = (1.0, 2.0 - hue),
            2 => (ret.g, ret.b) = (1.0, hue - 2.0),
            3 => (ret.g, ret.b) = (4.0 - hue, 1.0),
            4 => (ret.b, ret.r) = (1.0, hue - 4.0),
            _ => (ret.r, ret.b) = (1.0, 6.0 - hue),
        }
        ret
    }

    /// Constructs a color from hue, saturation, value, and alpha.
    pub fn hsva(hue: Float, saturation: Float, value: Float, a: Float) -> Self {
        let saturation = saturation.clamp(0.0, 1.0);
        let ret = interpolate(saturation, Self::gray_alpha(1.0, a), Self::pure_hue(hue, a));
        ret.scale_rgb(value)
    }
    /// Constructs an opaque color from hue, saturation, and value.
    pub fn hsv(hue: Float, saturation: Float, value: Float) -> Self {
        Self::hsva(hue, saturation, value, 1.0)
    }
    /// Constructs a color from hue, saturation, brightness, and alpha.
    ///
    /// Brightness 0.5 gives the saturated color, 0.0 gives black, and 1.0
    /// gives white.
    pub fn hsba(hue: Float, saturation: Float, brightness: Float, a: Float) -> Self {
        let saturation = saturation.clamp(0.0, 1.0);
        let brightness = brightness.clamp(0.0, 1.0);
        let ret = interpolate(saturation, Self::gray_alpha(0.5, a), Self::pure_hue(hue, a));
        if brightness < 0.5 {
            ret.scale_rgb(2.0 * brightness)
        } else {
            interpolate(2.0 - 2.0 * brightness, Self::gray_alpha(1.0, a), ret)
        }
    }
    /// Constructs an opaque color from hue, saturation, and brightness.
    pub fn hsb(hue: Float, saturation: Float, brightness: Float) -> Self {
        Self::hsba(hue, saturation, brightness, 1.0)
    }

    /// Returns the red channel as a byte in the range 0 to 0xFF.
    pub fn ri(self) -> u8 {
        channel_to_byte(self.r)
    }
    /// Returns the green channel as a byte in the range 0 to 0xFF.
    pub fn gi(self) -> u8 {
        channel_to_byte(self.g)
    }
    /// Returns the blue channel as a byte in the range 0 to 0xFF.
    pub fn bi(self) -> u8 {
        channel_to_byte(self.b)
    }
    /// Returns the alpha channel as a byte in the range 0 to 0xFF.
    pub fn ai(self) -> u8 {
        channel_to_byte(self.a)
    }
    /// Sets the red channel from a byte in the range 0 to 0xFF.
    pub fn set_ri(&mut self, v: u8) {
        self.r = byte_to_channel(v);
    }
    /// Sets the green channel from a byte in the range 0 to 0xFF.
    pub fn set_gi(&mut self, v: u8) {
        self.g = byte_to_channel(v);
    }
    /// Sets the blue channel from a byte in the range 0 to 0xFF.
    pub fn set_bi(&mut self, v: u8) {
        self.b = byte_to_channel(v);
    }
    /// Sets the alpha channel from a byte in the range 0 to 0xFF.
    pub fn set_ai(&mut self, v: u8) {
        self.a = byte_to_channel(v);
    }
    /// Constructs a color from four bytes.
    pub fn from_bytes([r, g, b, a]: [u8; 4]) -> Self {
        Self::rgba(
            byte_to_channel(r),
            byte_to_channel(g),
            byte_to_channel(b),
            byte_to_channel(a),
        )
    }
    /// Returns the color as four bytes.
    pub fn to_bytes(self) -> [u8; 4] {
        [self.ri(), self.gi(), self.bi(), self.ai()]
    }

    /// Multiplies all four channels componentwise.
    #[must_use]
    pub fn scale(self, other: Color) -> Color {
        Self::rgba(
            self.r * other.r,
            self.g * other.g,
            self.b * other.b,
            self.a * other.a,
        )
    }
    /// Scales the color channels but not the alpha.
    #[must_use]
    pub fn scale_rgb(self, s: Float) -> Color {
        Self::rgba(self.r * s, self.g * s, self.b * s, self.a)
    }
    /// Adds the color channels. The alpha is the minimum of the two alphas.
    #[must_use]
    pub fn add(self, other: Color) -> Color {
        Self::rgba(
            self.r + other.r,
            self.g + other.g,
            self.b + other.b,
            self.a.min(other.a),
        )
    }

    /// Returns the hue in the range 0.0 to 1.0.
    pub fn hue(self) -> Float {
        let min_v = self.r.min(self.g).min(self.b);
        let (r, g, b) = (self.r - min_v, self.g - min_v, self.b - min_v);
        let max_v = r.max(g).max(b);
        if max_v <= EPSILON * min_v {
            return 0.0;
        }
        #[allow(clippy::float_cmp)]
        let sextant = if r == max_v {
            if g < b { 6.0 - b / max_v } else { g / max_v }
        } else if g == max_v {
            if r < b { 2.0 + b / max_v } else { 2.0 - r / max_v }
        } else if r < g {
            4.0 - g / max_v
        } else {
            4.0 + r / max_v
        };
        sextant / 6.0
    }
    /// Returns the HSV saturation.
    pub fn saturation(self) -> Float {
        let min_v = self.r.min(self.g).min(self.b);
        let max_v = self.value();
        if max_v == 0.0 {
            return 0.0;
        }
        1.0 - min_v / max_v
    }
    /// Returns the HSV value.
    pub fn value(self) -> Float {
        self.r.max(self.g).max(self.b)
    }
    /// Returns the HSB brightness.
    pub fn brightness(self) -> Float {
        let min_v = self.r.min(self.g).min(self.b);
        self.value() - 0.5 * (1.0 - min_v)
    }
}

impl AbsDiffEq for Color {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.r.abs_diff_eq(&other.r, epsilon)
            && self.g.abs_diff_eq(&other.g, epsilon)
            && self.b.abs_diff_eq(&other.b, epsilon)
            && self.a.abs_diff_eq(&other.a, epsilon)
    }
}
