//! RGBA color value with packed ARGB conversion

use serde::{Deserialize, Serialize};

/// Color with 0-255 RGB channels and a 0.0-1.0 alpha
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel (0-255)
    pub red: u8,
    /// Green channel (0-255)
    pub green: u8,
    /// Blue channel (0-255)
    pub blue: u8,
    /// Alpha (0.0 = transparent, 1.0 = opaque)
    pub alpha: f64,
}

impl Color {
    /// Opaque white
    pub const WHITE: Self = Self::rgba(255, 255, 255, 1.0);
    /// Opaque black
    pub const BLACK: Self = Self::rgba(0, 0, 0, 1.0);
    /// Fully transparent black
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0.0);

    /// Create a color from channels and alpha
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self { red, green, blue, alpha }
    }

    /// Create an opaque color
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Alpha scaled to 0-255 and clamped; NaN maps to 0
    pub fn alpha_byte(&self) -> u8 {
        let scaled = (self.alpha * 255.0) as i64;
        scaled.clamp(0, 255) as u8
    }

    /// Packed 32-bit ARGB value (alpha in the high byte)
    pub fn to_argb(&self) -> u32 {
        (u32::from(self.alpha_byte()) << 24)
            | (u32::from(self.red) << 16)
            | (u32::from(self.green) << 8)
            | u32::from(self.blue)
    }

    /// Unpack a 32-bit ARGB value
    pub fn from_argb(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self::rgba(r, g, b, f64::from(a) / 255.0)
    }

    /// Same color with a different alpha
    #[must_use]
    pub const fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}
