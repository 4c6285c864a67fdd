//! UI Render Backend Trait
//!
//! Defines the interface between the UI system and the host renderer.
//! Keeps the UI system independent of the graphics API that actually draws.

use crate::foundation::math::{utils, Affine2, Rotation};
use serde::{Deserialize, Serialize};

/// Host-side texture identifier (e.g. `"mymod:textures/gui/panel.png"`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureRef(pub String);

impl TextureRef {
    /// Create a texture reference from any string-like identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// Host-side font identifier; `FontId::DEFAULT` is the host's default font
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontId(pub u32);

impl FontId {
    /// The host's default font
    pub const DEFAULT: Self = Self(0);
}

/// Transform pushed onto the backend's matrix stack
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UITransform {
    /// Plain translation
    Translate {
        /// Horizontal translation in pixels
        x: f64,
        /// Vertical translation in pixels
        y: f64,
    },
    /// Rotation around a pivot point
    Rotate {
        /// Pivot X in screen pixels
        pivot_x: f64,
        /// Pivot Y in screen pixels
        pivot_y: f64,
        /// Rotation angle
        rotation: Rotation,
    },
}

impl UITransform {
    /// Homogeneous 2D matrix for this transform
    pub fn to_matrix(&self) -> Affine2 {
        match *self {
            Self::Translate { x, y } => utils::translation(x, y),
            Self::Rotate { pivot_x, pivot_y, rotation } => {
                utils::rotation_about(pivot_x, pivot_y, rotation.radians())
            }
        }
    }
}

/// Backend-agnostic UI rendering interface
///
/// Coordinates are integer screen pixels (top-left origin, Y down) except for
/// transforms, which keep full precision. Implementations must tolerate
/// missing textures by drawing nothing.
pub trait UIRenderBackend {
    /// Fill an axis-aligned rectangle with a packed ARGB color
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, argb: u32);

    /// Draw a region of a texture stretched over a rectangle
    ///
    /// # Arguments
    /// * `uv` - Top-left of the sampled region in texels
    /// * `region` - Size of the sampled region in texels
    /// * `texture_size` - Full texture size in texels
    fn draw_textured_rect(
        &mut self,
        texture: &TextureRef,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        uv: (f32, f32),
        region: (i32, i32),
        texture_size: (i32, i32),
    );

    /// Draw a single line of text
    fn draw_text(&mut self, font: FontId, text: &str, x: i32, y: i32, argb: u32, shadow: bool);

    /// Width of a string in pixels when drawn with `font`
    fn text_width(&self, font: FontId, text: &str) -> f64;

    /// Push a transform onto the matrix stack
    fn push_transform(&mut self, transform: UITransform);

    /// Pop the most recently pushed transform
    fn pop_transform(&mut self);

    /// Restrict drawing to a rectangle until `disable_clip`
    fn enable_clip(&mut self, x: i32, y: i32, width: i32, height: i32);

    /// Remove the current clip rectangle
    fn disable_clip(&mut self);

    /// Current viewport size in scaled pixels
    fn viewport_size(&self) -> (f64, f64);
}
