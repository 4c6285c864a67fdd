//! UI widgets module
//!
//! Render-only specializations of [`Node`](crate::ui::Node): rectangles,
//! rounded rectangles, text and the full-screen overlay.

pub mod overlay;
pub mod rectangle;
pub mod rounded;
pub mod text;

pub use overlay::{DragHandler, KeyHandler, Overlay, ScrollHandler};
pub use rectangle::Rectangle;
pub use rounded::RoundedRectangle;
pub use text::Text;

use crate::foundation::math::Vec3;

/// Node bounds snapped to integer pixels
///
/// Coordinates truncate toward zero, matching how the backend rasterizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width
    pub width: i32,
    /// Height
    pub height: i32,
}

impl PixelRect {
    /// Snap a render location and size to pixels
    pub fn from_geometry(location: &Vec3, size: &Vec3) -> Self {
        Self {
            x: location.x as i32,
            y: location.y as i32,
            width: size.x as i32,
            height: size.y as i32,
        }
    }

    /// Build a rectangle spanning two corners given in any order
    pub fn from_corners(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self {
            x: x1.min(x2),
            y: y1.min(y2),
            width: (x2 - x1).abs(),
            height: (y2 - y1).abs(),
        }
    }

    /// Zero or negative area
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}
