//! Rounded rectangle widget
//!
//! The fill is decomposed into axis-aligned rectangles: a centre block, four
//! edge strips and a stair-stepped quarter disk per corner.

use super::PixelRect;
use crate::core::config::ShapeConfig;
use crate::foundation::math::constants::PI;
use crate::ui::backend::{TextureRef, UIRenderBackend};
use serde::{Deserialize, Serialize};

/// Rounded rectangle style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundedRectangle {
    /// Requested corner radius; clamped to half the width and height when drawn
    pub corner_radius: i32,

    /// Fill segments per corner
    pub corner_segments: u32,

    /// Texture drawn over the fill
    pub texture: Option<TextureRef>,

    /// Sampled texture region (texels)
    pub region_size: (f64, f64),

    /// Full texture size (texels)
    pub texture_size: (f64, f64),
}

impl RoundedRectangle {
    /// Rounded rectangle using the configured corner and texture defaults
    pub fn from_config(shapes: &ShapeConfig) -> Self {
        Self {
            corner_radius: shapes.corner_radius,
            corner_segments: shapes.corner_segments,
            texture: None,
            region_size: shapes.region_size,
            texture_size: shapes.texture_size,
        }
    }

    /// Set corner radius
    #[must_use]
    pub fn with_radius(mut self, radius: i32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Set texture
    #[must_use]
    pub fn with_texture(mut self, texture: TextureRef) -> Self {
        self.texture = Some(texture);
        self
    }

    /// Radius actually used for the given bounds
    pub fn effective_radius(&self, bounds: PixelRect) -> i32 {
        self.corner_radius
            .min(bounds.width / 2)
            .min(bounds.height / 2)
            .max(0)
    }

    /// Draw the rectangle. Returns false when the bounds are empty and nothing was drawn.
    pub fn draw(&self, bounds: PixelRect, argb: u32, backend: &mut dyn UIRenderBackend) -> bool {
        if bounds.is_empty() {
            return false;
        }

        let PixelRect { x, y, width, height } = bounds;
        let r = self.effective_radius(bounds);

        // Centre, then top, bottom, left and right strips
        let parts = [
            PixelRect::from_corners(x + r, y + r, x + width - r, y + height - r),
            PixelRect::from_corners(x + r, y, x + width - r, y + r),
            PixelRect::from_corners(x + r, y + height - r, x + width - r, y + height),
            PixelRect::from_corners(x, y + r, x + r, y + height - r),
            PixelRect::from_corners(x + width - r, y + r, x + width, y + height - r),
        ];
        for part in parts.iter().filter(|part| !part.is_empty()) {
            backend.fill_rect(part.x, part.y, part.width, part.height, argb);
        }

        if r > 0 {
            // Start angles with Y pointing down
            self.draw_corner(backend, x + r, y + r, r, 180.0, argb);
            self.draw_corner(backend, x + width - r, y + r, r, 270.0, argb);
            self.draw_corner(backend, x + width - r, y + height - r, r, 0.0, argb);
            self.draw_corner(backend, x + r, y + height - r, r, 90.0, argb);
        }

        if let Some(texture) = &self.texture {
            backend.draw_textured_rect(
                texture,
                x,
                y,
                width,
                height,
                (0.0, 0.0),
                (self.region_size.0 as i32, self.region_size.1 as i32),
                (self.texture_size.0 as i32, self.texture_size.1 as i32),
            );
        }
        true
    }

    fn draw_corner(
        &self,
        backend: &mut dyn UIRenderBackend,
        center_x: i32,
        center_y: i32,
        radius: i32,
        start_degrees: f64,
        argb: u32,
    ) {
        let segments = self.corner_segments.max(1);
        let step = PI / 2.0 / f64::from(segments);
        let start = start_degrees.to_radians();
        let radius = f64::from(radius);

        for i in 0..segments {
            let angle = start + step * (f64::from(i) + 0.5);
            let edge_x = center_x + (radius * angle.cos()) as i32;
            let edge_y = center_y + (radius * angle.sin()) as i32;

            let slice = PixelRect::from_corners(center_x, center_y, edge_x, edge_y);
            if !slice.is_empty() {
                backend.fill_rect(slice.x, slice.y, slice.width, slice.height, argb);
            }
        }
    }
}

impl Default for RoundedRectangle {
    fn default() -> Self {
        Self::from_config(&ShapeConfig::default())
    }
}
