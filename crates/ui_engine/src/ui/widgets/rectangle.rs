//! Rectangle widget - solid or textured boxes that can clip their children

use super::PixelRect;
use crate::core::config::ShapeConfig;
use crate::ui::backend::{TextureRef, UIRenderBackend};
use serde::{Deserialize, Serialize};

/// Rectangle style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Texture drawn instead of the solid fill
    pub texture: Option<TextureRef>,

    /// Sampled texture region (texels)
    pub region_size: (f64, f64),

    /// Full texture size (texels)
    pub texture_size: (f64, f64),

    /// Clip children to this rectangle's bounds
    pub mask: bool,
}

impl Rectangle {
    /// Rectangle using the configured texture defaults
    pub fn from_config(shapes: &ShapeConfig) -> Self {
        Self {
            texture: None,
            region_size: shapes.region_size,
            texture_size: shapes.texture_size,
            mask: false,
        }
    }

    /// Set texture
    #[must_use]
    pub fn with_texture(mut self, texture: TextureRef) -> Self {
        self.texture = Some(texture);
        self
    }

    /// Enable child clipping
    #[must_use]
    pub fn with_mask(mut self, mask: bool) -> Self {
        self.mask = mask;
        self
    }

    /// Draw the rectangle. Returns false when the bounds are empty and nothing was drawn.
    ///
    /// When drawn with `mask` set, the clip stays enabled for the children;
    /// the caller closes it with [`UIRenderBackend::disable_clip`].
    pub fn draw(&self, bounds: PixelRect, argb: u32, backend: &mut dyn UIRenderBackend) -> bool {
        if bounds.is_empty() {
            return false;
        }

        match &self.texture {
            Some(texture) => backend.draw_textured_rect(
                texture,
                bounds.x,
                bounds.y,
                bounds.width,
                bounds.height,
                (0.0, 0.0),
                (self.region_size.0 as i32, self.region_size.1 as i32),
                (self.texture_size.0 as i32, self.texture_size.1 as i32),
            ),
            None => backend.fill_rect(bounds.x, bounds.y, bounds.width, bounds.height, argb),
        }

        if self.mask {
            backend.enable_clip(bounds.x, bounds.y, bounds.width, bounds.height);
        }
        true
    }
}

impl Default for Rectangle {
    fn default() -> Self {
        Self::from_config(&ShapeConfig::default())
    }
}
