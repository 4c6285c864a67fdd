//! UI render commands

use crate::ui::backend::{FontId, TextureRef, UITransform};

/// One backend call captured by [`RecordingBackend`](super::RecordingBackend)
#[derive(Debug, Clone, PartialEq)]
pub enum UIRenderCommand {
    /// Solid rectangle fill
    FillRect {
        /// Left edge
        x: i32,
        /// Top edge
        y: i32,
        /// Width in pixels
        width: i32,
        /// Height in pixels
        height: i32,
        /// Packed ARGB color
        argb: u32,
    },
    /// Textured rectangle
    TexturedRect {
        /// Texture identifier
        texture: TextureRef,
        /// Left edge
        x: i32,
        /// Top edge
        y: i32,
        /// Width in pixels
        width: i32,
        /// Height in pixels
        height: i32,
        /// Sampled region size in texels
        region: (i32, i32),
        /// Full texture size in texels
        texture_size: (i32, i32),
    },
    /// Text line
    Text {
        /// Font used
        font: FontId,
        /// Text content
        text: String,
        /// Left edge
        x: i32,
        /// Top edge
        y: i32,
        /// Packed ARGB color
        argb: u32,
        /// Drop shadow
        shadow: bool,
    },
    /// Transform pushed
    PushTransform(UITransform),
    /// Transform popped
    PopTransform,
    /// Clip rectangle enabled
    EnableClip {
        /// Left edge
        x: i32,
        /// Top edge
        y: i32,
        /// Width in pixels
        width: i32,
        /// Height in pixels
        height: i32,
    },
    /// Clip rectangle removed
    DisableClip,
}

impl UIRenderCommand {
    /// Whether this command puts pixels on screen
    pub fn is_draw(&self) -> bool {
        matches!(self, Self::FillRect { .. } | Self::TexturedRect { .. } | Self::Text { .. })
    }
}
