//! Backend that records commands instead of drawing
//!
//! Used for headless runs and tests. Tracks the transform stack as matrices so
//! callers can ask where a local point ends up on screen.

use super::commands::UIRenderCommand;
use crate::foundation::math::{utils, Affine2, Vec2};
use crate::ui::backend::{FontId, TextureRef, UIRenderBackend, UITransform};

/// Default glyph advance for headless text measurement
const DEFAULT_GLYPH_WIDTH: f64 = 6.0;

/// Render backend that records every call
#[derive(Debug, Clone)]
pub struct RecordingBackend {
    commands: Vec<UIRenderCommand>,
    viewport: (f64, f64),
    glyph_width: f64,
    transform_stack: Vec<Affine2>,
    clip_depth: u32,
}

impl RecordingBackend {
    /// Create a backend with the given viewport size
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            commands: Vec::new(),
            viewport: (width, height),
            glyph_width: DEFAULT_GLYPH_WIDTH,
            transform_stack: Vec::new(),
            clip_depth: 0,
        }
    }

    /// Fixed per-character advance used by `text_width`
    #[must_use]
    pub fn with_glyph_width(mut self, glyph_width: f64) -> Self {
        self.glyph_width = glyph_width;
        self
    }

    /// Resize the viewport (window resize)
    pub fn set_viewport_size(&mut self, width: f64, height: f64) {
        self.viewport = (width, height);
    }

    /// Commands recorded so far
    pub fn commands(&self) -> &[UIRenderCommand] {
        &self.commands
    }

    /// Only the commands that draw pixels
    pub fn draw_commands(&self) -> Vec<&UIRenderCommand> {
        self.commands.iter().filter(|c| c.is_draw()).collect()
    }

    /// Take recorded commands, leaving the buffer empty
    pub fn take_commands(&mut self) -> Vec<UIRenderCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Current depth of the transform stack
    pub fn transform_depth(&self) -> usize {
        self.transform_stack.len()
    }

    /// Current depth of nested clip regions
    pub fn clip_depth(&self) -> u32 {
        self.clip_depth
    }

    /// Combined transform of everything currently pushed
    pub fn current_transform(&self) -> Affine2 {
        self.transform_stack
            .iter()
            .fold(Affine2::identity(), |acc, m| acc * m)
    }

    /// Map a local point through the current transform stack
    pub fn to_screen(&self, x: f64, y: f64) -> Vec2 {
        utils::transform_point(&self.current_transform(), x, y)
    }
}

impl UIRenderBackend for RecordingBackend {
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, argb: u32) {
        self.commands.push(UIRenderCommand::FillRect { x, y, width, height, argb });
    }

    fn draw_textured_rect(
        &mut self,
        texture: &TextureRef,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        _uv: (f32, f32),
        region: (i32, i32),
        texture_size: (i32, i32),
    ) {
        self.commands.push(UIRenderCommand::TexturedRect {
            texture: texture.clone(),
            x,
            y,
            width,
            height,
            region,
            texture_size,
        });
    }

    fn draw_text(&mut self, font: FontId, text: &str, x: i32, y: i32, argb: u32, shadow: bool) {
        self.commands.push(UIRenderCommand::Text {
            font,
            text: text.to_owned(),
            x,
            y,
            argb,
            shadow,
        });
    }

    fn text_width(&self, _font: FontId, text: &str) -> f64 {
        text.chars().count() as f64 * self.glyph_width
    }

    fn push_transform(&mut self, transform: UITransform) {
        self.transform_stack.push(transform.to_matrix());
        self.commands.push(UIRenderCommand::PushTransform(transform));
    }

    fn pop_transform(&mut self) {
        if self.transform_stack.pop().is_none() {
            log::warn!("pop_transform called on an empty transform stack");
        }
        self.commands.push(UIRenderCommand::PopTransform);
    }

    fn enable_clip(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.clip_depth += 1;
        self.commands.push(UIRenderCommand::EnableClip { x, y, width, height });
    }

    fn disable_clip(&mut self) {
        self.clip_depth = self.clip_depth.saturating_sub(1);
        self.commands.push(UIRenderCommand::DisableClip);
    }

    fn viewport_size(&self) -> (f64, f64) {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_transform_stack_composes() {
        let mut backend = RecordingBackend::new(320.0, 240.0);
        backend.push_transform(UITransform::Translate { x: 10.0, y: 0.0 });
        backend.push_transform(UITransform::Translate { x: 0.0, y: 5.0 });

        let p = backend.to_screen(1.0, 1.0);
        assert_relative_eq!(p.x, 11.0);
        assert_relative_eq!(p.y, 6.0);

        backend.pop_transform();
        backend.pop_transform();
        assert_eq!(backend.transform_depth(), 0);
        assert_eq!(backend.commands().len(), 4);
    }

    #[test]
    fn test_text_width_counts_chars() {
        let backend = RecordingBackend::new(100.0, 100.0).with_glyph_width(4.0);
        assert_relative_eq!(backend.text_width(FontId::DEFAULT, "héllo"), 20.0);
    }

    #[test]
    fn test_draw_commands_filter() {
        let mut backend = RecordingBackend::new(100.0, 100.0);
        backend.enable_clip(0, 0, 10, 10);
        backend.fill_rect(0, 0, 10, 10, 0xFF00_0000);
        backend.disable_clip();
        assert_eq!(backend.draw_commands().len(), 1);
        assert_eq!(backend.clip_depth(), 0);
    }
}
