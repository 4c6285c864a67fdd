//! Text widget - single-line labels

use crate::foundation::math::Vec3;
use crate::ui::backend::{FontId, UIRenderBackend};
use serde::{Deserialize, Serialize};

/// Text label style
///
/// The label's width follows its content (measured with the backend's font
/// metrics) or, with `auto_fit`, its parent's width. Height is whatever the
/// node's size says; a label with zero height is not drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    /// Text content to display
    pub content: String,

    /// Draw with a drop shadow
    pub shadow: bool,

    /// Stretch to the parent's width instead of the content width
    pub auto_fit: bool,

    /// Font used for drawing and measuring
    pub font: FontId,
}

impl Text {
    /// Create a label with the given content
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Enable drop shadow
    #[must_use]
    pub fn with_shadow(mut self, shadow: bool) -> Self {
        self.shadow = shadow;
        self
    }

    /// Follow the parent's width
    #[must_use]
    pub fn with_auto_fit(mut self, auto_fit: bool) -> Self {
        self.auto_fit = auto_fit;
        self
    }

    /// Set font
    #[must_use]
    pub fn with_font(mut self, font: FontId) -> Self {
        self.font = font;
        self
    }

    /// Width the label should take
    ///
    /// `parent_width` is `None` for labels without a parent; auto-fit labels
    /// then keep their current width.
    pub fn fitted_width(
        &self,
        current_width: f64,
        parent_width: Option<f64>,
        backend: &dyn UIRenderBackend,
    ) -> f64 {
        if self.auto_fit {
            parent_width.unwrap_or(current_width)
        } else {
            backend.text_width(self.font, &self.content)
        }
    }

    /// Draw the label at `location`. Nothing is drawn unless both width and height are positive.
    pub fn draw(&self, location: &Vec3, size: &Vec3, argb: u32, backend: &mut dyn UIRenderBackend) -> bool {
        if size.x <= 0.0 || size.y <= 0.0 {
            return false;
        }
        backend.draw_text(
            self.font,
            &self.content,
            location.x as i32,
            location.y as i32,
            argb,
            self.shadow,
        );
        true
    }
}
