//! UI Input Processing
//!
//! Turns raw host mouse state into the per-tick sample the manager consumes.

use super::MouseButton;

/// Mouse state handed to `UIManager::update` once per input tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputSample {
    /// Mouse X in scaled UI pixels
    pub mouse_x: f64,
    /// Mouse Y in scaled UI pixels
    pub mouse_y: f64,
    /// Left button went down since the previous tick
    pub left_clicked: bool,
    /// Right button went down since the previous tick
    pub right_clicked: bool,
}

/// UI input processor
///
/// Hosts report raw window-space positions and button transitions as they
/// arrive; [`sample`](Self::sample) is called once per tick to produce an
/// [`InputSample`] and reset the per-tick click latches.
#[derive(Debug, Clone)]
pub struct UIInputProcessor {
    /// Current mouse position in window pixels
    mouse_x: f64,
    mouse_y: f64,

    /// Window-to-UI scale factor (GUI scale)
    scale: f64,

    /// Mouse button states
    left_button_down: bool,
    right_button_down: bool,
    left_clicked_this_tick: bool,
    right_clicked_this_tick: bool,
    left_released_this_tick: bool,
}

impl UIInputProcessor {
    /// Create a processor for the given GUI scale (values <= 0 fall back to 1)
    pub fn new(scale: f64) -> Self {
        Self {
            mouse_x: 0.0,
            mouse_y: 0.0,
            scale: if scale > 0.0 { scale } else { 1.0 },
            left_button_down: false,
            right_button_down: false,
            left_clicked_this_tick: false,
            right_clicked_this_tick: false,
            left_released_this_tick: false,
        }
    }

    /// Update GUI scale (call when the host changes it)
    pub fn set_scale(&mut self, scale: f64) {
        if scale > 0.0 {
            self.scale = scale;
        }
    }

    /// Update mouse position in window pixels
    pub fn update_mouse_position(&mut self, x: f64, y: f64) {
        self.mouse_x = x;
        self.mouse_y = y;
    }

    /// Update mouse button state
    pub fn update_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        match button {
            MouseButton::Left => {
                let was_down = self.left_button_down;
                self.left_button_down = pressed;
                self.left_clicked_this_tick |= !was_down && pressed;
                self.left_released_this_tick |= was_down && !pressed;
            }
            MouseButton::Right => {
                let was_down = self.right_button_down;
                self.right_button_down = pressed;
                self.right_clicked_this_tick |= !was_down && pressed;
            }
            MouseButton::Middle => {}
        }
    }

    /// Whether the left button was released since the last sample (ends drag gestures)
    pub fn left_released(&self) -> bool {
        self.left_released_this_tick
    }

    /// Current mouse position in UI pixels
    pub fn mouse_position(&self) -> (f64, f64) {
        (self.mouse_x / self.scale, self.mouse_y / self.scale)
    }

    /// Produce this tick's sample and reset per-tick latches
    pub fn sample(&mut self) -> InputSample {
        let (mouse_x, mouse_y) = self.mouse_position();
        let sample = InputSample {
            mouse_x,
            mouse_y,
            left_clicked: self.left_clicked_this_tick,
            right_clicked: self.right_clicked_this_tick,
        };
        self.left_clicked_this_tick = false;
        self.right_clicked_this_tick = false;
        self.left_released_this_tick = false;
        sample
    }
}

impl Default for UIInputProcessor {
    fn default() -> Self {
        Self::new(1.0)
    }
}
