//! UI input module
//!
//! Mouse buttons, keyboard modifiers and per-tick input sampling.

pub mod processor;

pub use processor::{InputSample, UIInputProcessor};

use bitflags::bitflags;

/// Mouse button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

bitflags! {
    /// Keyboard modifiers active during a key press
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Shift key
        const SHIFT = 0x01;
        /// Control key
        const CONTROL = 0x02;
        /// Alt / Option key
        const ALT = 0x04;
        /// Super / Command key
        const META = 0x08;
    }
}

impl Modifiers {
    /// Decode the host's raw modifier mask (GLFW layout); unknown bits are dropped
    pub fn from_raw(mask: i32) -> Self {
        Self::from_bits_truncate((mask & 0x0F) as u8)
    }
}
