//! UI System Module
//!
//! Provides a clean separation between UI logic and rendering backend.
//!
//! Architecture:
//! - UIManager: owns the node arena, drives update and render
//! - node: per-node layout and interaction state machine
//! - widgets/: what each node kind draws (rectangle, rounded rectangle, text, overlay)
//! - backend / host: the collaborator traits the host implements
//! - rendering/: render command recording
//! - input/: UI input processing

pub mod backend;
pub mod color;
pub mod error;
pub mod host;
pub mod input;
pub mod layout;
pub mod manager;
pub mod node;
pub mod rendering;
pub mod widgets;

#[cfg(test)]
mod tests;

pub use backend::{FontId, TextureRef, UIRenderBackend, UITransform};
pub use color::Color;
pub use error::{HostError, UiError};
pub use host::{HeadlessHost, HostControl};
pub use layout::Anchor;
pub use manager::{UIManager, KEY_ESCAPE};
pub use node::{Node, NodeKind};

// Re-export widget types
pub use widgets::{Overlay, Rectangle, RoundedRectangle, Text};

// Re-export rendering types
pub use rendering::{RecordingBackend, UIRenderCommand};

// Re-export input types
pub use input::{InputSample, Modifiers, MouseButton, UIInputProcessor};
