//! # UI Engine
//!
//! A retained-mode, tree-structured UI layout and interaction engine.
//!
//! ## Features
//!
//! - **Anchor Layout**: Nodes position themselves from parent size, alignment, origin and offset
//! - **Interaction**: Edge-triggered hover and click handlers, gated by the host's focus state
//! - **Modal Overlays**: Full-screen backdrops with show/hide lifecycle and key/scroll/drag input
//! - **Backend Agnostic**: Drawing goes through [`UIRenderBackend`](ui::UIRenderBackend)
//! - **Configurable**: TOML/RON configuration for shape, overlay and compatibility defaults
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ui_engine::prelude::*;
//!
//! fn main() -> Result<(), UiError> {
//!     let mut ui = UIManager::new();
//!     let mut host = HeadlessHost::new();
//!     let mut backend = RecordingBackend::new(427.0, 240.0);
//!
//!     let panel = ui.spawn(Node::rectangle().with_size(120.0, 40.0).with_anchor(Anchor::Center));
//!     ui.attach(panel, Node::text("Play").with_size(0.0, 9.0).with_anchor(Anchor::Center))?;
//!
//!     // Once per input tick
//!     ui.update(213.0, 120.0, true, false, &host);
//!     // Once per frame
//!     ui.render(&mut backend, 0.016);
//!
//!     let menu = ui.spawn(ui.new_overlay());
//!     ui.show_overlay(menu, &mut host)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Configuration
pub mod config;
pub mod core;

pub mod events;
pub mod foundation;
pub mod ui;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        core::config::UiConfig,
        events::{DispatchedEvent, EventType, UiEvent},
        foundation::{
            collections::NodeId,
            math::{Rotation, Vec2, Vec3},
        },
        ui::{
            Anchor, Color, HeadlessHost, HostControl, MouseButton, Node, NodeKind, RecordingBackend,
            UIInputProcessor, UIManager, UIRenderBackend, UiError,
        },
    };
}
