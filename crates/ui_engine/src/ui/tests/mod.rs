//! Scene-level tests driving `UIManager` against the recording backend and headless host

mod composition;
mod layout_scene;

use crate::foundation::collections::NodeId;
use crate::ui::rendering::{RecordingBackend, UIRenderCommand};
use crate::ui::UIManager;

/// Viewport used by most scene tests
pub(super) const VIEWPORT: (f64, f64) = (800.0, 600.0);

pub(super) fn backend() -> RecordingBackend {
    RecordingBackend::new(VIEWPORT.0, VIEWPORT.1)
}

/// Render one frame and return the backend
pub(super) fn render_frame(ui: &mut UIManager) -> RecordingBackend {
    let mut backend = backend();
    ui.render(&mut backend, 0.016);
    backend
}

/// Solid fills as `(x, y, width, height, argb)` in draw order
pub(super) fn fills(backend: &RecordingBackend) -> Vec<(i32, i32, i32, i32, u32)> {
    backend
        .commands()
        .iter()
        .filter_map(|command| match *command {
            UIRenderCommand::FillRect { x, y, width, height, argb } => Some((x, y, width, height, argb)),
            _ => None,
        })
        .collect()
}

pub(super) fn location(ui: &UIManager, id: NodeId) -> (f64, f64) {
    let node = ui.node(id).expect("live node");
    (node.render_location().x, node.render_location().y)
}
