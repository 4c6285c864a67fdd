//! Overlay widget - full-screen modal backdrop
//!
//! An overlay is a composite node that starts hidden, always covers the
//! whole viewport and, while shown, receives key, scroll and drag input that
//! ordinary nodes never see. Show/hide and input routing live on
//! [`UIManager`](crate::ui::UIManager) because they touch the host and the
//! overlay's children.

use crate::events::{DragContext, KeyContext, ScrollContext};
use crate::foundation::collections::NodeId;
use crate::ui::backend::UIRenderBackend;
use crate::ui::node::Node;

/// Key handler, called with the overlay node
pub type KeyHandler = Box<dyn FnMut(&mut Node, KeyContext)>;

/// Scroll handler, called with the first child under the cursor (if any)
pub type ScrollHandler = Box<dyn FnMut(Option<&mut Node>, ScrollContext)>;

/// Drag handler, called with the child pinned for the current gesture
pub type DragHandler = Box<dyn FnMut(&mut Node, DragContext)>;

/// Overlay state: input handlers and the drag-lock
#[derive(Default)]
pub struct Overlay {
    pub(crate) on_key: Option<KeyHandler>,
    pub(crate) on_scroll: Option<ScrollHandler>,
    pub(crate) on_drag: Option<DragHandler>,
    dragging: Option<NodeId>,
}

impl Overlay {
    /// Create an overlay without handlers
    pub fn new() -> Self {
        Self::default()
    }

    /// Set key handler
    pub fn set_on_key(&mut self, handler: impl FnMut(&mut Node, KeyContext) + 'static) {
        self.on_key = Some(Box::new(handler));
    }

    /// Set scroll handler
    pub fn set_on_scroll(&mut self, handler: impl FnMut(Option<&mut Node>, ScrollContext) + 'static) {
        self.on_scroll = Some(Box::new(handler));
    }

    /// Set drag handler
    pub fn set_on_drag(&mut self, handler: impl FnMut(&mut Node, DragContext) + 'static) {
        self.on_drag = Some(Box::new(handler));
    }

    /// Child pinned by the current drag gesture
    pub fn dragging(&self) -> Option<NodeId> {
        self.dragging
    }

    pub(crate) fn pin_drag(&mut self, node: NodeId) {
        self.dragging = Some(node);
    }

    /// Release the drag-lock so the next drag picks a new child
    pub fn clear_drag(&mut self) {
        self.dragging = None;
    }

    /// Fill the whole viewport with the backdrop color
    pub fn draw(&self, argb: u32, backend: &mut dyn UIRenderBackend) {
        let (width, height) = backend.viewport_size();
        backend.fill_rect(0, 0, width as i32, height as i32, argb);
    }
}

impl std::fmt::Debug for Overlay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Overlay")
            .field("on_key", &self.on_key.is_some())
            .field("on_scroll", &self.on_scroll.is_some())
            .field("on_drag", &self.on_drag.is_some())
            .field("dragging", &self.dragging)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::collections::NodeArena;
    use crate::ui::rendering::{RecordingBackend, UIRenderCommand};

    #[test]
    fn test_backdrop_covers_viewport() {
        let mut backend = RecordingBackend::new(427.0, 240.0);
        Overlay::new().draw(0xCC00_0000, &mut backend);
        assert_eq!(
            backend.commands(),
            &[UIRenderCommand::FillRect { x: 0, y: 0, width: 427, height: 240, argb: 0xCC00_0000 }]
        );
    }

    #[test]
    fn test_drag_lock() {
        let mut arena: NodeArena<()> = NodeArena::with_key();
        let child = arena.insert(());

        let mut overlay = Overlay::new();
        assert_eq!(overlay.dragging(), None);
        overlay.pin_drag(child);
        assert_eq!(overlay.dragging(), Some(child));
        overlay.clear_drag();
        assert_eq!(overlay.dragging(), None);
    }
}
