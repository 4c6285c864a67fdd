//! UI Manager
//!
//! Central UI system: owns the node arena and the ordered root set, drives
//! the per-tick update (hover/click) and the per-frame render traversal, and
//! runs the overlay show/hide lifecycle against the host.
//!
//! Update and render have independent cadences and never fail. Tree edits
//! are validated and return [`UiError`].

use super::backend::{UIRenderBackend, UITransform};
use super::error::UiError;
use super::host::{interaction_allowed, HostControl};
use super::input::{InputSample, Modifiers, MouseButton};
use super::layout::ParentFrame;
use super::node::{Node, NodeKind};
use super::widgets::{Overlay, PixelRect, Rectangle, RoundedRectangle};
use crate::core::config::UiConfig;
use crate::events::{
    ClickContext, DispatchedEvent, DragContext, EventQueue, HoverContext, KeyContext, ScrollContext, UiEvent,
};
use crate::foundation::collections::{NodeArena, NodeId};
use crate::foundation::math::Vec3;

/// Host key code that closes shown overlays
pub const KEY_ESCAPE: i32 = 256;

/// Central UI management system
pub struct UIManager {
    /// All live nodes
    nodes: NodeArena<Node>,

    /// Top-level nodes in insertion order
    roots: Vec<NodeId>,

    config: UiConfig,

    /// Interactions dispatched since the last drain
    events: EventQueue,

    /// Raised while an overlay is shown; read by the host's HUD renderer
    hud_hidden: bool,

    frame_counter: u64,
    frame_delta: f32,
}

impl UIManager {
    /// Create a UI manager with default configuration
    pub fn new() -> Self {
        Self::with_config(UiConfig::default())
    }

    /// Create a UI manager with the given configuration
    pub fn with_config(config: UiConfig) -> Self {
        log::debug!("UIManager created (detach_on_add = {})", config.compat.detach_on_add);
        Self {
            nodes: NodeArena::with_key(),
            roots: Vec::new(),
            config,
            events: EventQueue::new(),
            hud_hidden: false,
            frame_counter: 0,
            frame_delta: 0.0,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    // Node factories honouring the configured defaults

    /// Rectangle using configured texture sizes
    pub fn new_rectangle(&self) -> Node {
        Node::new(NodeKind::Rectangle(Rectangle::from_config(&self.config.shapes)))
    }

    /// Rounded rectangle using configured corners
    pub fn new_rounded_rectangle(&self) -> Node {
        Node::new(NodeKind::RoundedRectangle(RoundedRectangle::from_config(&self.config.shapes)))
    }

    /// Hidden overlay using the configured backdrop
    pub fn new_overlay(&self) -> Node {
        Node::new(NodeKind::Overlay(Overlay::new())).with_color(self.config.overlay.backdrop_color)
    }

    // Arena

    /// Store a node and return its handle. The node is not part of the tree yet.
    pub fn insert(&mut self, node: Node) -> NodeId {
        let kind = node.kind().name();
        let id = self.nodes.insert(node);
        log::trace!("Inserted {kind} node {id:?}");
        id
    }

    /// Store a node and add it as a root
    pub fn spawn(&mut self, node: Node) -> NodeId {
        let id = self.insert(node);
        self.roots.push(id);
        id
    }

    /// Node by handle
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Mutable node by handle
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Whether the handle refers to a live node
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of live nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Remove a node from the arena, the root set and its parent's child list
    ///
    /// Children are not destroyed; their parent handle goes stale and they
    /// lay out against the viewport if rendered elsewhere.
    pub fn destroy(&mut self, id: NodeId) -> Result<Node, UiError> {
        let node = self.nodes.remove(id).ok_or(UiError::UnknownNode(id))?;
        self.roots.retain(|root| *root != id);
        if let Some(parent) = node.parent().and_then(|parent| self.nodes.get_mut(parent)) {
            parent.children_mut().retain(|child| *child != id);
        }
        for overlay in self.nodes.values_mut().filter_map(Node::as_overlay_mut) {
            if overlay.dragging() == Some(id) {
                overlay.clear_drag();
            }
        }
        log::debug!("Destroyed {} node {id:?} ({} children abandoned)", node.kind().name(), node.children().len());
        Ok(node)
    }

    // Roots

    /// Add an existing node to the root set
    pub fn add_element(&mut self, id: NodeId) -> Result<(), UiError> {
        if !self.nodes.contains_key(id) {
            return Err(UiError::UnknownNode(id));
        }
        self.roots.push(id);
        Ok(())
    }

    /// Remove a node from the root set. Returns whether it was a root.
    pub fn remove_element(&mut self, id: NodeId) -> bool {
        match self.roots.iter().position(|root| *root == id) {
            Some(index) => {
                self.roots.remove(index);
                true
            }
            None => false,
        }
    }

    /// Root nodes in insertion order
    pub fn elements(&self) -> &[NodeId] {
        &self.roots
    }

    // Composition

    /// Append `child` to `parent`'s children and point its back-reference at `parent`
    ///
    /// Unless `compat.detach_on_add` is set, a child that already had a parent
    /// stays in that parent's list as well; use [`reparent`](Self::reparent)
    /// to move it.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), UiError> {
        self.validate_link(parent, child)?;
        if self.config.compat.detach_on_add {
            self.detach(child);
        }
        self.link(parent, child);
        Ok(())
    }

    /// Append several children in order; nothing is attached if any fails validation
    pub fn add_children(&mut self, parent: NodeId, children: &[NodeId]) -> Result<(), UiError> {
        for &child in children {
            self.validate_link(parent, child)?;
        }
        for &child in children {
            if self.config.compat.detach_on_add {
                self.detach(child);
            }
            self.link(parent, child);
        }
        Ok(())
    }

    /// Move `child` under `parent`, removing it from its previous parent's list
    pub fn reparent(&mut self, parent: NodeId, child: NodeId) -> Result<(), UiError> {
        self.validate_link(parent, child)?;
        self.detach(child);
        self.link(parent, child);
        Ok(())
    }

    /// Insert `node` as a new child of `parent` and return its handle
    pub fn attach(&mut self, parent: NodeId, node: Node) -> Result<NodeId, UiError> {
        if !self.nodes.contains_key(parent) {
            return Err(UiError::UnknownNode(parent));
        }
        let id = self.insert(node);
        if let Err(err) = self.add_child(parent, id) {
            self.nodes.remove(id);
            return Err(err);
        }
        Ok(id)
    }

    /// Remove the first entry of `child` from `parent`'s list
    ///
    /// The back-reference is cleared only when it points at `parent`; a child
    /// adopted elsewhere keeps its current parent. Missing nodes are ignored.
    /// Returns whether the child was in the list.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        self.unlink(parent, child, false)
    }

    /// Remove every entry of each child from `parent`'s list. Returns how many were in the list.
    pub fn remove_children(&mut self, parent: NodeId, children: &[NodeId]) -> usize {
        children
            .iter()
            .filter(|&&child| self.unlink(parent, child, true))
            .count()
    }

    fn validate_link(&self, parent: NodeId, child: NodeId) -> Result<(), UiError> {
        let parent_node = self.nodes.get(parent).ok_or(UiError::UnknownNode(parent))?;
        if !self.nodes.contains_key(child) {
            return Err(UiError::UnknownNode(child));
        }
        if parent == child {
            return Err(UiError::SelfParent(child));
        }
        if !parent_node.is_composite() {
            return Err(UiError::NotComposite(parent));
        }
        if self.subtree_contains(child, parent) {
            return Err(UiError::Cycle { parent, child });
        }
        Ok(())
    }

    fn subtree_contains(&self, root: NodeId, target: NodeId) -> bool {
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if id == target {
                return true;
            }
            if let Some(node) = self.nodes.get(id) {
                stack.extend_from_slice(node.children());
            }
        }
        false
    }

    fn link(&mut self, parent: NodeId, child: NodeId) {
        if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.children_mut().push(child);
        }
        if let Some(child_node) = self.nodes.get_mut(child) {
            child_node.set_parent(Some(parent));
        }
    }

    fn unlink(&mut self, parent: NodeId, child: NodeId, all: bool) -> bool {
        let removed = self.nodes.get_mut(parent).is_some_and(|parent| {
            let children = parent.children_mut();
            let before = children.len();
            if all {
                children.retain(|id| *id != child);
            } else if let Some(index) = children.iter().position(|id| *id == child) {
                children.remove(index);
            }
            children.len() < before
        });
        if let Some(child) = self.nodes.get_mut(child) {
            if child.parent() == Some(parent) {
                child.set_parent(None);
            }
        }
        removed
    }

    fn detach(&mut self, child: NodeId) {
        let Some(old_parent) = self.nodes.get(child).and_then(Node::parent) else {
            return;
        };
        if let Some(old_parent) = self.nodes.get_mut(old_parent) {
            let children = old_parent.children_mut();
            if let Some(index) = children.iter().position(|id| *id == child) {
                children.remove(index);
            }
        }
    }

    // Interaction state

    /// Effective interactable state of a node under the given host
    pub fn is_interactable(&self, id: NodeId, host: &dyn HostControl) -> bool {
        self.nodes
            .get(id)
            .is_some_and(|node| node.is_interactable(interaction_allowed(host)))
    }

    /// Whether a shown overlay asked the host to hide its HUD
    pub fn is_hud_hidden(&self) -> bool {
        self.hud_hidden
    }

    // Update

    /// Per-tick update: hover then left/right click for every node, depth-first
    /// pre-order from each root in insertion order
    ///
    /// The host is queried once per call.
    pub fn update(&mut self, mouse_x: f64, mouse_y: f64, left_clicked: bool, right_clicked: bool, host: &dyn HostControl) {
        self.update_sample(
            InputSample {
                mouse_x,
                mouse_y,
                left_clicked,
                right_clicked,
            },
            host,
        );
    }

    /// Per-tick update from a sampled input state
    ///
    /// Events queued since the previous tick are dispatched to listeners and
    /// dropped first, so the queue only ever holds one tick's interactions.
    pub fn update_sample(&mut self, input: InputSample, host: &dyn HostControl) {
        self.events.dispatch();

        let allowed = interaction_allowed(host);
        let roots = self.roots.clone();
        for id in roots {
            self.update_node(id, &input, allowed);
        }
    }

    fn update_node(&mut self, id: NodeId, input: &InputSample, allowed: bool) {
        let children = {
            let Some(node) = self.nodes.get_mut(id) else {
                return;
            };

            if let Some(hovered) = node.handle_mouse_hover(input.mouse_x, input.mouse_y, allowed) {
                log::trace!("Node {id:?} hover -> {hovered}");
                self.events.send(id, UiEvent::Hover(HoverContext { hovered }));
            }

            for (button, pressed) in [
                (MouseButton::Left, input.left_clicked),
                (MouseButton::Right, input.right_clicked),
            ] {
                if node.handle_mouse_click(button, pressed, allowed) && pressed {
                    log::trace!("Node {id:?} clicked with {button:?}");
                    self.events.send(id, UiEvent::Click(ClickContext { button, pressed }));
                }
            }

            node.children().to_vec()
        };

        for child in children {
            self.update_node(child, input, allowed);
        }
    }

    // Render

    /// Per-frame render of every enabled root and its subtree
    pub fn render(&mut self, backend: &mut dyn UIRenderBackend, frame_delta: f32) {
        self.frame_counter += 1;
        self.frame_delta = frame_delta;

        let roots = self.roots.clone();
        log::trace!("UIManager rendering {} roots (frame {})", roots.len(), self.frame_counter);
        for id in roots {
            self.transform_and_render(id, backend);
        }
    }

    /// Frames rendered so far
    pub fn frame_count(&self) -> u64 {
        self.frame_counter
    }

    /// Delta passed to the most recent [`render`](Self::render)
    pub fn last_frame_delta(&self) -> f32 {
        self.frame_delta
    }

    fn transform_and_render(&mut self, id: NodeId, backend: &mut dyn UIRenderBackend) {
        let viewport = backend.viewport_size();
        let frame = match self.nodes.get(id) {
            Some(node) if node.is_enabled() => self.parent_frame(node.parent(), viewport),
            _ => return,
        };
        self.sync_intrinsic_size(id, backend);

        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        node.update_render_location(&frame);
        let rotation = node.rotation_transform();
        let offset_y = node.offset().y;

        if let Some(rotation) = rotation {
            backend.push_transform(rotation);
        }
        // Vertical offset is applied again on top of the render location
        backend.push_transform(UITransform::Translate { x: 0.0, y: offset_y });

        self.render_node(id, backend);

        backend.pop_transform();
        if rotation.is_some() {
            backend.pop_transform();
        }
    }

    /// Size and location a node with the given parent lays out against
    fn parent_frame(&self, parent: Option<NodeId>, viewport: (f64, f64)) -> ParentFrame {
        let (width, height) = viewport;
        match parent.and_then(|parent| self.nodes.get(parent)) {
            Some(parent) if parent.is_overlay() => ParentFrame {
                size: Vec3::new(width, height, 1.0),
                location: parent.render_location(),
            },
            Some(parent) => ParentFrame {
                size: parent.size(),
                location: parent.render_location(),
            },
            None => ParentFrame::viewport(width, height),
        }
    }

    /// Overlays cover the viewport; labels take their text or parent width
    fn sync_intrinsic_size(&mut self, id: NodeId, backend: &dyn UIRenderBackend) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        match node.kind() {
            NodeKind::Overlay(_) => {
                let (width, height) = backend.viewport_size();
                let depth = node.size().z;
                if let Some(node) = self.nodes.get_mut(id) {
                    node.set_size(Vec3::new(width, height, depth));
                }
            }
            NodeKind::Text(text) => {
                let parent_width = node
                    .parent()
                    .and_then(|parent| self.nodes.get(parent))
                    .map(|parent| parent.size().x);
                let width = text.fitted_width(node.size().x, parent_width, backend);
                if let Some(node) = self.nodes.get_mut(id) {
                    node.set_width(width);
                }
            }
            _ => {}
        }
    }

    fn render_node(&mut self, id: NodeId, backend: &mut dyn UIRenderBackend) {
        let (children, close_clip) = {
            let Some(node) = self.nodes.get(id) else {
                return;
            };
            let location = node.render_location();
            let size = node.size();
            let bounds = PixelRect::from_geometry(&location, &size);
            let argb = node.color().to_argb();

            let close_clip = match node.kind() {
                NodeKind::Group => false,
                NodeKind::Rectangle(rect) => rect.draw(bounds, argb, backend) && rect.mask,
                NodeKind::RoundedRectangle(rounded) => {
                    rounded.draw(bounds, argb, backend);
                    false
                }
                NodeKind::Text(text) => {
                    text.draw(&location, &size, argb, backend);
                    false
                }
                NodeKind::Overlay(overlay) => {
                    overlay.draw(argb, backend);
                    false
                }
            };
            (node.children().to_vec(), close_clip)
        };

        // Children render even when the node itself had nothing to draw
        for child in children {
            self.transform_and_render(child, backend);
        }

        if close_clip {
            backend.disable_clip();
        }
    }

    // Overlays

    /// Show an overlay: enable it, capture host input, apply configured side effects
    pub fn show_overlay(&mut self, id: NodeId, host: &mut dyn HostControl) -> Result<(), UiError> {
        let node = self.overlay_node_mut(id)?;
        node.set_enabled(true);

        host.install_exclusive_input_surface();
        if self.config.overlay.suppress_chat {
            host.set_chat_suppressed(true);
        }
        if self.config.overlay.hide_hud {
            self.hud_hidden = true;
        }
        self.events.send(id, UiEvent::OverlayShown);
        log::debug!("Overlay {id:?} shown");
        Ok(())
    }

    /// Hide an overlay and undo its side effects
    pub fn hide_overlay(&mut self, id: NodeId, host: &mut dyn HostControl) -> Result<(), UiError> {
        let node = self.overlay_node_mut(id)?;
        node.set_enabled(false);
        if let Some(overlay) = node.as_overlay_mut() {
            overlay.clear_drag();
        }

        if self.config.overlay.suppress_chat {
            host.set_chat_suppressed(false);
        }
        if self.config.overlay.hide_hud {
            self.hud_hidden = false;
        }
        self.events.send(id, UiEvent::OverlayHidden);
        log::debug!("Overlay {id:?} hidden");
        Ok(())
    }

    /// Root overlays currently shown
    pub fn shown_overlays(&self) -> Vec<NodeId> {
        self.roots
            .iter()
            .copied()
            .filter(|id| {
                self.nodes
                    .get(*id)
                    .is_some_and(|node| node.is_overlay() && node.is_enabled())
            })
            .collect()
    }

    /// Deliver a key press to one overlay (ignored while hidden)
    pub fn overlay_key_pressed(&mut self, id: NodeId, key_code: i32, modifiers: Modifiers) -> Result<(), UiError> {
        let node = self.overlay_node_mut(id)?;
        if !node.is_enabled() {
            return Ok(());
        }

        let context = KeyContext { key_code, modifiers };
        if let Some(mut handler) = node.as_overlay_mut().and_then(|overlay| overlay.on_key.take()) {
            handler(node, context);
            if let Some(overlay) = node.as_overlay_mut() {
                overlay.on_key.get_or_insert(handler);
            }
        }
        self.events.send(id, UiEvent::Key(context));
        Ok(())
    }

    /// Deliver a scroll to one overlay with its first hovered child (ignored while hidden)
    pub fn overlay_scroll(&mut self, id: NodeId, mouse_x: f64, mouse_y: f64, amount: f64) -> Result<(), UiError> {
        if !self.overlay_node_mut(id)?.is_enabled() {
            return Ok(());
        }

        let hovered = self.first_hovered_child(id, mouse_x, mouse_y);
        let context = ScrollContext { hovered, amount };

        let handler = self
            .nodes
            .get_mut(id)
            .and_then(Node::as_overlay_mut)
            .and_then(|overlay| overlay.on_scroll.take());
        if let Some(mut handler) = handler {
            handler(hovered.and_then(|child| self.nodes.get_mut(child)), context);
            if let Some(overlay) = self.nodes.get_mut(id).and_then(Node::as_overlay_mut) {
                overlay.on_scroll.get_or_insert(handler);
            }
        }
        self.events.send(id, UiEvent::Scroll(context));
        Ok(())
    }

    /// Deliver a drag step to one overlay (ignored while hidden)
    ///
    /// The first step of a gesture pins the first hovered child; later steps
    /// go to that child until [`end_drag`](Self::end_drag) or hide.
    pub fn overlay_drag(&mut self, id: NodeId, mouse_x: f64, mouse_y: f64, dx: f64, dy: f64) -> Result<(), UiError> {
        let node = self.overlay_node_mut(id)?;
        if !node.is_enabled() {
            return Ok(());
        }

        let pinned = node
            .as_overlay()
            .and_then(Overlay::dragging)
            .filter(|child| self.nodes.contains_key(*child));
        let Some(target) = pinned.or_else(|| self.first_hovered_child(id, mouse_x, mouse_y)) else {
            return Ok(());
        };

        let Some(overlay) = self.nodes.get_mut(id).and_then(Node::as_overlay_mut) else {
            return Ok(());
        };
        overlay.pin_drag(target);
        let handler = overlay.on_drag.take();

        let context = DragContext {
            node: target,
            mouse_x,
            mouse_y,
            dx,
            dy,
        };
        if let Some(mut handler) = handler {
            if let Some(child) = self.nodes.get_mut(target) {
                handler(child, context);
            }
            if let Some(overlay) = self.nodes.get_mut(id).and_then(Node::as_overlay_mut) {
                overlay.on_drag.get_or_insert(handler);
            }
        }
        self.events.send(id, UiEvent::Drag(context));
        Ok(())
    }

    fn overlay_node_mut(&mut self, id: NodeId) -> Result<&mut Node, UiError> {
        let node = self.nodes.get_mut(id).ok_or(UiError::UnknownNode(id))?;
        if node.is_overlay() {
            Ok(node)
        } else {
            Err(UiError::NotOverlay(id))
        }
    }

    fn first_hovered_child(&self, id: NodeId, mouse_x: f64, mouse_y: f64) -> Option<NodeId> {
        self.nodes.get(id)?.children().iter().copied().find(|child| {
            self.nodes
                .get(*child)
                .is_some_and(|child| child.is_hovered(mouse_x, mouse_y))
        })
    }

    // Host input fan-out to shown root overlays

    /// Key press from the host; Escape then hides every shown overlay
    pub fn handle_key_pressed(&mut self, key_code: i32, raw_modifiers: i32, host: &mut dyn HostControl) {
        let modifiers = Modifiers::from_raw(raw_modifiers);
        for id in self.shown_overlays() {
            // Handles come from shown_overlays, so this cannot fail
            let _ = self.overlay_key_pressed(id, key_code, modifiers);
        }
        if key_code == KEY_ESCAPE {
            self.handle_escape(host);
        }
    }

    /// Scroll from the host
    pub fn handle_scroll(&mut self, mouse_x: f64, mouse_y: f64, amount: f64) {
        for id in self.shown_overlays() {
            let _ = self.overlay_scroll(id, mouse_x, mouse_y, amount);
        }
    }

    /// Drag step from the host
    pub fn handle_drag(&mut self, mouse_x: f64, mouse_y: f64, dx: f64, dy: f64) {
        for id in self.shown_overlays() {
            let _ = self.overlay_drag(id, mouse_x, mouse_y, dx, dy);
        }
    }

    /// End the current drag gesture on every overlay
    pub fn end_drag(&mut self) {
        for overlay in self.nodes.values_mut().filter_map(Node::as_overlay_mut) {
            overlay.clear_drag();
        }
    }

    /// Hide every shown root overlay
    pub fn handle_escape(&mut self, host: &mut dyn HostControl) {
        for id in self.shown_overlays() {
            let _ = self.hide_overlay(id, host);
        }
    }

    // Events

    /// Take the interactions queued since the last update or drain
    pub fn drain_events(&mut self) -> Vec<DispatchedEvent> {
        self.events.drain()
    }

    /// Deliver queued interactions to registered listeners
    pub fn dispatch_events(&mut self) {
        self.events.dispatch();
    }

    /// Event queue for listener registration
    pub fn events_mut(&mut self) -> &mut EventQueue {
        &mut self.events
    }
}

impl Default for UIManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for UIManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UIManager")
            .field("nodes", &self.nodes.len())
            .field("roots", &self.roots)
            .field("hud_hidden", &self.hud_hidden)
            .field("frame_counter", &self.frame_counter)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::host::HeadlessHost;

    #[test]
    fn test_attach_to_leaf_fails() {
        let mut ui = UIManager::new();
        let label = ui.spawn(Node::text("score"));
        let before = ui.node_count();

        assert_eq!(ui.attach(label, Node::rectangle()), Err(UiError::NotComposite(label)));
        assert_eq!(ui.node_count(), before);
    }

    #[test]
    fn test_cycles_rejected() {
        let mut ui = UIManager::new();
        let a = ui.spawn(Node::group());
        let b = ui.attach(a, Node::group()).unwrap();
        let c = ui.attach(b, Node::group()).unwrap();

        assert_eq!(ui.add_child(a, a), Err(UiError::SelfParent(a)));
        assert_eq!(ui.add_child(c, a), Err(UiError::Cycle { parent: c, child: a }));
    }

    #[test]
    fn test_add_children_is_atomic() {
        let mut ui = UIManager::new();
        let parent = ui.spawn(Node::group());
        let ok = ui.insert(Node::rectangle());
        let stale = ui.insert(Node::rectangle());
        ui.destroy(stale).unwrap();

        assert!(ui.add_children(parent, &[ok, stale]).is_err());
        assert!(ui.node(parent).unwrap().children().is_empty());
        assert_eq!(ui.node(ok).unwrap().parent(), None);
    }

    #[test]
    fn test_remove_element_by_identity() {
        let mut ui = UIManager::new();
        let a = ui.spawn(Node::group());
        let b = ui.spawn(Node::group());

        assert!(ui.remove_element(a));
        assert!(!ui.remove_element(a));
        assert_eq!(ui.elements(), &[b]);
        // Still alive, just not a root
        assert!(ui.contains(a));
    }

    #[test]
    fn test_overlay_ops_reject_other_kinds() {
        let mut ui = UIManager::new();
        let mut host = HeadlessHost::new();
        let rect = ui.spawn(Node::rectangle());

        assert_eq!(ui.show_overlay(rect, &mut host), Err(UiError::NotOverlay(rect)));
        assert_eq!(ui.overlay_scroll(rect, 0.0, 0.0, 1.0), Err(UiError::NotOverlay(rect)));
        assert_eq!(host.input_surface_installs, 0);
    }

    #[test]
    fn test_configured_factories() {
        let mut config = UiConfig::default();
        config.shapes = config.shapes.with_corners(3, 4);
        let ui = UIManager::with_config(config);

        match ui.new_rounded_rectangle().kind() {
            NodeKind::RoundedRectangle(style) => {
                assert_eq!(style.corner_radius, 3);
                assert_eq!(style.corner_segments, 4);
            }
            other => panic!("unexpected kind {other:?}"),
        }
        assert_eq!(ui.new_overlay().color().alpha_byte(), 204);
    }
}
