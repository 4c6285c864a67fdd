//! UI node
//!
//! A [`Node`] carries the positional and interaction state every element of
//! the tree shares: enabled/interactable flags, size, alignment, origin,
//! offset, rotation, color, the parent back-reference, child handles and the
//! hover/click handler slots. What it draws is decided by its [`NodeKind`].
//!
//! Nodes live in the [`UIManager`](crate::ui::UIManager) arena and refer to
//! each other by [`NodeId`] only.

use crate::core::config::OverlayConfig;
use crate::events::{ClickContext, HoverContext};
use crate::foundation::collections::NodeId;
use crate::foundation::math::{utils, Rotation, Vec2, Vec3};
use crate::ui::backend::UITransform;
use crate::ui::color::Color;
use crate::ui::input::MouseButton;
use crate::ui::layout::{calculate_render_location, Anchor, ParentFrame};
use crate::ui::widgets::{Overlay, Rectangle, RoundedRectangle, Text};

/// Hover handler, called with the node whose hover state changed
pub type HoverHandler = Box<dyn FnMut(&mut Node, HoverContext)>;

/// Click handler, called with the clicked node
pub type ClickHandler = Box<dyn FnMut(&mut Node, ClickContext)>;

/// What a node draws
#[derive(Debug)]
pub enum NodeKind {
    /// Invisible container
    Group,
    /// Solid or textured rectangle
    Rectangle(Rectangle),
    /// Rectangle with rounded corners
    RoundedRectangle(RoundedRectangle),
    /// Text label (leaf)
    Text(Text),
    /// Full-screen modal backdrop
    Overlay(Overlay),
}

impl NodeKind {
    /// Whether nodes of this kind may own children
    pub fn is_composite(&self) -> bool {
        !matches!(self, Self::Text(_))
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::Rectangle(_) => "rectangle",
            Self::RoundedRectangle(_) => "rounded_rectangle",
            Self::Text(_) => "text",
            Self::Overlay(_) => "overlay",
        }
    }
}

/// Element of the UI tree
pub struct Node {
    kind: NodeKind,

    enabled: bool,
    interactable: bool,
    /// Interactable value to restore when re-enabled
    was_interactable: bool,

    size: Vec3,
    render_location: Vec3,
    align: Vec2,
    origin: Vec2,
    offset: Vec3,
    rotation: Rotation,
    color: Color,

    parent: Option<NodeId>,
    children: Vec<NodeId>,

    was_hovered: bool,
    on_hover: Option<HoverHandler>,
    on_click: Option<ClickHandler>,
}

impl Node {
    /// Create a node of the given kind with default geometry
    ///
    /// Overlays start disabled and non-interactable; showing one makes it
    /// interactable.
    pub fn new(kind: NodeKind) -> Self {
        let hidden = matches!(kind, NodeKind::Overlay(_));
        Self {
            kind,
            enabled: !hidden,
            interactable: !hidden,
            was_interactable: true,
            size: Vec3::zeros(),
            render_location: Vec3::zeros(),
            align: Anchor::TopLeft.to_normalized(),
            origin: Anchor::TopLeft.to_normalized(),
            offset: Vec3::zeros(),
            rotation: Rotation::NONE,
            color: Color::BLACK,
            parent: None,
            children: Vec::new(),
            was_hovered: false,
            on_hover: None,
            on_click: None,
        }
    }

    /// Invisible container
    pub fn group() -> Self {
        Self::new(NodeKind::Group)
    }

    /// Rectangle with default style
    pub fn rectangle() -> Self {
        Self::new(NodeKind::Rectangle(Rectangle::default()))
    }

    /// Rounded rectangle with default style
    pub fn rounded_rectangle() -> Self {
        Self::new(NodeKind::RoundedRectangle(RoundedRectangle::default()))
    }

    /// Text label
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(NodeKind::Text(Text::new(content)))
    }

    /// Hidden overlay with the default backdrop
    pub fn overlay() -> Self {
        Self::new(NodeKind::Overlay(Overlay::new())).with_color(OverlayConfig::default().backdrop_color)
    }

    // Builders

    /// Set size
    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.set_size(Vec3::new(width, height, self.size.z));
        self
    }

    /// Set alignment inside the parent
    #[must_use]
    pub fn with_align(mut self, align: impl Into<Vec2>) -> Self {
        self.align = align.into();
        self
    }

    /// Set origin inside the node itself
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<Vec2>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Set both alignment and origin to the same anchor
    #[must_use]
    pub fn with_anchor(self, anchor: Anchor) -> Self {
        self.with_align(anchor).with_origin(anchor)
    }

    /// Set offset
    #[must_use]
    pub fn with_offset(mut self, x: f64, y: f64) -> Self {
        self.offset = Vec3::new(x, y, self.offset.z);
        self
    }

    /// Set depth offset
    #[must_use]
    pub fn with_depth(mut self, z: f64) -> Self {
        self.offset.z = z;
        self
    }

    /// Set rotation in degrees
    #[must_use]
    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = Rotation::degrees(degrees);
        self
    }

    /// Set color
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set enabled
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.set_enabled(enabled);
        self
    }

    /// Set interactable
    #[must_use]
    pub fn with_interactable(mut self, interactable: bool) -> Self {
        self.set_interactable(interactable);
        self
    }

    /// Set hover handler
    #[must_use]
    pub fn on_hover(mut self, handler: impl FnMut(&mut Self, HoverContext) + 'static) -> Self {
        self.set_on_hover(handler);
        self
    }

    /// Set click handler
    #[must_use]
    pub fn on_click(mut self, handler: impl FnMut(&mut Self, ClickContext) + 'static) -> Self {
        self.set_on_click(handler);
        self
    }

    // Kind

    /// What this node draws
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Mutable access to the kind-specific style
    pub fn kind_mut(&mut self) -> &mut NodeKind {
        &mut self.kind
    }

    /// Whether this node may own children
    pub fn is_composite(&self) -> bool {
        self.kind.is_composite()
    }

    /// Whether this node is an overlay
    pub fn is_overlay(&self) -> bool {
        matches!(self.kind, NodeKind::Overlay(_))
    }

    /// Overlay state, if this is an overlay
    pub fn as_overlay(&self) -> Option<&Overlay> {
        match &self.kind {
            NodeKind::Overlay(overlay) => Some(overlay),
            _ => None,
        }
    }

    /// Mutable overlay state, if this is an overlay
    pub fn as_overlay_mut(&mut self) -> Option<&mut Overlay> {
        match &mut self.kind {
            NodeKind::Overlay(overlay) => Some(overlay),
            _ => None,
        }
    }

    /// Text style, if this is a label
    pub fn as_text(&self) -> Option<&Text> {
        match &self.kind {
            NodeKind::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Mutable text style, if this is a label
    pub fn as_text_mut(&mut self) -> Option<&mut Text> {
        match &mut self.kind {
            NodeKind::Text(text) => Some(text),
            _ => None,
        }
    }

    // Enabled / interactable state machine

    /// Whether the node is rendered
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the node
    ///
    /// Disabling snapshots the interactable flag and forces it off; enabling
    /// restores the snapshot. Setting the current value again does nothing.
    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled == self.enabled {
            return;
        }
        self.enabled = enabled;
        if enabled {
            self.interactable = self.was_interactable;
        } else {
            self.was_interactable = self.interactable;
            self.interactable = false;
        }
    }

    /// Stored interactable flag, ignoring the host
    pub fn interactable_flag(&self) -> bool {
        self.interactable
    }

    /// Effective interactable state given whether the host allows interaction
    pub fn is_interactable(&self, host_allows: bool) -> bool {
        self.interactable && host_allows
    }

    /// Set interactable
    ///
    /// While disabled this only changes the value restored on re-enable.
    pub fn set_interactable(&mut self, interactable: bool) {
        if self.enabled {
            self.interactable = interactable;
        } else {
            self.was_interactable = interactable;
        }
    }

    // Geometry

    /// Node size
    pub fn size(&self) -> Vec3 {
        self.size
    }

    /// Set size; negative and NaN components become zero
    pub fn set_size(&mut self, size: Vec3) {
        self.size = size.map(utils::non_negative);
    }

    pub(crate) fn set_width(&mut self, width: f64) {
        self.size.x = utils::non_negative(width);
    }

    /// Top-left screen position computed by the last render
    pub fn render_location(&self) -> Vec3 {
        self.render_location
    }

    /// Alignment inside the parent (fractions of the parent size)
    pub fn align(&self) -> Vec2 {
        self.align
    }

    /// Set alignment
    pub fn set_align(&mut self, align: impl Into<Vec2>) {
        self.align = align.into();
    }

    /// Origin inside the node (fractions of its own size)
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Set origin
    pub fn set_origin(&mut self, origin: impl Into<Vec2>) {
        self.origin = origin.into();
    }

    /// Offset from the aligned position
    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    /// Set offset
    pub fn set_offset(&mut self, offset: Vec3) {
        self.offset = offset;
    }

    /// Rotation around the origin point
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Set rotation
    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    /// Color
    pub fn color(&self) -> Color {
        self.color
    }

    /// Set color
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    // Tree links

    /// Composite that most recently adopted this node
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in insertion order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub(crate) fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<NodeId> {
        &mut self.children
    }

    // Interaction

    /// Hover latch from the last update
    pub fn is_hover_latched(&self) -> bool {
        self.was_hovered
    }

    /// Set hover handler
    pub fn set_on_hover(&mut self, handler: impl FnMut(&mut Self, HoverContext) + 'static) {
        self.on_hover = Some(Box::new(handler));
    }

    /// Set click handler
    pub fn set_on_click(&mut self, handler: impl FnMut(&mut Self, ClickContext) + 'static) {
        self.on_click = Some(Box::new(handler));
    }

    /// Whether the point lies inside the node's bounds (edges included)
    pub fn is_hovered(&self, mouse_x: f64, mouse_y: f64) -> bool {
        let x_start = self.render_location.x + self.offset.x;
        let y_start = self.render_location.y + self.offset.y;
        (x_start..=x_start + self.size.x).contains(&mouse_x)
            && (y_start..=y_start + self.size.y).contains(&mouse_y)
    }

    /// Update the hover latch. Returns the new state when it changed.
    ///
    /// Non-interactable nodes keep their latch untouched.
    pub fn handle_mouse_hover(&mut self, mouse_x: f64, mouse_y: f64, host_allows: bool) -> Option<bool> {
        if !self.is_interactable(host_allows) {
            return None;
        }
        let hovered = self.is_hovered(mouse_x, mouse_y);
        if hovered == self.was_hovered {
            return None;
        }

        if let Some(mut handler) = self.on_hover.take() {
            handler(self, HoverContext { hovered });
            self.on_hover.get_or_insert(handler);
        }
        self.was_hovered = hovered;
        Some(hovered)
    }

    /// Deliver a click if the node is interactable and hovered. Returns whether it was delivered.
    pub fn handle_mouse_click(&mut self, button: MouseButton, pressed: bool, host_allows: bool) -> bool {
        if !self.is_interactable(host_allows) || !self.was_hovered {
            return false;
        }
        if let Some(mut handler) = self.on_click.take() {
            handler(self, ClickContext { button, pressed });
            self.on_click.get_or_insert(handler);
        }
        true
    }

    // Rendering support

    pub(crate) fn update_render_location(&mut self, parent: &ParentFrame) {
        self.render_location =
            calculate_render_location(parent, &self.size, &self.align, &self.origin, &self.offset);
    }

    /// Rotation around `render_location + size * origin`, if the node is rotated
    pub fn rotation_transform(&self) -> Option<UITransform> {
        if self.rotation.is_zero() {
            return None;
        }
        Some(UITransform::Rotate {
            pivot_x: self.render_location.x + self.size.x * self.origin.x,
            pivot_y: self.render_location.y + self.size.y * self.origin.y,
            rotation: self.rotation,
        })
    }
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("kind", &self.kind)
            .field("enabled", &self.enabled)
            .field("interactable", &self.interactable)
            .field("size", &self.size)
            .field("render_location", &self.render_location)
            .field("parent", &self.parent)
            .field("children", &self.children.len())
            .field("was_hovered", &self.was_hovered)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn placed(x: f64, y: f64, width: f64, height: f64) -> Node {
        let mut node = Node::rectangle().with_size(width, height).with_offset(x, y);
        node.update_render_location(&ParentFrame::viewport(800.0, 600.0));
        node
    }

    fn hover_log(node: &mut Node) -> Rc<RefCell<Vec<bool>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        node.set_on_hover(move |_, ctx| sink.borrow_mut().push(ctx.hovered));
        log
    }

    #[test]
    fn test_defaults() {
        let node = Node::group();
        assert!(node.is_enabled());
        assert!(node.is_interactable(true));
        assert_eq!(node.size(), Vec3::zeros());
        assert_eq!(node.color(), Color::BLACK);
        assert_eq!(node.parent(), None);

        let overlay = Node::overlay();
        assert!(!overlay.is_enabled());
        assert!(!overlay.interactable_flag());
    }

    #[test]
    fn test_enable_round_trip_restores_interactable() {
        let mut node = Node::group().with_interactable(false);
        node.set_enabled(false);
        node.set_enabled(true);
        assert!(!node.interactable_flag());

        node.set_interactable(true);
        node.set_enabled(false);
        assert!(!node.interactable_flag());
        node.set_enabled(true);
        assert!(node.interactable_flag());
    }

    #[test]
    fn test_interactable_while_disabled_is_deferred() {
        let mut node = Node::group();
        node.set_enabled(false);
        node.set_interactable(true);
        assert!(!node.is_interactable(true));

        node.set_interactable(false);
        node.set_enabled(true);
        assert!(!node.is_interactable(true));
    }

    #[test]
    fn test_repeated_enable_is_noop() {
        let mut node = Node::group();
        node.set_interactable(false);
        node.set_enabled(true);
        assert!(!node.interactable_flag());
    }

    #[test]
    fn test_host_block_overrides_flag() {
        let node = Node::group();
        assert!(node.is_interactable(true));
        assert!(!node.is_interactable(false));
    }

    #[test]
    fn test_hover_bounds_inclusive() {
        let node = placed(10.0, 20.0, 30.0, 40.0);
        // Offset counts twice: once in the render location, once in the hit test
        assert!(node.is_hovered(20.0, 40.0));
        assert!(node.is_hovered(50.0, 80.0));
        assert!(!node.is_hovered(50.1, 80.0));
        assert!(!node.is_hovered(19.9, 40.0));
    }

    #[test]
    fn test_hover_is_edge_triggered() {
        let mut node = placed(0.0, 0.0, 10.0, 10.0);
        let log = hover_log(&mut node);

        assert_eq!(node.handle_mouse_hover(50.0, 50.0, true), None);
        assert_eq!(node.handle_mouse_hover(60.0, 60.0, true), None);
        assert!(log.borrow().is_empty());

        assert_eq!(node.handle_mouse_hover(5.0, 5.0, true), Some(true));
        assert_eq!(node.handle_mouse_hover(6.0, 6.0, true), None);
        assert_eq!(*log.borrow(), vec![true]);

        assert_eq!(node.handle_mouse_hover(50.0, 5.0, true), Some(false));
        assert_eq!(*log.borrow(), vec![true, false]);
    }

    #[test]
    fn test_hover_ignored_when_not_interactable() {
        let mut node = placed(0.0, 0.0, 10.0, 10.0).with_interactable(false);
        let log = hover_log(&mut node);
        assert_eq!(node.handle_mouse_hover(5.0, 5.0, true), None);

        node.set_interactable(true);
        assert_eq!(node.handle_mouse_hover(5.0, 5.0, false), None);
        assert!(log.borrow().is_empty());
        assert!(!node.is_hover_latched());
    }

    #[test]
    fn test_click_requires_hover_latch() {
        let clicks = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&clicks);
        let mut node = placed(0.0, 0.0, 10.0, 10.0).on_click(move |_, _| *counter.borrow_mut() += 1);

        assert!(!node.handle_mouse_click(MouseButton::Left, true, true));
        assert!(!node.handle_mouse_click(MouseButton::Left, false, true));
        assert_eq!(*clicks.borrow(), 0);

        node.handle_mouse_hover(5.0, 5.0, true);
        assert!(node.handle_mouse_click(MouseButton::Left, false, true));
        assert!(node.handle_mouse_click(MouseButton::Right, true, true));
        assert_eq!(*clicks.borrow(), 2);
    }

    #[test]
    fn test_handler_can_mutate_node() {
        let mut node = placed(0.0, 0.0, 10.0, 10.0).on_hover(|node, ctx| {
            node.set_color(if ctx.hovered { Color::WHITE } else { Color::BLACK });
        });
        node.handle_mouse_hover(1.0, 1.0, true);
        assert_eq!(node.color(), Color::WHITE);
    }

    #[test]
    fn test_handler_replaced_from_inside_is_kept() {
        let mut node = placed(0.0, 0.0, 10.0, 10.0);
        node.set_on_hover(|node, _| node.set_on_hover(|node, _| node.set_color(Color::WHITE)));
        node.handle_mouse_hover(1.0, 1.0, true);
        node.handle_mouse_hover(50.0, 50.0, true);
        assert_eq!(node.color(), Color::WHITE);
    }

    #[test]
    fn test_negative_size_clamped() {
        let mut node = Node::rectangle().with_size(-5.0, f64::NAN);
        assert_eq!(node.size(), Vec3::zeros());
        node.set_width(12.5);
        assert_relative_eq!(node.size().x, 12.5);
    }

    #[test]
    fn test_rotation_pivot() {
        let mut node = Node::rectangle()
            .with_size(40.0, 20.0)
            .with_anchor(Anchor::Center)
            .with_rotation(90.0);
        node.update_render_location(&ParentFrame::viewport(200.0, 100.0));

        assert_relative_eq!(node.render_location().x, 80.0);
        match node.rotation_transform() {
            Some(UITransform::Rotate { pivot_x, pivot_y, .. }) => {
                assert_relative_eq!(pivot_x, 100.0);
                assert_relative_eq!(pivot_y, 50.0);
            }
            other => panic!("expected rotation, got {other:?}"),
        }
        assert!(Node::group().rotation_transform().is_none());
    }
}
