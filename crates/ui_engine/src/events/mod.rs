//! UI interaction events
//!
//! Every interaction the manager dispatches to a node handler is also queued
//! here as a [`UiEvent`]. Hosts either drain the queue directly or register
//! listeners and call [`EventQueue::dispatch`] once per tick.
//! Key principles:
//! - Handler returns bool (true = consumed, stops forwarding)
//! - Registration system (only notify interested listeners)

use crate::foundation::collections::NodeId;
use crate::ui::input::{Modifiers, MouseButton};
use std::collections::HashMap;

/// Hover edge delivered to a node's hover handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverContext {
    /// New hover state
    pub hovered: bool,
}

/// Click delivered to a node's click handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickContext {
    /// Button involved
    pub button: MouseButton,
    /// Whether the button was clicked this tick
    pub pressed: bool,
}

/// Key press delivered to an overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyContext {
    /// Host key code
    pub key_code: i32,
    /// Active modifiers
    pub modifiers: Modifiers,
}

/// Scroll delivered to an overlay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollContext {
    /// First child under the cursor, if any
    pub hovered: Option<NodeId>,
    /// Scroll amount (positive = up)
    pub amount: f64,
}

/// Drag step delivered to an overlay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragContext {
    /// Child pinned for this gesture
    pub node: NodeId,
    /// Mouse X
    pub mouse_x: f64,
    /// Mouse Y
    pub mouse_y: f64,
    /// Horizontal movement since last drag step
    pub dx: f64,
    /// Vertical movement since last drag step
    pub dy: f64,
}

/// Event type identification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// Hover state changed
    Hover,
    /// Mouse click on a hovered node
    Click,
    /// Key pressed while an overlay is shown
    Key,
    /// Scroll while an overlay is shown
    Scroll,
    /// Drag while an overlay is shown
    Drag,
    /// Overlay shown
    OverlayShown,
    /// Overlay hidden
    OverlayHidden,
}

/// Interaction dispatched to a node
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    /// Hover edge
    Hover(HoverContext),
    /// Click (only pressed clicks are queued)
    Click(ClickContext),
    /// Key press
    Key(KeyContext),
    /// Scroll
    Scroll(ScrollContext),
    /// Drag step
    Drag(DragContext),
    /// Overlay became visible
    OverlayShown,
    /// Overlay became hidden
    OverlayHidden,
}

impl UiEvent {
    /// Type of this event
    pub fn event_type(&self) -> EventType {
        match self {
            Self::Hover(_) => EventType::Hover,
            Self::Click(_) => EventType::Click,
            Self::Key(_) => EventType::Key,
            Self::Scroll(_) => EventType::Scroll,
            Self::Drag(_) => EventType::Drag,
            Self::OverlayShown => EventType::OverlayShown,
            Self::OverlayHidden => EventType::OverlayHidden,
        }
    }
}

/// Event tagged with the node it was delivered to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DispatchedEvent {
    /// Receiving node
    pub node: NodeId,
    /// Event payload
    pub event: UiEvent,
}

/// Event listener trait
/// Returns true if event was consumed (stops forwarding)
pub trait EventListener {
    /// Handle an event, return true if consumed
    fn on_event(&mut self, event: &DispatchedEvent) -> bool;
}

impl<F> EventListener for F
where
    F: FnMut(&DispatchedEvent) -> bool,
{
    fn on_event(&mut self, event: &DispatchedEvent) -> bool {
        self(event)
    }
}

/// Queue of dispatched UI events with optional listeners
#[derive(Default)]
pub struct EventQueue {
    pending: Vec<DispatchedEvent>,
    listeners: HashMap<EventType, Vec<Box<dyn EventListener>>>,
}

impl EventQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for a specific event type
    pub fn register_listener(&mut self, event_type: EventType, listener: Box<dyn EventListener>) {
        self.listeners.entry(event_type).or_default().push(listener);
    }

    /// Queue an event
    pub fn send(&mut self, node: NodeId, event: UiEvent) {
        self.pending.push(DispatchedEvent { node, event });
    }

    /// Number of queued events
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no events are queued
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take all queued events without notifying listeners
    pub fn drain(&mut self) -> Vec<DispatchedEvent> {
        std::mem::take(&mut self.pending)
    }

    /// Deliver queued events to listeners and clear the queue
    /// Stops on first listener that returns true (consumed)
    pub fn dispatch(&mut self) {
        let pending = std::mem::take(&mut self.pending);
        for event in &pending {
            if let Some(listeners) = self.listeners.get_mut(&event.event.event_type()) {
                for listener in listeners.iter_mut() {
                    if listener.on_event(event) {
                        break;
                    }
                }
            }
        }
    }

    /// Clear all queued events (useful for state transitions)
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl std::fmt::Debug for EventQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventQueue")
            .field("pending", &self.pending)
            .field("listener_types", &self.listeners.keys().collect::<Vec<_>>())
            .finish()
    }
}
