//! Specialized collection types

pub use slotmap::{Key, SlotMap};

slotmap::new_key_type! {
    /// Stable handle to a UI node stored in the manager's arena.
    ///
    /// Handles are non-owning: a handle whose node has been destroyed simply
    /// resolves to `None`.
    pub struct NodeId;
}

/// Handle-based arena of UI nodes
pub type NodeArena<T> = SlotMap<NodeId, T>;
