//! UI error types
//!
//! Only tree construction and host queries can fail. Per-tick update and
//! per-frame render never return errors.

use crate::foundation::collections::NodeId;
use thiserror::Error;

/// Errors from building or reshaping the node tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// Handle does not refer to a live node
    #[error("Node {0:?} does not exist")]
    UnknownNode(NodeId),

    /// Attempted to add children to a leaf node
    #[error("Node {0:?} cannot own children")]
    NotComposite(NodeId),

    /// Overlay-only operation invoked on another node kind
    #[error("Node {0:?} is not an overlay")]
    NotOverlay(NodeId),

    /// A node cannot be its own child
    #[error("Node {0:?} cannot be attached to itself")]
    SelfParent(NodeId),

    /// Attaching would make a node its own ancestor
    #[error("Attaching {child:?} under {parent:?} would create a cycle")]
    Cycle {
        /// Intended parent
        parent: NodeId,
        /// Node that already contains `parent`
        child: NodeId,
    },
}

/// Failures reported by the host focus/chat collaborator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// Host screen state could not be queried
    #[error("Host focus query failed: {0}")]
    FocusQuery(String),

    /// Host is not ready yet (e.g. no client instance during startup)
    #[error("Host unavailable")]
    Unavailable,
}
