//! Anchor-based layout
//!
//! Every node's screen position is a pure function of its own alignment,
//! origin, size and offset plus its parent's last computed size and location.
//! There is no constraint solve: one pass, parent before child.

use crate::foundation::math::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Named anchor point, usable for both alignment and origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Anchor {
    /// Top-left corner (0, 0)
    TopLeft,
    /// Top-center
    TopCenter,
    /// Top-right corner
    TopRight,
    /// Middle-left
    MiddleLeft,
    /// Center (0.5, 0.5)
    Center,
    /// Middle-right
    MiddleRight,
    /// Bottom-left corner
    BottomLeft,
    /// Bottom-center
    BottomCenter,
    /// Bottom-right corner (1, 1)
    BottomRight,
}

impl Anchor {
    /// All anchors, row by row from the top-left
    pub const ALL: [Self; 9] = [
        Self::TopLeft,
        Self::TopCenter,
        Self::TopRight,
        Self::MiddleLeft,
        Self::Center,
        Self::MiddleRight,
        Self::BottomLeft,
        Self::BottomCenter,
        Self::BottomRight,
    ];

    /// Get the normalized anchor position (0.0 to 1.0)
    pub fn to_normalized(self) -> Vec2 {
        let (x, y) = match self {
            Self::TopLeft => (0.0, 0.0),
            Self::TopCenter => (0.5, 0.0),
            Self::TopRight => (1.0, 0.0),
            Self::MiddleLeft => (0.0, 0.5),
            Self::Center => (0.5, 0.5),
            Self::MiddleRight => (1.0, 0.5),
            Self::BottomLeft => (0.0, 1.0),
            Self::BottomCenter => (0.5, 1.0),
            Self::BottomRight => (1.0, 1.0),
        };
        Vec2::new(x, y)
    }
}

impl From<Anchor> for Vec2 {
    fn from(anchor: Anchor) -> Self {
        anchor.to_normalized()
    }
}

/// Geometry a node is laid out against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParentFrame {
    /// Size the alignment fractions apply to
    pub size: Vec3,
    /// Parent's computed render location
    pub location: Vec3,
}

impl ParentFrame {
    /// Frame for a node without a parent: the whole viewport at the origin
    pub fn viewport(width: f64, height: f64) -> Self {
        Self {
            size: Vec3::new(width, height, 1.0),
            location: Vec3::zeros(),
        }
    }
}

/// Resolve one axis: `parent_size * align - size * origin + parent_location + offset`
#[inline]
pub fn absolute_position(
    parent_size: f64,
    size: f64,
    align: f64,
    origin: f64,
    parent_location: f64,
    offset: f64,
) -> f64 {
    parent_size * align - size * origin + parent_location + offset
}

/// Compute a node's render location inside `parent`
///
/// Depth carries no alignment: z is the parent's z plus the node's own z offset.
pub fn calculate_render_location(
    parent: &ParentFrame,
    size: &Vec3,
    align: &Vec2,
    origin: &Vec2,
    offset: &Vec3,
) -> Vec3 {
    Vec3::new(
        absolute_position(parent.size.x, size.x, align.x, origin.x, parent.location.x, offset.x),
        absolute_position(parent.size.y, size.y, align.y, origin.y, parent.location.y, offset.y),
        parent.location.z + offset.z,
    )
}
