//! Math utilities and types
//!
//! Screen-space vector aliases and the rotation value used by UI nodes.
//! All layout math runs in `f64` so host mouse coordinates pass through unchanged.

pub use nalgebra::{Matrix3, Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// 2D vector type (alignment, origin, screen points)
pub type Vec2 = Vector2<f64>;

/// 3D vector type (size, offset, render location; z is a depth slot only)
pub type Vec3 = Vector3<f64>;

/// 2D affine transform in homogeneous coordinates
pub type Affine2 = Matrix3<f64>;

/// Rotation around the screen's Z axis, in degrees
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    /// Rotation angle in degrees (positive = clockwise on a Y-down screen)
    pub degrees: f32,
}

impl Rotation {
    /// No rotation
    pub const NONE: Self = Self { degrees: 0.0 };

    /// Create a rotation from degrees
    pub const fn degrees(degrees: f32) -> Self {
        Self { degrees }
    }

    /// Whether this rotation is exactly zero (no transform is pushed)
    pub fn is_zero(&self) -> bool {
        self.degrees == 0.0
    }

    /// Angle in radians
    pub fn radians(&self) -> f64 {
        utils::deg_to_rad(f64::from(self.degrees))
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f64 = std::f64::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f64 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f64 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::{constants, Affine2, Vec2};

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f64) -> f64 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f64) -> f64 {
        radians * constants::RAD_TO_DEG
    }

    /// Replace NaN and negative values with zero
    pub fn non_negative(value: f64) -> f64 {
        if value.is_nan() || value < 0.0 { 0.0 } else { value }
    }

    /// Translation matrix
    pub fn translation(x: f64, y: f64) -> Affine2 {
        Affine2::new_translation(&Vec2::new(x, y))
    }

    /// Rotation matrix around an arbitrary pivot
    pub fn rotation_about(pivot_x: f64, pivot_y: f64, radians: f64) -> Affine2 {
        translation(pivot_x, pivot_y) * Affine2::new_rotation(radians) * translation(-pivot_x, -pivot_y)
    }

    /// Apply an affine transform to a point
    pub fn transform_point(matrix: &Affine2, x: f64, y: f64) -> Vec2 {
        let p = matrix * nalgebra::Vector3::new(x, y, 1.0);
        Vec2::new(p.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rotation_radians() {
        assert_relative_eq!(Rotation::degrees(180.0).radians(), constants::PI, epsilon = 1e-9);
        assert!(Rotation::NONE.is_zero());
        assert!(!Rotation::degrees(0.5).is_zero());
    }

    #[test]
    fn test_non_negative() {
        assert_eq!(utils::non_negative(-3.0), 0.0);
        assert_eq!(utils::non_negative(f64::NAN), 0.0);
        assert_eq!(utils::non_negative(12.5), 12.5);
    }

    #[test]
    fn test_rotation_about_keeps_pivot_fixed() {
        let m = utils::rotation_about(50.0, 20.0, Rotation::degrees(90.0).radians());
        let pivot = utils::transform_point(&m, 50.0, 20.0);
        assert_relative_eq!(pivot, Vec2::new(50.0, 20.0), epsilon = 1e-9);

        // A point one unit right of the pivot ends up one unit below it
        let p = utils::transform_point(&m, 51.0, 20.0);
        assert_relative_eq!(p, Vec2::new(50.0, 21.0), epsilon = 1e-9);
    }
}
