//! Animatable value types
//!
//! Linear interpolation for the values the camera and scene animate.

use crate::math::Vec3;

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Linearly interpolate between self and other by factor t (0.0 to 1.0)
    ///
    /// Implementations return `self` exactly at `t = 0` and `other`
    /// exactly at `t = 1`.
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Check if two values are approximately equal (for settling detection)
    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool;
}

// Weighted form keeps both endpoints exact; `a + (b - a) * t` drifts at t = 1.
fn mix(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        mix(*self, *other, t)
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self - other).abs() < epsilon
    }
}

impl Interpolate for Vec3 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Vec3::new(
            mix(self.x, other.x, t),
            mix(self.y, other.y, t),
            mix(self.z, other.z, t),
        )
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }
}
