//! Easing curves
//!
//! Map linear progress `t` in `[0, 1]` to eased progress. Every curve
//! returns exactly `0.0` at `t = 0` and exactly `1.0` at `t = 1`, so an
//! interpolation driven by it lands precisely on its endpoints.

use serde::{Deserialize, Serialize};

/// Easing function applied to normalized progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant velocity
    Linear,
    /// Slow start
    EaseInCubic,
    /// Slow finish
    EaseOutCubic,
    /// Slow start, fast middle, slow finish
    #[default]
    EaseInOutCubic,
    /// Hermite smoothstep (`3t² − 2t³`)
    Smoothstep,
}

impl Easing {
    /// Apply the curve to `t`, clamping `t` into `[0, 1]` first
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInCubic => t * t * t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::Smoothstep => t * t * (3.0 - 2.0 * t),
        }
    }

    /// Get all curves
    pub fn all() -> &'static [Easing] {
        &[
            Easing::Linear,
            Easing::EaseInCubic,
            Easing::EaseOutCubic,
            Easing::EaseInOutCubic,
            Easing::Smoothstep,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        for easing in Easing::all() {
            assert_eq!(easing.apply(0.0), 0.0, "{:?} at 0", easing);
            assert_eq!(easing.apply(1.0), 1.0, "{:?} at 1", easing);
        }
    }

    #[test]
    fn test_monotonic_non_decreasing() {
        for easing in Easing::all() {
            let mut prev = easing.apply(0.0);
            for i in 1..=1000 {
                let k = easing.apply(i as f32 / 1000.0);
                assert!(k >= prev, "{:?} decreased at step {}", easing, i);
                prev = k;
            }
        }
    }

    #[test]
    fn test_in_out_cubic_midpoint_and_branches() {
        let e = Easing::EaseInOutCubic;
        assert!((e.apply(0.5) - 0.5).abs() < 1e-6);
        assert!((e.apply(0.25) - 0.0625).abs() < 1e-6);
        assert!((e.apply(0.75) - 0.9375).abs() < 1e-6);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        let e = Easing::EaseInOutCubic;
        assert_eq!(e.apply(-0.3), 0.0);
        assert_eq!(e.apply(1.7), 1.0);
    }
}
