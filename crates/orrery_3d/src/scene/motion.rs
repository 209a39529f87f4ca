//! Orbital motion helpers
//!
//! Circular orbits in the XZ plane, axial spin, the drifting solar frame
//! and the selection scale pulse. All functions are pure so the scene can
//! be stepped deterministically.

use crate::config::MotionConfig;
use orrery_core::{Interpolate, Vec3};
use std::f32::consts::{PI, TAU};

/// Golden angle in radians
const GOLDEN_ANGLE: f32 = PI * (3.0 - 2.236_068);

/// Initial orbital phase of the `index`-th body
///
/// Consecutive bodies are spread by the golden angle so no two start
/// lined up.
pub fn initial_phase(index: usize) -> f32 {
    (index as f32 * GOLDEN_ANGLE).rem_euclid(TAU)
}

/// Advance an orbital angle by one step
///
/// One orbital period (in years) maps to one revolution per second of
/// simulated time at speed 1.
pub fn advance_angle(angle: f32, dt: f32, speed: f32, period_years: f32) -> f32 {
    angle + dt * speed / period_years.max(1e-6) * TAU
}

/// Position on a circular orbit of `radius` in the XZ plane
pub fn orbit_position(angle: f32, radius: f32) -> Vec3 {
    Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
}

/// Signed spin rate: retrograde rotators spin the other way
pub fn spin_rate(rate: f32, day_hours: f32) -> f32 {
    if day_hours < 0.0 {
        -rate
    } else {
        rate
    }
}

/// Origin of the solar frame at elapsed time `t`
///
/// When the system is not moving the frame rests at the world origin.
/// Otherwise it sways sideways while travelling along -Z.
pub fn frame_origin(t: f32, motion: &MotionConfig) -> Vec3 {
    if !motion.moving {
        return Vec3::ZERO;
    }
    Vec3::new(
        (t * motion.sway_frequency).sin() * motion.sway_amplitude,
        0.0,
        -motion.sun_speed * t,
    )
}

/// Ease a display scale toward the selection target
pub fn ease_scale(current: f32, selected: bool, motion: &MotionConfig) -> f32 {
    let target = if selected { motion.selection_scale } else { 1.0 };
    current.lerp(&target, motion.selection_ease)
}
