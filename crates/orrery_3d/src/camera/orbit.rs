//! Orbit camera controller
//!
//! Orbits the camera around a target point with damped inertia. The
//! controller owns the look-at target; the camera position is owned by the
//! caller and rewritten by [`OrbitControl::update`].

use orrery_core::Vec3;
use std::f32::consts::PI;

const EPS: f32 = 1e-6;

/// Relative slack before the distance clamp rewrites the camera
const CLAMP_TOLERANCE: f32 = 1e-5;

/// The surface the fly-to animation drives
///
/// Anything that mutates the target or the camera from outside must call
/// [`update`](OrbitControl::update) afterwards so the controller's internal
/// state agrees with what was written.
pub trait OrbitControl {
    /// Current look-at target
    fn target(&self) -> Vec3;

    /// Move the look-at target
    fn set_target(&mut self, target: Vec3);

    /// Apply pending input and constraints, rewriting `camera`
    ///
    /// Returns true if the camera position changed.
    fn update(&mut self, camera: &mut Vec3) -> bool;

    /// Allowed camera-to-target distance `(min, max)`
    fn distance_bounds(&self) -> (f32, f32);
}

/// Pointer input for one frame
#[derive(Clone, Debug, Default)]
pub struct OrbitInput {
    /// Pointer movement delta in pixels
    pub pointer_delta: (f32, f32),
    /// Scroll wheel delta (positive = zoom in)
    pub scroll_delta: f32,
    /// Rotate button held (left click)
    pub rotate_pressed: bool,
    /// Pan button held (right or middle click)
    pub pan_pressed: bool,
}

impl OrbitInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input that drags the view by `(dx, dy)` pixels
    pub fn drag(dx: f32, dy: f32) -> Self {
        Self {
            pointer_delta: (dx, dy),
            rotate_pressed: true,
            ..Self::default()
        }
    }

    /// Input that scrolls the wheel by `delta`
    pub fn scroll(delta: f32) -> Self {
        Self {
            scroll_delta: delta,
            ..Self::default()
        }
    }
}

/// Damped orbit controller
///
/// Rotation, zoom and pan requests accumulate as pending deltas and are
/// bled off over several updates according to `damping`.
///
/// # Example
///
/// ```ignore
/// let mut orbit = OrbitController::new(Vec3::ZERO);
/// orbit.apply_input(&OrbitInput::drag(12.0, 0.0), camera);
/// orbit.update(&mut camera);
/// ```
#[derive(Clone, Debug)]
pub struct OrbitController {
    target: Vec3,

    /// Minimum distance from target
    pub min_distance: f32,
    /// Maximum distance from target
    pub max_distance: f32,
    /// Minimum polar angle (radians, 0 = looking straight down)
    pub min_polar: f32,
    /// Maximum polar angle (radians)
    pub max_polar: f32,

    /// Rotation sensitivity (radians per pixel)
    pub rotation_speed: f32,
    /// Zoom factor per scroll unit
    pub zoom_speed: f32,
    /// Pan sensitivity (fraction of distance per pixel)
    pub pan_speed: f32,

    /// Fraction of pending motion applied per update (0..1)
    pub damping: f32,

    /// Enable rotation
    pub rotate_enabled: bool,
    /// Enable zooming
    pub zoom_enabled: bool,
    /// Enable panning
    pub pan_enabled: bool,

    // Pending motion
    delta_azimuth: f32,
    delta_polar: f32,
    zoom_scale: f32,
    pan_offset: Vec3,
}

impl OrbitController {
    /// Create a controller looking at `target`
    pub fn new(target: Vec3) -> Self {
        Self {
            target,

            min_distance: 2.5,
            max_distance: 3000.0,
            min_polar: 0.0,
            max_polar: PI,

            rotation_speed: 0.005,
            zoom_speed: 0.95,
            pan_speed: 0.002,

            damping: 0.08,

            rotate_enabled: true,
            zoom_enabled: true,
            pan_enabled: true,

            delta_azimuth: 0.0,
            delta_polar: 0.0,
            zoom_scale: 1.0,
            pan_offset: Vec3::ZERO,
        }
    }

    /// Set the distance bounds
    pub fn with_distance_bounds(mut self, min: f32, max: f32) -> Self {
        self.min_distance = min.min(max);
        self.max_distance = max.max(min);
        self
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping.clamp(0.0, 1.0);
        self
    }

    /// Queue a rotation around the target
    pub fn rotate(&mut self, azimuth: f32, polar: f32) {
        self.delta_azimuth += azimuth;
        self.delta_polar += polar;
    }

    /// Queue a zoom; `scale < 1` moves the camera closer
    pub fn zoom(&mut self, scale: f32) {
        if scale > 0.0 {
            self.zoom_scale *= scale;
        }
    }

    /// Queue a world-space pan of the target
    pub fn pan(&mut self, offset: Vec3) {
        self.pan_offset += offset;
    }

    /// Translate pointer input into pending motion
    pub fn apply_input(&mut self, input: &OrbitInput, camera: Vec3) {
        let (dx, dy) = input.pointer_delta;

        if self.rotate_enabled && input.rotate_pressed {
            self.rotate(-dx * self.rotation_speed, -dy * self.rotation_speed);
        }

        if self.pan_enabled && input.pan_pressed {
            let offset = camera - self.target;
            let forward = (-offset).normalize();
            let right = forward.cross(Vec3::UP).normalize();
            let up = right.cross(forward).normalize();
            let distance = offset.length();

            self.pan(
                right * (-dx * self.pan_speed * distance) + up * (dy * self.pan_speed * distance),
            );
        }

        if self.zoom_enabled && input.scroll_delta.abs() > 0.0 {
            self.zoom(self.zoom_speed.powf(input.scroll_delta));
        }
    }

    /// Whether any queued motion is still being applied
    pub fn has_pending_motion(&self) -> bool {
        self.delta_azimuth.abs() > EPS
            || self.delta_polar.abs() > EPS
            || (self.zoom_scale - 1.0).abs() > EPS
            || self.pan_offset.length_squared() > EPS * EPS
    }

    /// Drop all queued motion
    pub fn stop(&mut self) {
        self.delta_azimuth = 0.0;
        self.delta_polar = 0.0;
        self.zoom_scale = 1.0;
        self.pan_offset = Vec3::ZERO;
    }

    /// Spherical coordinates `(radius, azimuth, polar)` of an offset
    fn to_spherical(offset: Vec3) -> (f32, f32, f32) {
        let radius = offset.length();
        if radius < EPS {
            return (0.0, 0.0, 0.0);
        }
        let azimuth = offset.x.atan2(offset.z);
        let polar = (offset.y / radius).clamp(-1.0, 1.0).acos();
        (radius, azimuth, polar)
    }

    fn from_spherical(radius: f32, azimuth: f32, polar: f32) -> Vec3 {
        let sin_polar = polar.sin();
        Vec3::new(
            radius * sin_polar * azimuth.sin(),
            radius * polar.cos(),
            radius * sin_polar * azimuth.cos(),
        )
    }
}

impl OrbitControl for OrbitController {
    fn target(&self) -> Vec3 {
        self.target
    }

    fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    fn update(&mut self, camera: &mut Vec3) -> bool {
        let mut offset = *camera - self.target;
        let mut moved = false;

        if self.has_pending_motion() {
            let t = self.damping;
            let (mut radius, mut azimuth, mut polar) = Self::to_spherical(offset);

            azimuth += self.delta_azimuth * t;
            polar = (polar + self.delta_polar * t).clamp(self.min_polar + EPS, self.max_polar - EPS);
            radius *= 1.0 + (self.zoom_scale - 1.0) * t;
            self.target += self.pan_offset * t;

            self.delta_azimuth *= 1.0 - t;
            self.delta_polar *= 1.0 - t;
            self.zoom_scale = 1.0 + (self.zoom_scale - 1.0) * (1.0 - t);
            self.pan_offset = self.pan_offset * (1.0 - t);
            if !self.has_pending_motion() {
                self.stop();
            }

            offset = Self::from_spherical(radius, azimuth, polar);
            moved = true;
        }

        // Offsets placed on a bound by the caller measure a few ulps off it
        let radius = offset.length();
        if radius > EPS {
            let below = radius < self.min_distance * (1.0 - CLAMP_TOLERANCE);
            let above = radius > self.max_distance * (1.0 + CLAMP_TOLERANCE);
            if below || above {
                let clamped = radius.max(self.min_distance).min(self.max_distance);
                offset = offset * (clamped / radius);
                moved = true;
            }
        }

        // Untouched cameras are left bit-for-bit as written
        if !moved {
            return false;
        }

        let next = self.target + offset;
        let changed = next != *camera;
        *camera = next;
        changed
    }

    fn distance_bounds(&self) -> (f32, f32) {
        (self.min_distance, self.max_distance)
    }
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_without_input_keeps_camera() {
        let mut orbit = OrbitController::new(Vec3::new(1.0, 2.0, 3.0));
        let mut camera = Vec3::new(0.3, 12.0, 42.0);
        assert!(!orbit.update(&mut camera));
        assert_eq!(camera, Vec3::new(0.3, 12.0, 42.0));
    }

    #[test]
    fn test_distance_is_clamped() {
        let mut orbit = OrbitController::new(Vec3::ZERO);
        let mut camera = Vec3::new(0.0, 0.0, 1.0);
        assert!(orbit.update(&mut camera));
        assert!((camera.length() - 2.5).abs() < 1e-5);

        let mut far = Vec3::new(0.0, 0.0, 5000.0);
        orbit.update(&mut far);
        assert!((far.length() - 3000.0).abs() < 1e-2);
    }

    #[test]
    fn test_rotation_is_damped_and_preserves_distance() {
        let mut orbit = OrbitController::new(Vec3::ZERO);
        let mut camera = Vec3::new(0.0, 0.0, 10.0);
        orbit.rotate(1.0, 0.0);

        orbit.update(&mut camera);
        let first_step = camera.x.atan2(camera.z);
        assert!((first_step - 0.08).abs() < 1e-4);
        assert!((camera.length() - 10.0).abs() < 1e-4);

        for _ in 0..500 {
            orbit.update(&mut camera);
        }
        assert!(!orbit.has_pending_motion());
        assert!((camera.x.atan2(camera.z) - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_zoom_in_moves_closer() {
        let mut orbit = OrbitController::new(Vec3::ZERO);
        let mut camera = Vec3::new(0.0, 0.0, 20.0);
        orbit.apply_input(&OrbitInput::scroll(3.0), camera);
        for _ in 0..200 {
            orbit.update(&mut camera);
        }
        assert!(camera.length() < 20.0);
        assert!(camera.length() >= 2.5);
    }

    #[test]
    fn test_pan_moves_target_and_camera_together() {
        let mut orbit = OrbitController::new(Vec3::ZERO);
        let mut camera = Vec3::new(0.0, 0.0, 10.0);
        orbit.pan(Vec3::new(4.0, 0.0, 0.0));
        for _ in 0..500 {
            orbit.update(&mut camera);
        }
        assert!((orbit.target().x - 4.0).abs() < 1e-3);
        assert!((camera - orbit.target()).abs_diff_eq(Vec3::new(0.0, 0.0, 10.0), 1e-3));
    }

    #[test]
    fn test_polar_angle_stays_off_the_pole() {
        let mut orbit = OrbitController::new(Vec3::ZERO);
        let mut camera = Vec3::new(0.0, 0.0, 10.0);
        orbit.rotate(0.0, -10.0);
        for _ in 0..500 {
            orbit.update(&mut camera);
        }
        assert!(camera.is_finite());
        assert!(camera.y > 9.99);
    }

    #[test]
    fn test_camera_on_a_bound_is_not_rewritten() {
        let mut orbit = OrbitController::new(Vec3::new(30.0, 0.0, 0.0));
        let direction = Vec3::new(0.0, 12.0, 42.0).normalize();
        let mut camera = orbit.target() + direction * 2.5;
        let placed = camera;
        assert!(!orbit.update(&mut camera));
        assert_eq!(camera, placed);
    }

    #[test]
    fn test_disabled_rotation_ignores_drag() {
        let mut orbit = OrbitController::new(Vec3::ZERO);
        orbit.rotate_enabled = false;
        orbit.apply_input(&OrbitInput::drag(100.0, 0.0), Vec3::new(0.0, 0.0, 10.0));
        assert!(!orbit.has_pending_motion());
    }
}
