//! Auto-follow of the drifting solar frame

use super::orbit::OrbitControl;
use crate::config::CameraConfig;
use crate::oracle::ReferenceFrame;
use orrery_core::{Interpolate, Vec3};

/// Pulls the orbit target toward the solar frame origin every frame
///
/// The pull is a fixed fraction per tick: `drift_factor` while the frame
/// travels, `return_factor` while it rests.
#[derive(Clone, Debug)]
pub struct AutoSwayCoupler {
    pub drift_factor: f32,
    pub return_factor: f32,
}

impl AutoSwayCoupler {
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            drift_factor: config.drift_follow,
            return_factor: config.return_follow,
        }
    }

    /// Factor applied for this frame state
    pub fn factor(&self, frame: &ReferenceFrame) -> f32 {
        if frame.drifting {
            self.drift_factor
        } else {
            self.return_factor
        }
    }

    /// Retarget the controller toward `frame`
    ///
    /// Does nothing while a flight is active or auto-follow is off.
    /// Returns true if the target was moved.
    pub fn tick<C>(
        &self,
        flying: bool,
        auto_follow: bool,
        frame: &ReferenceFrame,
        camera: &mut Vec3,
        controller: &mut C,
    ) -> bool
    where
        C: OrbitControl + ?Sized,
    {
        if flying || !auto_follow {
            return false;
        }

        let target = controller.target().lerp(&frame.origin, self.factor(frame));
        controller.set_target(target);
        controller.update(camera);
        true
    }
}

impl Default for AutoSwayCoupler {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::OrbitController;

    #[test]
    fn test_drifting_frame_pulls_eight_percent() {
        let coupler = AutoSwayCoupler::default();
        let mut controller = OrbitController::new(Vec3::ZERO);
        let mut camera = Vec3::new(0.0, 12.0, 42.0);
        let frame = ReferenceFrame::drifting(Vec3::new(0.0, 0.0, -50.0));

        assert!(coupler.tick(false, true, &frame, &mut camera, &mut controller));
        assert!(controller.target().abs_diff_eq(Vec3::new(0.0, 0.0, -4.0), 1e-5));
        assert_eq!(camera, Vec3::new(0.0, 12.0, 42.0));
    }

    #[test]
    fn test_resting_frame_pulls_twelve_percent() {
        let coupler = AutoSwayCoupler::default();
        let mut controller = OrbitController::new(Vec3::new(10.0, 0.0, 0.0));
        let mut camera = Vec3::new(10.0, 12.0, 42.0);

        coupler.tick(false, true, &ReferenceFrame::RESTING, &mut camera, &mut controller);
        assert!(controller.target().abs_diff_eq(Vec3::new(8.8, 0.0, 0.0), 1e-5));
    }

    #[test]
    fn test_noop_while_flying_or_free() {
        let coupler = AutoSwayCoupler::default();
        let mut controller = OrbitController::new(Vec3::new(3.0, 0.0, 0.0));
        let mut camera = Vec3::new(0.0, 12.0, 42.0);
        let frame = ReferenceFrame::drifting(Vec3::new(0.0, 0.0, -50.0));

        assert!(!coupler.tick(true, true, &frame, &mut camera, &mut controller));
        assert!(!coupler.tick(false, false, &frame, &mut camera, &mut controller));
        assert_eq!(controller.target(), Vec3::new(3.0, 0.0, 0.0));
    }
}
