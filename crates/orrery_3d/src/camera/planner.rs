//! Fly-to transition planning

use super::orbit::OrbitControl;
use crate::config::CameraConfig;
use crate::oracle::PositionOracle;
use orrery_core::{Easing, Vec3};
use serde::Serialize;

/// Squared length below which the view direction is considered degenerate
const DEGENERATE_DIRECTION_SQ: f32 = 1e-6;

/// A camera transition from the current view to a framing of one body
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TransitionPlan {
    /// Body being framed
    pub body: String,
    /// Whether the transition still has frames to run
    pub active: bool,
    /// Linear progress in `[0, 1]`
    pub t: f32,
    /// Duration in seconds
    pub duration: f32,
    #[serde(skip)]
    pub easing: Easing,
    pub start_camera: Vec3,
    pub end_camera: Vec3,
    pub start_target: Vec3,
    pub end_target: Vec3,
}

impl TransitionPlan {
    /// Eased progress for the current `t`
    pub fn eased(&self) -> f32 {
        self.easing.apply(self.t)
    }
}

/// Computes where the camera should end up to frame a body
#[derive(Clone, Debug)]
pub struct FlyPlanner {
    /// Framing distance in multiples of the body radius
    pub radius_multiplier: f32,
    /// Closest framing distance
    pub min_distance: f32,
    /// Farthest framing distance
    pub max_distance: f32,
    /// Transition duration in seconds
    pub duration: f32,
    pub easing: Easing,
}

impl FlyPlanner {
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            radius_multiplier: config.radius_multiplier,
            min_distance: config.min_fly_distance,
            max_distance: config.max_fly_distance,
            duration: config.fly_duration,
            easing: config.fly_easing,
        }
    }

    /// Distance from the body centre at which it is framed
    ///
    /// Never panics: a NaN product falls to `min_distance`, and inverted
    /// bounds resolve to `max_distance`.
    pub fn framing_distance(&self, radius: f32) -> f32 {
        bound(radius * self.radius_multiplier, self.min_distance, self.max_distance)
    }

    /// Plan a flight from the current view to `body`
    ///
    /// The camera keeps its current viewing direction relative to the
    /// look-at target and slides in (or out) along it. Returns `None` when
    /// the oracle cannot place `body`.
    ///
    /// The framing distance is also held inside the controller's distance
    /// bounds so the controller never moves the planned end point.
    pub fn plan<O, C>(&self, body: &str, camera: Vec3, controller: &C, oracle: &O) -> Option<TransitionPlan>
    where
        O: PositionOracle + ?Sized,
        C: OrbitControl + ?Sized,
    {
        let position = oracle.world_position(body)?;
        let target = controller.target();

        let offset = camera - target;
        let direction = if offset.length_squared() < DEGENERATE_DIRECTION_SQ {
            Vec3::BACK
        } else {
            offset.normalize()
        };
        let (min, max) = controller.distance_bounds();
        let distance = bound(self.framing_distance(oracle.approx_radius(body)), min, max);

        Some(TransitionPlan {
            body: body.to_string(),
            active: true,
            t: 0.0,
            duration: self.duration,
            easing: self.easing,
            start_camera: camera,
            end_camera: position + direction * distance,
            start_target: target,
            end_target: position,
        })
    }
}

/// Clamp that tolerates NaN input and inverted bounds
fn bound(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

impl Default for FlyPlanner {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::OrbitController;

    struct Fixed(Vec3, f32);

    impl PositionOracle for Fixed {
        fn world_position(&self, name: &str) -> Option<Vec3> {
            (name == "Body").then_some(self.0)
        }

        fn approx_radius(&self, _name: &str) -> f32 {
            self.1
        }
    }

    #[test]
    fn test_framing_distance_is_clamped() {
        let planner = FlyPlanner::default();
        assert_eq!(planner.framing_distance(0.1), 2.5);
        assert_eq!(planner.framing_distance(5.0), 20.0);
        assert_eq!(planner.framing_distance(100.0), 80.0);
    }

    #[test]
    fn test_plan_keeps_view_direction() {
        let planner = FlyPlanner::default();
        let controller = OrbitController::new(Vec3::ZERO);
        let oracle = Fixed(Vec3::new(100.0, 0.0, 0.0), 5.0);

        let plan = planner
            .plan("Body", Vec3::new(0.0, 0.0, 10.0), &controller, &oracle)
            .unwrap();
        assert!(plan.active);
        assert_eq!(plan.t, 0.0);
        assert_eq!(plan.duration, 1.1);
        assert_eq!(plan.start_camera, Vec3::new(0.0, 0.0, 10.0));
        assert_eq!(plan.start_target, Vec3::ZERO);
        assert_eq!(plan.end_target, Vec3::new(100.0, 0.0, 0.0));
        assert_eq!(plan.end_camera, Vec3::new(100.0, 0.0, 20.0));
    }

    #[test]
    fn test_degenerate_direction_uses_plus_z() {
        let planner = FlyPlanner::default();
        let controller = OrbitController::new(Vec3::new(1.0, 1.0, 1.0));
        let oracle = Fixed(Vec3::ZERO, 1.0);

        let plan = planner
            .plan("Body", Vec3::new(1.0, 1.0, 1.0), &controller, &oracle)
            .unwrap();
        assert_eq!(plan.end_camera, Vec3::new(0.0, 0.0, 4.0));
        assert!(plan.end_camera.is_finite());
    }

    #[test]
    fn test_unknown_body_declines() {
        let planner = FlyPlanner::default();
        let controller = OrbitController::default();
        let oracle = Fixed(Vec3::ZERO, 1.0);
        assert!(planner
            .plan("Nowhere", Vec3::new(0.0, 0.0, 10.0), &controller, &oracle)
            .is_none());
    }

    #[test]
    fn test_framing_distance_never_panics() {
        let mut planner = FlyPlanner::default();
        planner.min_distance = f32::NAN;
        assert_eq!(planner.framing_distance(5.0), 20.0);

        planner.min_distance = 90.0;
        assert_eq!(planner.framing_distance(5.0), 80.0);

        let mut planner = FlyPlanner::default();
        planner.radius_multiplier = f32::NAN;
        assert_eq!(planner.framing_distance(5.0), 2.5);
    }

    #[test]
    fn test_plan_respects_controller_bounds() {
        let mut planner = FlyPlanner::default();
        planner.min_distance = 1.0;
        planner.radius_multiplier = 1.0;
        let controller = OrbitController::new(Vec3::ZERO).with_distance_bounds(2.5, 3000.0);
        let oracle = Fixed(Vec3::new(100.0, 0.0, 0.0), 0.5);

        let plan = planner
            .plan("Body", Vec3::new(0.0, 0.0, 10.0), &controller, &oracle)
            .unwrap();
        assert_eq!(plan.end_camera, Vec3::new(100.0, 0.0, 2.5));

        let tight = OrbitController::new(Vec3::ZERO).with_distance_bounds(2.5, 10.0);
        let oracle = Fixed(Vec3::new(100.0, 0.0, 0.0), 50.0);
        let plan = planner
            .plan("Body", Vec3::new(0.0, 0.0, 10.0), &tight, &oracle)
            .unwrap();
        assert_eq!(plan.end_camera, Vec3::new(100.0, 0.0, 10.0));
    }
}
