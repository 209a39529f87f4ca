//! Camera session: view state shared by fly-to and auto-follow

use super::animator::{FlyAnimator, FlyStatus};
use super::orbit::{OrbitControl, OrbitController};
use super::planner::{FlyPlanner, TransitionPlan};
use super::sway::AutoSwayCoupler;
use crate::config::CameraConfig;
use crate::oracle::{PositionOracle, ReferenceFrame};
use orrery_core::Vec3;
use serde::Serialize;
use tracing::{debug, info};

/// What the session is doing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraState {
    Idle,
    Flying,
}

/// Owns the camera position, the orbit controller and the auto-follow flag
///
/// Per frame, exactly one of the fly animator or the auto-sway coupler
/// writes the view: the animator while a transition is active, otherwise
/// the coupler when auto-follow is on.
///
/// # Example
///
/// ```ignore
/// let mut session = CameraSession::new(&config.camera);
/// scene.update(dt);
/// session.request_focus("Mars", &scene);
/// session.tick(dt, scene.reference_frame());
/// ```
pub struct CameraSession<C: OrbitControl = OrbitController> {
    camera: Vec3,
    controller: C,
    planner: FlyPlanner,
    animator: FlyAnimator,
    coupler: AutoSwayCoupler,
    auto_follow: bool,
}

impl CameraSession<OrbitController> {
    /// Create a session with the stock orbit controller
    pub fn new(config: &CameraConfig) -> Self {
        let controller = OrbitController::new(Vec3::ZERO)
            .with_distance_bounds(config.min_orbit_distance, config.max_orbit_distance)
            .with_damping(config.damping);
        Self::with_controller(config, controller)
    }
}

impl<C: OrbitControl> CameraSession<C> {
    /// Create a session around an existing controller
    pub fn with_controller(config: &CameraConfig, controller: C) -> Self {
        Self {
            camera: config.initial_position,
            controller,
            planner: FlyPlanner::new(config),
            animator: FlyAnimator::new(),
            coupler: AutoSwayCoupler::new(config),
            auto_follow: config.auto_follow,
        }
    }

    /// Start flying to `body`
    ///
    /// Any transition in flight is replaced, starting from wherever the
    /// camera is right now. A successful request turns auto-follow off.
    /// Returns false, changing nothing, if the oracle cannot place `body`.
    pub fn request_focus<O>(&mut self, body: &str, oracle: &O) -> bool
    where
        O: PositionOracle + ?Sized,
    {
        let Some(plan) = self.planner.plan(body, self.camera, &self.controller, oracle) else {
            debug!("Ignoring focus request for unknown body '{}'", body);
            return false;
        };

        info!(
            "Flying to {} ({:.2}, {:.2}, {:.2})",
            body, plan.end_target.x, plan.end_target.y, plan.end_target.z
        );
        self.animator.start(plan);
        self.auto_follow = false;
        true
    }

    /// Advance the view by `dt` seconds
    pub fn tick(&mut self, dt: f32, frame: ReferenceFrame) -> CameraState {
        match self.animator.tick(dt, &mut self.camera, &mut self.controller) {
            FlyStatus::InFlight => return CameraState::Flying,
            FlyStatus::Arrived => {
                if let Some(plan) = self.animator.plan() {
                    info!("Arrived at {}", plan.body);
                }
                return CameraState::Idle;
            }
            FlyStatus::Idle => {}
        }

        self.coupler.tick(
            self.animator.is_active(),
            self.auto_follow,
            &frame,
            &mut self.camera,
            &mut self.controller,
        );
        CameraState::Idle
    }

    /// Turn auto-follow of the solar frame on or off
    pub fn set_auto_follow(&mut self, enabled: bool) {
        if enabled != self.auto_follow {
            debug!("Auto-follow {}", if enabled { "on" } else { "off" });
        }
        self.auto_follow = enabled;
    }

    pub fn auto_follow(&self) -> bool {
        self.auto_follow
    }

    pub fn state(&self) -> CameraState {
        if self.animator.is_active() {
            CameraState::Flying
        } else {
            CameraState::Idle
        }
    }

    /// Current camera position
    pub fn camera(&self) -> Vec3 {
        self.camera
    }

    /// Current look-at target
    pub fn target(&self) -> Vec3 {
        self.controller.target()
    }

    /// The running transition, or the last one that finished
    pub fn plan(&self) -> Option<&TransitionPlan> {
        self.animator.plan()
    }

    /// Body of the running transition
    pub fn flying_to(&self) -> Option<&str> {
        self.animator
            .plan()
            .filter(|p| p.active)
            .map(|p| p.body.as_str())
    }

    pub fn controller(&self) -> &C {
        &self.controller
    }

    /// Mutable access for user input; follow with [`Self::sync_controller`]
    pub fn controller_mut(&mut self) -> &mut C {
        &mut self.controller
    }

    /// Re-run the controller update after external mutation
    pub fn sync_controller(&mut self) -> bool {
        self.controller.update(&mut self.camera)
    }

    pub fn planner(&self) -> &FlyPlanner {
        &self.planner
    }

    pub fn coupler(&self) -> &AutoSwayCoupler {
        &self.coupler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_core::Interpolate;

    struct One;

    impl PositionOracle for One {
        fn world_position(&self, name: &str) -> Option<Vec3> {
            (name == "Mars").then_some(Vec3::new(40.0, 0.0, 0.0))
        }

        fn approx_radius(&self, _name: &str) -> f32 {
            1.0
        }
    }

    #[test]
    fn test_defaults() {
        let session = CameraSession::new(&CameraConfig::default());
        assert_eq!(session.camera(), Vec3::new(0.0, 12.0, 42.0));
        assert_eq!(session.target(), Vec3::ZERO);
        assert!(session.auto_follow());
        assert_eq!(session.state(), CameraState::Idle);
    }

    #[test]
    fn test_focus_clears_auto_follow_and_flies() {
        let mut session = CameraSession::new(&CameraConfig::default());
        assert!(session.request_focus("Mars", &One));
        assert!(!session.auto_follow());
        assert_eq!(session.state(), CameraState::Flying);
        assert_eq!(session.flying_to(), Some("Mars"));
    }

    #[test]
    fn test_unknown_focus_changes_nothing() {
        let mut session = CameraSession::new(&CameraConfig::default());
        assert!(!session.request_focus("Vulcan", &One));
        assert!(session.auto_follow());
        assert_eq!(session.state(), CameraState::Idle);
        assert!(session.plan().is_none());
    }

    #[test]
    fn test_coupler_waits_for_flight_to_finish() {
        let mut session = CameraSession::new(&CameraConfig::default());
        session.request_focus("Mars", &One);
        session.set_auto_follow(true);

        let frame = ReferenceFrame::drifting(Vec3::new(0.0, 0.0, -50.0));
        assert_eq!(session.tick(0.5, frame), CameraState::Flying);
        let mid_target = session.target();
        let expected = Vec3::ZERO.lerp(&Vec3::new(40.0, 0.0, 0.0), session.plan().unwrap().eased());
        assert!(mid_target.abs_diff_eq(expected, 1e-4));

        assert_eq!(session.tick(1.0, frame), CameraState::Idle);
        assert_eq!(session.target(), Vec3::new(40.0, 0.0, 0.0));

        session.tick(0.016, frame);
        let pulled = Vec3::new(40.0, 0.0, 0.0).lerp(&frame.origin, 0.08);
        assert!(session.target().abs_diff_eq(pulled, 1e-4));
    }

    #[test]
    fn test_flight_owns_the_view_with_auto_follow_on() {
        let mut session = CameraSession::new(&CameraConfig::default());
        session.request_focus("Mars", &One);
        session.set_auto_follow(true);

        let frame = ReferenceFrame::drifting(Vec3::new(0.0, 0.0, -50.0));
        assert_eq!(session.tick(0.0, frame), CameraState::Flying);
        assert_eq!(session.target(), Vec3::ZERO);
        assert_eq!(session.camera(), Vec3::new(0.0, 12.0, 42.0));
    }
}
