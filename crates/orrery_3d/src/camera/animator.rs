//! Fly-to transition playback

use super::orbit::OrbitControl;
use super::planner::TransitionPlan;
use orrery_core::{Interpolate, Vec3};

/// Progress this close to 1 counts as finished
const COMPLETION_EPS: f32 = 1e-4;

/// Outcome of one animator tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlyStatus {
    /// No transition was running; nothing was written
    Idle,
    /// The transition advanced and has frames left
    InFlight,
    /// The transition reached its end on this tick
    Arrived,
}

/// Plays a [`TransitionPlan`] over successive frames
///
/// While a plan is active the animator is the only writer of the camera
/// position and the controller target.
#[derive(Clone, Debug, Default)]
pub struct FlyAnimator {
    plan: Option<TransitionPlan>,
}

impl FlyAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `plan`, replacing any transition in flight
    pub fn start(&mut self, plan: TransitionPlan) {
        self.plan = Some(plan);
    }

    pub fn is_active(&self) -> bool {
        self.plan.as_ref().is_some_and(|p| p.active)
    }

    /// The running plan, or the last one that finished
    pub fn plan(&self) -> Option<&TransitionPlan> {
        self.plan.as_ref()
    }

    /// Linear progress of the running plan
    pub fn progress(&self) -> Option<f32> {
        self.plan.as_ref().filter(|p| p.active).map(|p| p.t)
    }

    /// Advance by `dt` seconds, writing the camera and controller target
    pub fn tick<C>(&mut self, dt: f32, camera: &mut Vec3, controller: &mut C) -> FlyStatus
    where
        C: OrbitControl + ?Sized,
    {
        let Some(plan) = self.plan.as_mut().filter(|p| p.active) else {
            return FlyStatus::Idle;
        };

        let step = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        plan.t = if plan.duration > 0.0 && plan.duration.is_finite() {
            (plan.t + step / plan.duration).min(1.0)
        } else {
            1.0
        };
        if plan.t > 1.0 - COMPLETION_EPS {
            plan.t = 1.0;
        }

        let k = plan.eased();
        *camera = plan.start_camera.lerp(&plan.end_camera, k);
        controller.set_target(plan.start_target.lerp(&plan.end_target, k));
        controller.update(camera);

        if plan.t >= 1.0 {
            plan.active = false;
            FlyStatus::Arrived
        } else {
            FlyStatus::InFlight
        }
    }
}
