//! Camera fly-to and view-state management
//!
//! - [`OrbitController`] - damped orbit control around a look-at target
//! - [`FlyPlanner`] - computes where a fly-to transition should end
//! - [`FlyAnimator`] - plays a transition with an eased curve
//! - [`AutoSwayCoupler`] - keeps the target on the drifting solar frame
//! - [`CameraSession`] - owns all of the above plus the auto-follow flag

mod animator;
mod orbit;
mod planner;
mod session;
mod sway;

pub use animator::{FlyAnimator, FlyStatus};
pub use orbit::{OrbitControl, OrbitController, OrbitInput};
pub use planner::{FlyPlanner, TransitionPlan};
pub use session::{CameraSession, CameraState};
pub use sway::AutoSwayCoupler;
