//! Common imports for hosts driving the scene

pub use crate::camera::{
    AutoSwayCoupler, CameraSession, CameraState, FlyAnimator, FlyPlanner, FlyStatus, OrbitControl,
    OrbitController, OrbitInput, TransitionPlan,
};
pub use crate::catalog::{BodyKind, CelestialBody};
pub use crate::config::OrreryConfig;
pub use crate::info::{DataMode, InfoPanel};
pub use crate::oracle::{PositionOracle, ReferenceFrame};
pub use crate::scale::{RenderScale, ScalePreset};
pub use crate::scene::SolarScene;
pub use crate::texture::{FsTextureSource, Surface, TextureKey, TextureResolver};
pub use orrery_core::{Color, Easing, Vec3};
