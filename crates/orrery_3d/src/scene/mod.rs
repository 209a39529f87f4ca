//! Scene graph and orbital motion
//!
//! - [`SceneGraph`] - named nodes with parent links
//! - [`SolarScene`] - the Sun, planets and Moon placed and animated
//! - [`motion`] - pure orbital motion helpers

pub mod motion;
mod registry;
mod solar;

pub use registry::{NodeKey, SceneGraph, SceneNode};
pub use solar::{SolarScene, SOLAR_FRAME};
