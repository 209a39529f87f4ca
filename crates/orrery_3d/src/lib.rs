//! # Orrery 3D
//!
//! Headless Solar System scene with smooth fly-to camera transitions.
//!
//! This crate provides:
//! - **Catalog** of the Sun, the eight planets and the Moon
//! - **Render scales** mapping kilometres and AU to scene units
//! - **Scene graph** with orbital motion and a drifting solar frame
//! - **Camera session** combining orbit control, fly-to animation and
//!   auto-follow of the solar frame
//! - **Texture resolution** over ordered candidate lists with color fallback
//!
//! ## Quick Start
//!
//! ```rust
//! use orrery_3d::prelude::*;
//!
//! let config = OrreryConfig::default();
//! let mut scene = SolarScene::new(&config).unwrap();
//! let mut session = CameraSession::new(&config.camera);
//!
//! assert!(session.request_focus("Mars", &scene));
//! for _ in 0..120 {
//!     scene.update(1.0 / 60.0);
//!     session.tick(1.0 / 60.0, scene.reference_frame());
//! }
//! assert_eq!(session.state(), CameraState::Idle);
//! assert_eq!(Some(session.target()), scene.world_position("Mars"));
//! ```

pub mod camera;
pub mod catalog;
pub mod config;
pub mod error;
pub mod info;
pub mod oracle;
pub mod scale;
pub mod scene;
pub mod texture;

pub mod prelude;

pub use camera::{CameraSession, CameraState, OrbitControl, OrbitController, TransitionPlan};
pub use catalog::{BodyKind, CelestialBody};
pub use config::OrreryConfig;
pub use error::{Result, SceneError, TextureError};
pub use oracle::{PositionOracle, ReferenceFrame};
pub use scale::{RenderScale, ScalePreset};
pub use scene::SolarScene;
