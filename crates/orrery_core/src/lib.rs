//! Orrery Core
//!
//! Foundational primitives shared by the Orrery crates:
//!
//! - **Math**: [`Vec3`] with the vector operations the camera and scene need
//! - **Color**: linear RGBA [`Color`] with hex parsing for catalog entries
//! - **Easing**: curves mapping linear progress to eased progress
//! - **Interpolation**: the [`Interpolate`] trait for animatable values
//!
//! # Example
//!
//! ```rust
//! use orrery_core::{Easing, Interpolate, Vec3};
//!
//! let from = Vec3::ZERO;
//! let to = Vec3::new(10.0, 0.0, 0.0);
//! let k = Easing::EaseInOutCubic.apply(0.5);
//! assert_eq!(from.lerp(&to, k), Vec3::new(5.0, 0.0, 0.0));
//! ```

pub mod color;
pub mod easing;
pub mod math;
pub mod values;

pub use color::{Color, ColorParseError};
pub use easing::Easing;
pub use math::Vec3;
pub use values::Interpolate;
